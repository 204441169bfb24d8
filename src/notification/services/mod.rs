//! Services orchestrating the notification context.

mod poller;

pub use poller::{NotificationPoller, POLL_INTERVAL};
