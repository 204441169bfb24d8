//! Ports through which the notification context reaches the backend.

mod feed;

pub use feed::{NotificationFeed, NotificationFeedError, NotificationFeedResult};
