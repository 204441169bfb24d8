//! Adapters implementing the notification ports.

mod http;
mod memory;

pub use http::HttpNotificationFeed;
pub use memory::InMemoryNotificationFeed;
