//! Adapters implementing the calendar ports.

mod http;
mod memory;

pub use http::HttpScheduleFeed;
pub use memory::InMemoryScheduleFeed;
