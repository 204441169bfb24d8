//! Port contracts for the calendar context.

mod feed;

pub use feed::{ScheduleFeed, ScheduleFeedError, ScheduleFeedResult};
