//! Services orchestrating the schedule view.

mod schedule;

pub use schedule::{CalendarService, RangeFetch};
