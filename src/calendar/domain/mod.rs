//! Domain types for the calendar context.

mod error;
mod event;
mod overlay;
mod range;

pub use error::CalendarDomainError;
pub use event::{CalendarEvent, CalendarEventData};
pub use overlay::{EventPanel, Tooltip};
pub use range::{DateRange, RangeUnit};
