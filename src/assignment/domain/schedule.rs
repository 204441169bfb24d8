//! Scheduled time slots and their display forms.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Long date-time format used in the detail modal.
const LONG_FORMAT: &str = "%A, %B %-d, %Y, %-I:%M %p";

/// Short date-time format used in calendar overlays.
const SHORT_FORMAT: &str = "%a, %b %-d, %-I:%M %p";

/// Scheduled start and end of an assignment.
///
/// The server is trusted to keep `end >= start`; a violating slot must not
/// break rendering, so derived durations clamp to zero instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeSlot {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl TimeSlot {
    /// Creates a slot from start and end timestamps.
    #[must_use]
    pub const fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Returns the scheduled start.
    #[must_use]
    pub const fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// Returns the scheduled end.
    #[must_use]
    pub const fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Returns the duration in whole minutes, clamped to zero.
    #[must_use]
    pub fn duration_minutes(&self) -> i64 {
        self.end.signed_duration_since(self.start).num_minutes().max(0)
    }

    /// Returns the duration in hours with one decimal place, rounded half-up
    /// on tenths.
    #[must_use]
    #[expect(
        clippy::integer_division,
        clippy::integer_division_remainder_used,
        reason = "tenth-hour rounding is performed on integer minutes"
    )]
    pub fn duration_display(&self) -> String {
        let tenths = (self.duration_minutes() * 10 + 30) / 60;
        format!("{}.{}", tenths / 10, tenths % 10)
    }

    /// Formats the slot as a long range for the detail modal, e.g.
    /// `Monday, January 5, 2026, 9:00 AM - Monday, January 5, 2026, 10:00 AM`.
    #[must_use]
    pub fn long_range(&self) -> String {
        format!(
            "{} - {}",
            self.start.format(LONG_FORMAT),
            self.end.format(LONG_FORMAT)
        )
    }

    /// Formats the slot as a short range for calendar overlays, e.g.
    /// `Mon, Jan 5, 9:00 AM - 10:00 AM`.
    ///
    /// The end keeps only its time when it falls on the start's date.
    #[must_use]
    pub fn short_range(&self) -> String {
        let start_text = self.start.format(SHORT_FORMAT);
        if self.start.date_naive() == self.end.date_naive() {
            format!("{start_text} - {}", self.end.format("%-I:%M %p"))
        } else {
            format!("{start_text} - {}", self.end.format(SHORT_FORMAT))
        }
    }
}
