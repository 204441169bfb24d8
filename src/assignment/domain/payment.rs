//! Payment terms and the estimated-total formula.

use super::{AssignmentDomainError, Money, TimeSlot};
use serde::{Deserialize, Serialize};

/// Hourly rate and minimum billable hours for one assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PaymentTerms {
    hourly_rate: Money,
    minimum_hours: u32,
}

impl PaymentTerms {
    /// Creates validated payment terms.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentDomainError::NonPositiveRate`] when the hourly
    /// rate is zero or negative.
    pub const fn new(hourly_rate: Money, minimum_hours: u32) -> Result<Self, AssignmentDomainError> {
        if !hourly_rate.is_positive() {
            return Err(AssignmentDomainError::NonPositiveRate(hourly_rate));
        }
        Ok(Self {
            hourly_rate,
            minimum_hours,
        })
    }

    /// Returns the hourly rate.
    #[must_use]
    pub const fn hourly_rate(&self) -> Money {
        self.hourly_rate
    }

    /// Returns the minimum billable hours.
    #[must_use]
    pub const fn minimum_hours(&self) -> u32 {
        self.minimum_hours
    }

    /// Computes the estimated total: `rate x max(minimum_hours, duration)`.
    ///
    /// The single authoritative implementation of the estimate; the detail
    /// modal and the calendar overlays must agree bit-for-bit, so both call
    /// here. Evaluated in integer cent-minutes, rounded half-up at the final
    /// division to cents.
    #[must_use]
    #[expect(
        clippy::integer_division,
        reason = "round-half-up is implemented as (n + 30) / 60 on integers"
    )]
    pub fn estimated_total(&self, slot: &TimeSlot) -> Money {
        let billable_minutes = slot
            .duration_minutes()
            .max(i64::from(self.minimum_hours).saturating_mul(60));
        let cent_minutes = self.hourly_rate.cents().saturating_mul(billable_minutes);
        Money::from_cents(cent_minutes.saturating_add(30) / 60)
    }
}
