//! Calendar events with their embedded assignment attributes.

use super::CalendarDomainError;
use crate::assignment::domain::{
    AssignmentId, AssignmentStatus, Money, PaymentTerms, TimeSlot,
};

/// Parameter object for building a calendar event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEventData {
    /// Assignment backing the event.
    pub id: AssignmentId,
    /// Event title.
    pub title: String,
    /// Scheduled time slot.
    pub slot: TimeSlot,
    /// Lifecycle status, drives the event colour.
    pub status: AssignmentStatus,
    /// Street address line.
    pub location: String,
    /// City name.
    pub city: String,
    /// Language interpreted from.
    pub source_language: String,
    /// Language interpreted into.
    pub target_language: String,
    /// Hourly rate.
    pub hourly_rate: Money,
    /// Minimum billable hours.
    pub minimum_hours: u32,
    /// Free-text special requirements, when any.
    pub special_requirements: Option<String>,
}

/// One event on the schedule, carrying everything the tooltip and the
/// detail panel show so neither needs a second fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEvent {
    id: AssignmentId,
    title: String,
    slot: TimeSlot,
    status: AssignmentStatus,
    location: String,
    city: String,
    language_pair: String,
    payment: PaymentTerms,
    special_requirements: String,
}

impl CalendarEvent {
    /// Builds an event from its embedded attributes.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarDomainError`] when the rate is not positive.
    pub fn new(data: CalendarEventData) -> Result<Self, CalendarDomainError> {
        let payment = PaymentTerms::new(data.hourly_rate, data.minimum_hours)?;
        let special_requirements = data
            .special_requirements
            .filter(|text| !text.is_empty())
            .unwrap_or_else(|| "None".to_owned());
        Ok(Self {
            id: data.id,
            title: data.title,
            slot: data.slot,
            status: data.status,
            location: data.location,
            city: data.city,
            language_pair: format!("{} → {}", data.source_language, data.target_language),
            payment,
            special_requirements,
        })
    }

    /// Returns the backing assignment identifier.
    #[must_use]
    pub const fn id(&self) -> AssignmentId {
        self.id
    }

    /// Returns the event title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the scheduled time slot.
    #[must_use]
    pub const fn slot(&self) -> &TimeSlot {
        &self.slot
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> AssignmentStatus {
        self.status
    }

    /// Returns the event colour taken from the status palette.
    #[must_use]
    pub const fn color(&self) -> &'static str {
        self.status.color()
    }

    /// Returns the street address line.
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Returns the city name.
    #[must_use]
    pub fn city(&self) -> &str {
        &self.city
    }

    /// Returns the combined language pair, e.g. `English → French`.
    #[must_use]
    pub fn language_pair(&self) -> &str {
        &self.language_pair
    }

    /// Returns the payment terms.
    #[must_use]
    pub const fn payment(&self) -> &PaymentTerms {
        &self.payment
    }

    /// Returns the special requirements; `None` stands in when there are
    /// none.
    #[must_use]
    pub fn special_requirements(&self) -> &str {
        &self.special_requirements
    }

    /// Returns the duration in display tenths of an hour, e.g. `1.5`.
    #[must_use]
    pub fn duration_display(&self) -> String {
        self.slot.duration_display()
    }

    /// Computes the estimated total for this event's slot and terms.
    #[must_use]
    pub fn estimated_total(&self) -> Money {
        self.payment.estimated_total(&self.slot)
    }
}
