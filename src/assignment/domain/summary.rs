//! Card-level assignment summary.

use super::{AssignmentId, AssignmentStatus, Money, TimeSlot};
use serde::{Deserialize, Serialize};

/// Parameter object for building a card-level summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentSummaryData {
    /// Assignment identifier.
    pub id: AssignmentId,
    /// Current lifecycle status.
    pub status: AssignmentStatus,
    /// Scheduled time slot.
    pub slot: TimeSlot,
    /// Street address line.
    pub location: String,
    /// City name.
    pub city: String,
    /// Language interpreted from.
    pub source_language: String,
    /// Language interpreted into.
    pub target_language: String,
    /// Kind of interpretation service.
    pub service_type: String,
    /// Hourly rate shown on the card.
    pub hourly_rate: Money,
}

/// Last-known summary of one visible assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentSummary {
    id: AssignmentId,
    status: AssignmentStatus,
    slot: TimeSlot,
    location: String,
    city: String,
    source_language: String,
    target_language: String,
    service_type: String,
    hourly_rate: Money,
}

impl AssignmentSummary {
    /// Creates a summary from its parts.
    #[must_use]
    pub fn new(data: AssignmentSummaryData) -> Self {
        Self {
            id: data.id,
            status: data.status,
            slot: data.slot,
            location: data.location,
            city: data.city,
            source_language: data.source_language,
            target_language: data.target_language,
            service_type: data.service_type,
            hourly_rate: data.hourly_rate,
        }
    }

    /// Returns the assignment identifier.
    #[must_use]
    pub const fn id(&self) -> AssignmentId {
        self.id
    }

    /// Returns the current lifecycle status.
    #[must_use]
    pub const fn status(&self) -> AssignmentStatus {
        self.status
    }

    /// Returns the scheduled time slot.
    #[must_use]
    pub const fn slot(&self) -> &TimeSlot {
        &self.slot
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

    /// Returns the source language.
    #[must_use]
    pub fn source_language(&self) -> &str {
        &self.source_language
    }

    /// Returns the target language.
    #[must_use]
    pub fn target_language(&self) -> &str {
        &self.target_language
    }

    /// Returns the combined language pair, e.g. `English → French`.
    #[must_use]
    pub fn language_pair(&self) -> String {
        format!("{} → {}", self.source_language, self.target_language)
    }

    /// Returns the service type.
    #[must_use]
    pub fn service_type(&self) -> &str {
        &self.service_type
    }

    /// Returns the hourly rate.
    #[must_use]
    pub const fn hourly_rate(&self) -> Money {
        self.hourly_rate
    }

    /// Replaces the status with a server-acknowledged value.
    ///
    /// Only the store calls this, keeping the single mutation path.
    pub(crate) fn set_status(&mut self, status: AssignmentStatus) {
        self.status = status;
    }
}
