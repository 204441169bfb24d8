//! Modal-level assignment detail payload.

use super::{AssignmentId, AssignmentStatus, Money, PaymentTerms, TimeSlot};

/// Parameter object for building a detail payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentDetailData {
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
    /// State or province.
    pub state: String,
    /// Postal code.
    pub zip_code: String,
    /// Language interpreted from.
    pub source_language: String,
    /// Language interpreted into.
    pub target_language: String,
    /// Kind of interpretation service.
    pub service_type: String,
    /// Rate and minimum billable hours.
    pub payment: PaymentTerms,
    /// Free-text special requirements, when any.
    pub special_requirements: Option<String>,
    /// Free-text notes, when any.
    pub notes: Option<String>,
    /// Whether the backend currently allows starting.
    pub can_start: bool,
    /// Whether the backend currently allows completing.
    pub can_complete: bool,
    /// Whether the backend currently allows cancelling.
    pub can_cancel: bool,
}

/// Full detail payload rendered in the modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentDetail {
    id: AssignmentId,
    status: AssignmentStatus,
    slot: TimeSlot,
    location: String,
    city: String,
    state: String,
    zip_code: String,
    source_language: String,
    target_language: String,
    service_type: String,
    payment: PaymentTerms,
    special_requirements: Option<String>,
    notes: Option<String>,
    can_start: bool,
    can_complete: bool,
    can_cancel: bool,
}

impl AssignmentDetail {
    /// Creates a detail payload from its parts.
    #[must_use]
    pub fn new(data: AssignmentDetailData) -> Self {
        Self {
            id: data.id,
            status: data.status,
            slot: data.slot,
            location: data.location,
            city: data.city,
            state: data.state,
            zip_code: data.zip_code,
            source_language: data.source_language,
            target_language: data.target_language,
            service_type: data.service_type,
            payment: data.payment,
            special_requirements: data.special_requirements,
            notes: data.notes,
            can_start: data.can_start,
            can_complete: data.can_complete,
            can_cancel: data.can_cancel,
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

    /// Returns the state or province.
    #[must_use]
    pub fn state(&self) -> &str {
        &self.state
    }

    /// Returns the postal code.
    #[must_use]
    pub fn zip_code(&self) -> &str {
        &self.zip_code
    }

    /// Returns the combined address line, e.g. `12 Main St, Springfield, IL 62704`.
    #[must_use]
    pub fn full_address(&self) -> String {
        let mut address = self.location.clone();
        for part in [&self.city, &self.state] {
            if !part.is_empty() {
                address.push_str(", ");
                address.push_str(part);
            }
        }
        if !self.zip_code.is_empty() {
            address.push(' ');
            address.push_str(&self.zip_code);
        }
        address
    }

    /// Returns the combined language pair, e.g. `English → French`.
    #[must_use]
    pub fn language_pair(&self) -> String {
        format!("{} → {}", self.source_language, self.target_language)
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

    /// Returns the service type.
    #[must_use]
    pub fn service_type(&self) -> &str {
        &self.service_type
    }

    /// Returns the payment terms.
    #[must_use]
    pub const fn payment(&self) -> &PaymentTerms {
        &self.payment
    }

    /// Returns the special requirements, when any.
    #[must_use]
    pub fn special_requirements(&self) -> Option<&str> {
        self.special_requirements.as_deref()
    }

    /// Returns the notes, when any.
    #[must_use]
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Returns whether the backend currently allows starting.
    #[must_use]
    pub const fn can_start(&self) -> bool {
        self.can_start
    }

    /// Returns whether the backend currently allows completing.
    #[must_use]
    pub const fn can_complete(&self) -> bool {
        self.can_complete
    }

    /// Returns whether the backend currently allows cancelling.
    #[must_use]
    pub const fn can_cancel(&self) -> bool {
        self.can_cancel
    }

    /// Computes the estimated total for this assignment's slot and terms.
    #[must_use]
    pub fn estimated_total(&self) -> Money {
        self.payment.estimated_total(&self.slot)
    }

    /// Projects the card-level summary out of the detail payload.
    #[must_use]
    pub fn to_summary(&self) -> super::AssignmentSummary {
        super::AssignmentSummary::new(super::AssignmentSummaryData {
            id: self.id,
            status: self.status,
            slot: self.slot,
            location: self.location.clone(),
            city: self.city.clone(),
            source_language: self.source_language.clone(),
            target_language: self.target_language.clone(),
            service_type: self.service_type.clone(),
            hourly_rate: self.payment.hourly_rate(),
        })
    }

    /// Replaces the status with a server-acknowledged value.
    pub(crate) fn set_status(&mut self, status: AssignmentStatus) {
        self.status = status;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assignment::domain::Money;
    use chrono::{TimeZone, Utc};

    fn sample_detail() -> AssignmentDetail {
        let start = Utc
            .with_ymd_and_hms(2026, 1, 5, 9, 0, 0)
            .single()
            .expect("valid start");
        let end = Utc
            .with_ymd_and_hms(2026, 1, 5, 10, 0, 0)
            .single()
            .expect("valid end");
        AssignmentDetail::new(AssignmentDetailData {
            id: AssignmentId::new(7),
            status: AssignmentStatus::Pending,
            slot: TimeSlot::new(start, end),
            location: "12 Main St".to_owned(),
            city: "Springfield".to_owned(),
            state: "IL".to_owned(),
            zip_code: "62704".to_owned(),
            source_language: "English".to_owned(),
            target_language: "French".to_owned(),
            service_type: "Medical".to_owned(),
            payment: PaymentTerms::new(Money::from_cents(5000), 2).expect("valid terms"),
            special_requirements: None,
            notes: None,
            can_start: false,
            can_complete: false,
            can_cancel: true,
        })
    }

    #[test]
    fn full_address_joins_present_parts() {
        assert_eq!(
            sample_detail().full_address(),
            "12 Main St, Springfield, IL 62704"
        );
    }

    #[test]
    fn estimated_total_uses_the_shared_formula() {
        // One booked hour against a two hour minimum bills the minimum.
        assert_eq!(sample_detail().estimated_total(), Money::from_cents(10_000));
    }

    #[test]
    fn summary_projection_keeps_card_fields() {
        let detail = sample_detail();
        let summary = detail.to_summary();
        assert_eq!(summary.id(), detail.id());
        assert_eq!(summary.status(), detail.status());
        assert_eq!(summary.language_pair(), "English → French");
        assert_eq!(summary.hourly_rate(), Money::from_cents(5000));
    }
}
