//! Wire-format payloads for the assignment backend.

use crate::assignment::domain::{
    AssignmentDetail, AssignmentDetailData, AssignmentDomainError, AssignmentId, AssignmentStatus,
    BucketCounts, Money, ParseMoneyError, ParseStatusError, PaymentTerms, TimeSlot,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while converting wire payloads into domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WireError {
    /// The status string was not recognized.
    #[error(transparent)]
    Status(#[from] ParseStatusError),

    /// A monetary value could not be parsed.
    #[error(transparent)]
    Money(#[from] ParseMoneyError),

    /// The payment terms were invalid.
    #[error(transparent)]
    Payment(#[from] AssignmentDomainError),
}

/// Request body for a transition call.
#[derive(Debug, Clone, Serialize)]
pub struct TransitionRequestBody {
    /// Requested target status in wire form.
    pub status: String,
}

/// Response body for a transition call.
#[derive(Debug, Clone, Deserialize)]
pub struct TransitionResponseBody {
    /// Whether the backend applied the transition. Absent means failure.
    #[serde(default)]
    pub success: bool,
    /// Persisted status, when echoed back.
    #[serde(default)]
    pub status: Option<String>,
    /// Human-readable outcome message, when present.
    #[serde(default)]
    pub message: Option<String>,
    /// Alternative error field some responses use.
    #[serde(default)]
    pub error: Option<String>,
    /// Refreshed detail payload, when returned.
    #[serde(default)]
    pub assignment: Option<AssignmentDetailRow>,
}

impl TransitionResponseBody {
    /// Returns the failure reason, folding the two message fields.
    #[must_use]
    pub fn reason(&self) -> Option<String> {
        self.message.clone().or_else(|| self.error.clone())
    }
}

/// Hourly rate as served: a decimal string in detail payloads, a bare
/// number in calendar events.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RateValue {
    /// Decimal string form.
    Text(String),
    /// JSON number form.
    Number(serde_json::Number),
}

impl RateValue {
    /// Parses the rate into cents.
    ///
    /// # Errors
    ///
    /// Returns [`ParseMoneyError`] when the value is not a decimal amount.
    pub fn to_money(&self) -> Result<Money, ParseMoneyError> {
        match self {
            Self::Text(text) => Money::parse(text),
            Self::Number(number) => Money::from_json_number(number),
        }
    }
}

/// Detail payload as served by the backend.
#[derive(Debug, Clone, Deserialize)]
pub struct AssignmentDetailRow {
    /// Assignment primary key.
    pub id: i64,
    /// Status in wire form.
    pub status: String,
    /// Scheduled start.
    pub start_time: DateTime<Utc>,
    /// Scheduled end.
    pub end_time: DateTime<Utc>,
    /// Street address line.
    pub location: String,
    /// City name.
    #[serde(default)]
    pub city: String,
    /// State or province.
    #[serde(default)]
    pub state: String,
    /// Postal code.
    #[serde(default)]
    pub zip_code: String,
    /// Language interpreted from.
    pub source_language: String,
    /// Language interpreted into.
    pub target_language: String,
    /// Kind of interpretation service.
    pub service_type: String,
    /// Hourly rate as a decimal string or number.
    pub interpreter_rate: RateValue,
    /// Minimum billable hours.
    #[serde(default)]
    pub minimum_hours: u32,
    /// Free-text special requirements.
    #[serde(default)]
    pub special_requirements: Option<String>,
    /// Free-text notes.
    #[serde(default)]
    pub notes: Option<String>,
    /// Whether starting is currently allowed.
    #[serde(default)]
    pub can_start: bool,
    /// Whether completing is currently allowed.
    #[serde(default)]
    pub can_complete: bool,
    /// Whether cancelling is currently allowed.
    #[serde(default)]
    pub can_cancel: bool,
}

impl AssignmentDetailRow {
    /// Converts the wire row into the domain detail payload.
    ///
    /// # Errors
    ///
    /// Returns [`WireError`] when the status, rate, or payment terms fail to
    /// parse.
    pub fn into_domain(self) -> Result<AssignmentDetail, WireError> {
        let status = AssignmentStatus::try_from(self.status.as_str())?;
        let rate = self.interpreter_rate.to_money()?;
        let payment = PaymentTerms::new(rate, self.minimum_hours)?;
        Ok(AssignmentDetail::new(AssignmentDetailData {
            id: AssignmentId::new(self.id),
            status,
            slot: TimeSlot::new(self.start_time, self.end_time),
            location: self.location,
            city: self.city,
            state: self.state,
            zip_code: self.zip_code,
            source_language: self.source_language,
            target_language: self.target_language,
            service_type: self.service_type,
            payment,
            special_requirements: self.special_requirements.filter(|text| !text.is_empty()),
            notes: self.notes.filter(|text| !text.is_empty()),
            can_start: self.can_start,
            can_complete: self.can_complete,
            can_cancel: self.can_cancel,
        }))
    }
}

/// Bucket-count payload.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct BucketCountsRow {
    /// Pending card count.
    #[serde(default)]
    pub pending: usize,
    /// Upcoming card count.
    #[serde(default)]
    pub upcoming: usize,
    /// In-progress card count.
    #[serde(default)]
    pub in_progress: usize,
    /// Completed card count.
    #[serde(default)]
    pub completed: usize,
}

impl From<BucketCountsRow> for BucketCounts {
    fn from(row: BucketCountsRow) -> Self {
        Self::new(row.pending, row.upcoming, row.in_progress, row.completed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail_json() -> serde_json::Value {
        serde_json::json!({
            "id": 7,
            "status": "PENDING",
            "start_time": "2026-01-05T09:00:00Z",
            "end_time": "2026-01-05T10:00:00Z",
            "location": "12 Main St",
            "city": "Springfield",
            "state": "IL",
            "zip_code": "62704",
            "source_language": "English",
            "target_language": "French",
            "service_type": "Medical",
            "interpreter_rate": "50.00",
            "minimum_hours": 2,
            "special_requirements": "",
            "can_cancel": true
        })
    }

    #[test]
    fn detail_row_converts_into_domain() {
        let row: AssignmentDetailRow =
            serde_json::from_value(detail_json()).expect("valid row");
        let detail = row.into_domain().expect("valid domain detail");

        assert_eq!(detail.id(), AssignmentId::new(7));
        assert_eq!(detail.status(), AssignmentStatus::Pending);
        assert_eq!(detail.payment().hourly_rate(), Money::from_cents(5000));
        assert_eq!(detail.payment().minimum_hours(), 2);
        assert_eq!(detail.special_requirements(), None);
        assert!(detail.can_cancel());
        assert!(!detail.can_start());
    }

    #[test]
    fn detail_row_rejects_unknown_statuses() {
        let mut payload = detail_json();
        payload["status"] = serde_json::Value::String("ARCHIVED".to_owned());
        let row: AssignmentDetailRow = serde_json::from_value(payload).expect("valid row");

        assert!(matches!(row.into_domain(), Err(WireError::Status(_))));
    }

    #[test]
    fn transition_response_folds_message_fields() {
        let body: TransitionResponseBody = serde_json::from_value(serde_json::json!({
            "success": false,
            "error": "Cannot start before confirmation"
        }))
        .expect("valid body");

        assert_eq!(
            body.reason(),
            Some("Cannot start before confirmation".to_owned())
        );
    }

    #[test]
    fn counts_row_maps_to_domain_counts() {
        let row: BucketCountsRow = serde_json::from_value(serde_json::json!({
            "pending": 3,
            "upcoming": 1,
            "in_progress": 0,
            "completed": 4
        }))
        .expect("valid row");

        assert_eq!(BucketCounts::from(row), BucketCounts::new(3, 1, 0, 4));
    }
}
