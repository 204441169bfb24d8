//! HTTP implementation of the schedule feed port.

use crate::assignment::adapters::http::RateValue;
use crate::assignment::domain::{AssignmentId, AssignmentStatus, TimeSlot};
use crate::calendar::domain::{CalendarDomainError, CalendarEvent, CalendarEventData, DateRange};
use crate::calendar::ports::{ScheduleFeed, ScheduleFeedError, ScheduleFeedResult};
use crate::session::BackendSession;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::sync::Arc;

/// Schedule feed speaking the scheduling API over HTTP.
#[derive(Debug, Clone)]
pub struct HttpScheduleFeed {
    session: Arc<BackendSession>,
}

#[derive(Debug, Clone, Deserialize)]
struct ScheduleEventRow {
    id: i64,
    title: String,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    #[serde(alias = "extendedProps")]
    extended_props: EventPropsRow,
}

#[derive(Debug, Clone, Deserialize)]
struct EventPropsRow {
    status: String,
    #[serde(default)]
    location: String,
    #[serde(default)]
    city: String,
    source_language: String,
    target_language: String,
    interpreter_rate: RateValue,
    #[serde(default)]
    minimum_hours: u32,
    #[serde(default)]
    special_requirements: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl ScheduleEventRow {
    fn into_domain(self) -> Result<CalendarEvent, CalendarDomainError> {
        let props = self.extended_props;
        let status = AssignmentStatus::try_from(props.status.as_str())?;
        let rate = props.interpreter_rate.to_money()?;
        CalendarEvent::new(CalendarEventData {
            id: AssignmentId::new(self.id),
            title: self.title,
            slot: TimeSlot::new(self.start, self.end),
            status,
            location: props.location,
            city: props.city,
            source_language: props.source_language,
            target_language: props.target_language,
            hourly_rate: rate,
            minimum_hours: props.minimum_hours,
            special_requirements: props.special_requirements,
        })
    }
}

impl HttpScheduleFeed {
    /// Creates a feed bound to an authenticated session.
    #[must_use]
    pub const fn new(session: Arc<BackendSession>) -> Self {
        Self { session }
    }
}

#[async_trait]
impl ScheduleFeed for HttpScheduleFeed {
    async fn events_between(&self, range: &DateRange) -> ScheduleFeedResult<Vec<CalendarEvent>> {
        let url = self.session.endpoint("schedule/events/");
        let (start, end) = range.query_pair();
        let response = self
            .session
            .client()
            .get(url)
            .query(&[("start", start), ("end", end)])
            .send()
            .await
            .map_err(ScheduleFeedError::transport)?;

        if !response.status().is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.message.or(body.error));
            return Err(ScheduleFeedError::Rejected { message });
        }

        let rows: Vec<ScheduleEventRow> = response
            .json()
            .await
            .map_err(ScheduleFeedError::transport)?;
        rows.into_iter()
            .map(|row| row.into_domain().map_err(ScheduleFeedError::transport))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assignment::domain::Money;

    fn event_json() -> serde_json::Value {
        serde_json::json!({
            "id": 11,
            "title": "Medical - English to French",
            "start": "2026-01-05T09:00:00Z",
            "end": "2026-01-05T10:30:00Z",
            "extendedProps": {
                "status": "CONFIRMED",
                "location": "12 Main St",
                "city": "Springfield",
                "source_language": "English",
                "target_language": "French",
                "interpreter_rate": 50,
                "minimum_hours": 1
            }
        })
    }

    #[test]
    fn event_row_converts_with_a_numeric_rate() {
        let row: ScheduleEventRow = serde_json::from_value(event_json()).expect("valid row");
        let event = row.into_domain().expect("valid event");

        assert_eq!(event.id(), AssignmentId::new(11));
        assert_eq!(event.payment().hourly_rate(), Money::from_cents(5000));
        assert_eq!(event.special_requirements(), "None");
        assert_eq!(event.estimated_total(), Money::from_cents(7500));
    }

    #[test]
    fn event_row_accepts_the_snake_case_props_key() {
        let mut payload = event_json();
        let props = payload["extendedProps"].take();
        payload["extended_props"] = props;
        payload.as_object_mut().expect("object").remove("extendedProps");

        let row: ScheduleEventRow = serde_json::from_value(payload).expect("valid row");
        assert!(row.into_domain().is_ok());
    }

    #[test]
    fn event_row_rejects_unknown_statuses() {
        let mut payload = event_json();
        payload["extendedProps"]["status"] = serde_json::Value::String("ARCHIVED".to_owned());
        let row: ScheduleEventRow = serde_json::from_value(payload).expect("valid row");

        assert!(row.into_domain().is_err());
    }
}
