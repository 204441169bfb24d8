//! Shared fixtures and builders for assignment tests.

#![expect(
    clippy::expect_used,
    reason = "Test fixtures use expect for assertion clarity"
)]

use chrono::{TimeZone, Utc};

use crate::assignment::domain::{
    AssignmentDetail, AssignmentDetailData, AssignmentId, AssignmentStatus, AssignmentSummary,
    AssignmentSummaryData, Money, PaymentTerms, TimeSlot,
};

/// Builds a slot on Monday 5 January 2026 between the given hours.
pub fn slot(start_hour: u32, end_hour: u32) -> TimeSlot {
    slot_on_day(5, start_hour, end_hour)
}

/// Builds a slot on the given January 2026 day between the given hours.
pub fn slot_on_day(day: u32, start_hour: u32, end_hour: u32) -> TimeSlot {
    let start = Utc
        .with_ymd_and_hms(2026, 1, day, start_hour, 0, 0)
        .single()
        .expect("valid start");
    let end = Utc
        .with_ymd_and_hms(2026, 1, day, end_hour, 0, 0)
        .single()
        .expect("valid end");
    TimeSlot::new(start, end)
}

/// Builds a card summary with a one-hour morning slot.
pub fn summary(id: i64, status: AssignmentStatus) -> AssignmentSummary {
    summary_in_slot(id, status, slot(9, 10))
}

/// Builds a card summary in the given slot.
pub fn summary_in_slot(id: i64, status: AssignmentStatus, slot: TimeSlot) -> AssignmentSummary {
    AssignmentSummary::new(AssignmentSummaryData {
        id: AssignmentId::new(id),
        status,
        slot,
        location: "12 Main St".to_owned(),
        city: "Springfield".to_owned(),
        source_language: "English".to_owned(),
        target_language: "French".to_owned(),
        service_type: "Medical".to_owned(),
        hourly_rate: Money::from_cents(5000),
    })
}

/// Builds a full detail payload: $50/hr, two-hour minimum, 09:00 to 10:00.
pub fn detail(id: i64, status: AssignmentStatus) -> AssignmentDetail {
    AssignmentDetail::new(AssignmentDetailData {
        id: AssignmentId::new(id),
        status,
        slot: slot(9, 10),
        location: "12 Main St".to_owned(),
        city: "Springfield".to_owned(),
        state: "IL".to_owned(),
        zip_code: "62704".to_owned(),
        source_language: "English".to_owned(),
        target_language: "French".to_owned(),
        service_type: "Medical".to_owned(),
        payment: PaymentTerms::new(Money::from_cents(5000), 2).expect("valid terms"),
        special_requirements: Some("Wheelchair access".to_owned()),
        notes: None,
        can_start: false,
        can_complete: false,
        can_cancel: true,
    })
}
