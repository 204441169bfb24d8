//! Verifies that the detail modal and the calendar overlays render the same
//! estimated total for the same payment terms and slot.
//!
//! Both surfaces must call the single formula on `PaymentTerms`; these tests
//! catch any drift by comparing the rendered markup against the formula's
//! own output.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]

use std::sync::Arc;

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use terpdesk::assignment::{
    adapters::memory::InMemoryAssignmentBackend,
    domain::{
        AssignmentDetail, AssignmentDetailData, AssignmentId, AssignmentStatus, Money,
        PaymentTerms, TimeSlot,
    },
    services::{DetailService, ModalFetch},
};
use terpdesk::calendar::{
    adapters::InMemoryScheduleFeed,
    domain::{CalendarEvent, CalendarEventData},
    services::CalendarService,
};
use tokio::runtime::Runtime;

fn test_runtime() -> Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("failed to create test runtime")
}

/// Clock pinned inside the slot's month so the calendar range covers it.
#[derive(Debug, Clone, Copy)]
struct FrozenClock(DateTime<Utc>);

impl Clock for FrozenClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

fn frozen_clock() -> FrozenClock {
    FrozenClock(
        Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0)
            .single()
            .expect("valid instant"),
    )
}

fn slot(minutes: u32) -> TimeSlot {
    let start = Utc
        .with_ymd_and_hms(2026, 1, 5, 9, 0, 0)
        .single()
        .expect("valid start");
    TimeSlot::new(start, start + chrono::Duration::minutes(i64::from(minutes)))
}

fn detail(terms: PaymentTerms, minutes: u32) -> AssignmentDetail {
    AssignmentDetail::new(AssignmentDetailData {
        id: AssignmentId::new(1),
        status: AssignmentStatus::Confirmed,
        slot: slot(minutes),
        location: "12 Main St".to_owned(),
        city: "Springfield".to_owned(),
        state: "IL".to_owned(),
        zip_code: "62704".to_owned(),
        source_language: "English".to_owned(),
        target_language: "French".to_owned(),
        service_type: "Medical".to_owned(),
        payment: terms,
        special_requirements: None,
        notes: None,
        can_start: true,
        can_complete: false,
        can_cancel: true,
    })
}

fn event(terms: PaymentTerms, minutes: u32) -> CalendarEvent {
    CalendarEvent::new(CalendarEventData {
        id: AssignmentId::new(1),
        title: "Medical - English to French".to_owned(),
        slot: slot(minutes),
        status: AssignmentStatus::Confirmed,
        location: "12 Main St".to_owned(),
        city: "Springfield".to_owned(),
        source_language: "English".to_owned(),
        target_language: "French".to_owned(),
        hourly_rate: terms.hourly_rate(),
        minimum_hours: terms.minimum_hours(),
        special_requirements: None,
    })
    .expect("valid event")
}

/// Renders the modal markup for the given terms and slot.
fn modal_markup(rt: &Runtime, terms: PaymentTerms, minutes: u32) -> String {
    let backend = InMemoryAssignmentBackend::new();
    backend.seed_detail(detail(terms, minutes));
    let mut modal = DetailService::new(Arc::new(backend));
    let fetch = rt.block_on(modal.open(AssignmentId::new(1)));
    let ModalFetch::Opened(opened) = fetch else {
        panic!("expected an opened modal, got {fetch:?}");
    };
    opened.markup().to_owned()
}

/// Renders the tooltip and panel markup for the given terms and slot.
fn overlay_markup(rt: &Runtime, terms: PaymentTerms, minutes: u32) -> (String, String) {
    let feed = InMemoryScheduleFeed::new();
    feed.seed_events(vec![event(terms, minutes)]);
    let mut calendar = CalendarService::new(Arc::new(feed), Arc::new(frozen_clock()));
    rt.block_on(calendar.refresh());

    let tooltip = calendar
        .pointer_enter(AssignmentId::new(1))
        .expect("tooltip")
        .markup()
        .to_owned();
    let panel = calendar
        .select(AssignmentId::new(1))
        .expect("panel")
        .markup()
        .to_owned();
    (tooltip, panel)
}

/// Minimum governs: $50/hr with a 2 hour minimum on a 60 minute booking is
/// $100.00 on every surface.
#[test]
fn minimum_governed_estimate_agrees_across_surfaces() {
    let rt = test_runtime();
    let terms = PaymentTerms::new(Money::from_cents(5000), 2).expect("valid terms");
    let expected = terms.estimated_total(&slot(60)).to_string();
    assert_eq!(expected, "$100.00");

    let modal = modal_markup(&rt, terms, 60);
    let (tooltip, panel) = overlay_markup(&rt, terms, 60);

    assert!(modal.contains(&expected));
    assert!(tooltip.contains(&expected));
    assert!(panel.contains(&expected));
}

/// Duration governs with rounding: $50/hr, no minimum, 50 minutes rounds
/// half-up to $41.67 on every surface.
#[test]
fn rounded_duration_estimate_agrees_across_surfaces() {
    let rt = test_runtime();
    let terms = PaymentTerms::new(Money::from_cents(5000), 0).expect("valid terms");
    let expected = terms.estimated_total(&slot(50)).to_string();
    assert_eq!(expected, "$41.67");

    let modal = modal_markup(&rt, terms, 50);
    let (tooltip, panel) = overlay_markup(&rt, terms, 50);

    assert!(modal.contains(&expected));
    assert!(tooltip.contains(&expected));
    assert!(panel.contains(&expected));
}

/// The duration line the overlays show comes from the same slot maths as the
/// modal's, so the displayed hours match too.
#[test]
fn duration_display_agrees_across_surfaces() {
    let rt = test_runtime();
    let terms = PaymentTerms::new(Money::from_cents(5000), 1).expect("valid terms");

    let modal = modal_markup(&rt, terms, 90);
    let (tooltip, _) = overlay_markup(&rt, terms, 90);

    assert!(modal.contains("1.5 hours"));
    assert!(tooltip.contains("1.5 hours"));
}
