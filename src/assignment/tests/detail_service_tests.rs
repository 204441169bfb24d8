//! Tests for the detail modal lifecycle and rendering.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]

use std::sync::Arc;

use crate::assignment::{
    adapters::memory::InMemoryAssignmentBackend,
    domain::{AssignmentId, AssignmentStatus, BucketCounts, Dismissal},
    services::{DetailService, ModalFetch},
};

use super::fixtures::detail;

fn seeded_service() -> (Arc<InMemoryAssignmentBackend>, DetailService<InMemoryAssignmentBackend>) {
    let backend = Arc::new(InMemoryAssignmentBackend::new());
    backend.seed_detail(detail(7, AssignmentStatus::Pending));
    let service = DetailService::new(Arc::clone(&backend));
    (backend, service)
}

#[tokio::test(flavor = "multi_thread")]
async fn open_renders_the_computed_fields() {
    let (_backend, mut service) = seeded_service();

    let fetch = service.open(AssignmentId::new(7)).await;

    let ModalFetch::Opened(view) = fetch else {
        panic!("expected an opened modal, got {fetch:?}");
    };
    assert_eq!(view.id(), AssignmentId::new(7));
    assert_eq!(service.open_id(), Some(AssignmentId::new(7)));

    let markup = view.markup();
    assert!(markup.contains("Monday, January 5, 2026, 9:00 AM"));
    assert!(markup.contains("(1.0 hours)"));
    assert!(markup.contains("12 Main St, Springfield, IL 62704"));
    assert!(markup.contains("English → French"));
    assert!(markup.contains("$50.00/hr, minimum 2 hours"));
    assert!(markup.contains("$100.00"));
    assert!(markup.contains("Wheelchair access"));
    assert!(markup.contains("status-pending"));
}

#[tokio::test(flavor = "multi_thread")]
async fn modal_offers_only_the_allowed_actions() {
    let (_backend, mut service) = seeded_service();

    let fetch = service.open(AssignmentId::new(7)).await;

    let ModalFetch::Opened(view) = fetch else {
        panic!("expected an opened modal, got {fetch:?}");
    };
    assert!(view.markup().contains(r#"data-action="cancel""#));
    assert!(!view.markup().contains(r#"data-action="start""#));
    assert!(!view.markup().contains(r#"data-action="complete""#));
    assert!(view.markup().contains(r#"data-action="close""#));
}

#[tokio::test(flavor = "multi_thread")]
async fn open_replaces_any_previous_modal() {
    let (backend, mut service) = seeded_service();
    backend.seed_detail(detail(8, AssignmentStatus::Confirmed));

    service.open(AssignmentId::new(7)).await;
    let fetch = service.open(AssignmentId::new(8)).await;

    assert!(matches!(fetch, ModalFetch::Opened(_)));
    assert_eq!(service.open_id(), Some(AssignmentId::new(8)));
}

#[tokio::test(flavor = "multi_thread")]
async fn fetch_failure_leaves_the_slot_empty() {
    let backend = Arc::new(InMemoryAssignmentBackend::new());
    let mut service = DetailService::new(backend);

    let fetch = service.open(AssignmentId::new(404)).await;

    assert_eq!(
        fetch,
        ModalFetch::Failed {
            message: "This assignment could not be found. Reload to refresh the view.".to_owned(),
        }
    );
    assert_eq!(service.open_id(), None);
}

#[tokio::test(flavor = "multi_thread")]
async fn dismiss_tears_down_on_every_exit_path() {
    let (_backend, mut service) = seeded_service();
    service.open(AssignmentId::new(7)).await;

    assert!(service.dismiss(Dismissal::OutsideClick));
    assert_eq!(service.open_id(), None);
    assert!(!service.dismiss(Dismissal::CloseControl));
}

#[tokio::test(flavor = "multi_thread")]
async fn server_counts_probe_reports_the_backend_tallies() {
    let (backend, service) = seeded_service();
    backend.set_counts(BucketCounts::new(2, 1, 0, 3));

    let counts = service.server_counts().await.expect("counts fetch");

    assert_eq!(counts, BucketCounts::new(2, 1, 0, 3));
}
