//! View synchronisation: the store, the in-flight guard, and the
//! incremental effects that keep cards, tabs, and badges consistent.

use std::collections::HashSet;

use thiserror::Error;

use crate::assignment::domain::{
    AppliedChange, AssignmentId, AssignmentStatus, AssignmentStore, AssignmentSummary, Bucket,
    CardView, Notice, ScreenView, TabView, ViewEffect,
};
use crate::assignment::services::TransitionOutcome;

/// Markup for a bucket's empty state.
const EMPTY_STATE_TEMPLATE: &str = r#"<div class="empty-state">
  <i class="fas fa-{{ icon }}"></i>
  <h3>{{ text }}</h3>
  <p>{{ subtext }}</p>
</div>"#;

/// Errors from the in-flight transition guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ViewSyncError {
    /// The assignment is not part of the loaded view.
    #[error("assignment {0} is not in the current view")]
    UnknownAssignment(AssignmentId),

    /// A transition for this assignment is already outstanding.
    #[error("assignment {0} already has a transition in flight")]
    TransitionInFlight(AssignmentId),
}

/// Owns the assignment store and projects it onto the card view.
///
/// All store mutation flows through `&mut self` methods here, so the borrow
/// checker enforces the single-writer rule without locks. Settled transitions
/// are folded into the store in place and reported as an ordered effect list;
/// nothing triggers a reload or a re-fetch.
#[derive(Debug, Default)]
pub struct ViewSyncService {
    store: AssignmentStore,
    in_flight: HashSet<AssignmentId>,
}

impl ViewSyncService {
    /// Creates a service with an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read access to the underlying store.
    #[must_use]
    pub const fn store(&self) -> &AssignmentStore {
        &self.store
    }

    /// Replaces the view wholesale and returns the full projection.
    ///
    /// Outstanding in-flight guards survive a reload so a second begin for
    /// the same assignment stays refused until its first transition settles.
    pub fn load(&mut self, items: Vec<AssignmentSummary>) -> ScreenView {
        self.store.load(items);
        self.render()
    }

    /// Projects the current store state onto tabs, cards, and badges.
    #[must_use]
    pub fn render(&self) -> ScreenView {
        let counts = self.store.bucket_counts();
        let tabs = Bucket::ALL
            .iter()
            .map(|&bucket| {
                let cards = self
                    .store
                    .bucket_members(bucket)
                    .into_iter()
                    .map(|summary| self.project_card(summary))
                    .collect();
                TabView::new(bucket, counts.badge(bucket), cards)
            })
            .collect();
        ScreenView::new(tabs, counts)
    }

    /// Marks a transition as outstanding and disables the card's controls.
    ///
    /// # Errors
    ///
    /// Returns [`ViewSyncError::UnknownAssignment`] when the id is not in the
    /// loaded view and [`ViewSyncError::TransitionInFlight`] when a previous
    /// transition for the id has not settled yet.
    pub fn transition_started(
        &mut self,
        id: AssignmentId,
    ) -> Result<Vec<ViewEffect>, ViewSyncError> {
        if !self.store.contains(id) {
            return Err(ViewSyncError::UnknownAssignment(id));
        }
        if !self.in_flight.insert(id) {
            return Err(ViewSyncError::TransitionInFlight(id));
        }
        Ok(vec![ViewEffect::SetCardControls { id, enabled: false }])
    }

    /// Folds a settled transition into the store and reports the effects.
    ///
    /// Applied outcomes move the card between buckets (or remove it when the
    /// new status has no bucket) and recompute the badges. Failed outcomes
    /// re-enable the card and show exactly one error notice; declined
    /// outcomes re-enable the card silently. The prior view state survives
    /// every non-applied outcome untouched.
    pub fn transition_settled(
        &mut self,
        id: AssignmentId,
        outcome: &TransitionOutcome,
    ) -> Vec<ViewEffect> {
        self.in_flight.remove(&id);
        match outcome {
            TransitionOutcome::Declined => {
                vec![ViewEffect::SetCardControls { id, enabled: true }]
            }
            TransitionOutcome::Failed { message } => vec![
                ViewEffect::SetCardControls { id, enabled: true },
                ViewEffect::ShowNotice(Notice::error(message.clone())),
            ],
            TransitionOutcome::Applied {
                status, message, ..
            } => self.apply_status(id, *status, message.clone()),
        }
    }

    /// Renders a bucket's empty-state markup.
    ///
    /// # Errors
    ///
    /// Returns a template error when rendering fails.
    pub fn empty_state_markup(bucket: Bucket) -> Result<String, minijinja::Error> {
        let state = bucket.empty_state();
        minijinja::Environment::new().render_str(
            EMPTY_STATE_TEMPLATE,
            minijinja::context! {
                icon => state.icon(),
                text => state.text(),
                subtext => state.subtext(),
            },
        )
    }

    fn project_card(&self, summary: &AssignmentSummary) -> CardView {
        CardView::project(summary, !self.in_flight.contains(&summary.id()))
    }

    fn apply_status(
        &mut self,
        id: AssignmentId,
        status: AssignmentStatus,
        message: String,
    ) -> Vec<ViewEffect> {
        let Some(source) = self.store.get(id).map(|summary| Bucket::of(summary.status()))
        else {
            // The view was reloaded while the request was outstanding; the
            // server applied it, so the notice still shows.
            tracing::debug!(id = %id, "settled transition for an assignment no longer in view");
            return vec![ViewEffect::ShowNotice(Notice::success(message))];
        };

        let destination = Bucket::of(status);
        let destination_was_empty =
            destination.is_some_and(|bucket| self.store.bucket_members(bucket).is_empty());

        let change = if destination.is_some() {
            AppliedChange::Status(status)
        } else {
            AppliedChange::Removed
        };
        self.store.apply(id, change);

        let mut effects = Vec::new();
        if source == destination {
            effects.push(ViewEffect::SetCardControls { id, enabled: true });
        } else {
            if let Some(bucket) = source {
                effects.push(ViewEffect::RemoveCard {
                    bucket,
                    id,
                    animated: true,
                });
            }
            if let Some(bucket) = destination {
                if destination_was_empty {
                    effects.push(ViewEffect::ClearEmptyState { bucket });
                }
                if let Some(summary) = self.store.get(id) {
                    effects.push(ViewEffect::InsertCard {
                        bucket,
                        card: self.project_card(summary),
                    });
                }
            }
        }

        effects.push(ViewEffect::UpdateBadges(self.store.bucket_counts()));
        if let Some(bucket) = source
            && source != destination
            && self.store.bucket_members(bucket).is_empty()
        {
            effects.push(ViewEffect::InstallEmptyState {
                bucket,
                state: bucket.empty_state(),
            });
        }
        effects.push(ViewEffect::ShowNotice(Notice::success(message)));
        effects
    }
}
