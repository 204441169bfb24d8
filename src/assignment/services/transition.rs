//! Transition orchestration: confirmation gate plus one backend call.

use std::sync::Arc;

use crate::assignment::domain::{AssignmentDetail, AssignmentId, AssignmentStatus};
use crate::assignment::ports::{
    AssignmentBackend, ConfirmationPrompt, ConfirmationRequest, TransitionAck,
};

/// Outcome of a transition request, in the single shape the view layer
/// consumes.
#[derive(Debug, Clone, PartialEq)]
pub enum TransitionOutcome {
    /// The user declined the confirmation prompt; nothing was sent.
    Declined,
    /// The backend applied the transition.
    Applied {
        /// Status persisted by the backend.
        status: AssignmentStatus,
        /// Refreshed detail payload, when the backend returned one.
        detail: Option<AssignmentDetail>,
        /// Success message for the notice.
        message: String,
    },
    /// The backend rejected the transition or could not be reached.
    Failed {
        /// User-facing failure message.
        message: String,
    },
}

impl TransitionOutcome {
    /// Returns whether the transition was applied.
    #[must_use]
    pub const fn is_applied(&self) -> bool {
        matches!(self, Self::Applied { .. })
    }
}

/// Orchestrates a single assignment transition end to end.
///
/// Destructive targets are gated behind the confirmation prompt before any
/// network traffic; a declined prompt produces zero side effects. Exactly one
/// backend call is issued per confirmed request. The service never mutates
/// the store itself; the caller applies the outcome.
#[derive(Debug)]
pub struct TransitionService<B, P> {
    backend: Arc<B>,
    prompt: Arc<P>,
}

impl<B, P> TransitionService<B, P>
where
    B: AssignmentBackend,
    P: ConfirmationPrompt,
{
    /// Creates a service over a backend and a confirmation prompt.
    #[must_use]
    pub const fn new(backend: Arc<B>, prompt: Arc<P>) -> Self {
        Self { backend, prompt }
    }

    /// Requests a transition to `target` for the given assignment.
    pub async fn request(
        &self,
        id: AssignmentId,
        target: AssignmentStatus,
    ) -> TransitionOutcome {
        if target.requires_confirmation() {
            let request = ConfirmationRequest::for_transition(id, target);
            if !self.prompt.confirm(&request) {
                tracing::debug!(id = %id, target = target.as_str(), "transition declined");
                return TransitionOutcome::Declined;
            }
        }

        match self.backend.transition(id, target).await {
            Ok(ack) => applied(target, ack),
            Err(error) => {
                tracing::warn!(id = %id, target = target.as_str(), error = %error, "transition failed");
                TransitionOutcome::Failed {
                    message: error.user_message(),
                }
            }
        }
    }
}

fn applied(target: AssignmentStatus, ack: TransitionAck) -> TransitionOutcome {
    let status = ack.status.unwrap_or(target);
    let message = ack
        .message
        .unwrap_or_else(|| success_message(status).to_owned());
    tracing::info!(status = status.as_str(), "transition applied");
    TransitionOutcome::Applied {
        status,
        detail: ack.detail,
        message,
    }
}

const fn success_message(status: AssignmentStatus) -> &'static str {
    match status {
        AssignmentStatus::Confirmed => "Assignment accepted",
        AssignmentStatus::Rejected => "Assignment rejected",
        AssignmentStatus::InProgress => "Assignment started",
        AssignmentStatus::Completed => "Assignment completed",
        AssignmentStatus::Cancelled => "Assignment cancelled",
        AssignmentStatus::NoShow => "Assignment marked as no-show",
        AssignmentStatus::Pending | AssignmentStatus::Assigned => "Assignment updated",
    }
}
