//! Backend port for assignment transitions, detail, and counts.

use crate::assignment::domain::{AssignmentDetail, AssignmentId, AssignmentStatus, BucketCounts};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for assignment backend operations.
pub type AssignmentBackendResult<T> = Result<T, AssignmentBackendError>;

/// Backend acknowledgement of an applied transition.
#[derive(Debug, Clone, Default)]
pub struct TransitionAck {
    /// Status the backend persisted, when echoed back.
    pub status: Option<AssignmentStatus>,
    /// Refreshed detail payload, when returned.
    pub detail: Option<AssignmentDetail>,
    /// Server-supplied success message, when present.
    pub message: Option<String>,
}

/// Assignment backend contract.
///
/// One implementation speaks HTTP to the real backend; the in-memory
/// implementation drives tests. Legality of a transition is enforced
/// server-side; an illegal request comes back as
/// [`AssignmentBackendError::Rejected`].
#[async_trait]
pub trait AssignmentBackend: Send + Sync {
    /// Requests a status transition for one assignment.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentBackendError::Rejected`] when the backend refuses
    /// the transition, [`AssignmentBackendError::NotFound`] when the id no
    /// longer exists, or [`AssignmentBackendError::Transport`] on network or
    /// payload failures.
    async fn transition(
        &self,
        id: AssignmentId,
        target: AssignmentStatus,
    ) -> AssignmentBackendResult<TransitionAck>;

    /// Fetches the full detail payload for one assignment.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentBackendError::NotFound`] when the id no longer
    /// exists, or [`AssignmentBackendError::Transport`] on network or
    /// payload failures.
    async fn detail(&self, id: AssignmentId) -> AssignmentBackendResult<AssignmentDetail>;

    /// Fetches the server-side bucket counts.
    ///
    /// The store derives its own counts by live scan; this call exists to
    /// probe for staleness against the server.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentBackendError::Transport`] on network or payload
    /// failures.
    async fn bucket_counts(&self) -> AssignmentBackendResult<BucketCounts>;
}

/// Errors returned by assignment backend implementations.
#[derive(Debug, Clone, Error)]
pub enum AssignmentBackendError {
    /// The backend refused the request.
    #[error("request rejected by the backend: {}", message.as_deref().unwrap_or("no reason given"))]
    Rejected {
        /// Server-supplied reason, when present.
        message: Option<String>,
    },

    /// The assignment no longer exists server-side.
    #[error("assignment not found: {0}")]
    NotFound(AssignmentId),

    /// Network, protocol, or payload failure.
    #[error("transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl AssignmentBackendError {
    /// Wraps a transport-level error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }

    /// Returns the presentation-ready failure message.
    ///
    /// Prefers the server-supplied reason; transport failures fall back to a
    /// generic message, and a vanished assignment recommends reloading.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected {
                message: Some(message),
            } => message.clone(),
            Self::Rejected { message: None } => "Failed to update assignment".to_owned(),
            Self::NotFound(_) => {
                "This assignment could not be found. Reload to refresh the view.".to_owned()
            }
            Self::Transport(_) => "An error occurred. Please try again.".to_owned(),
        }
    }
}
