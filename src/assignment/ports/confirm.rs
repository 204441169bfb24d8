//! Confirmation prompt port for destructive transitions.

use crate::assignment::domain::{AssignmentId, AssignmentStatus};

/// Confirmation request presented before a destructive transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationRequest {
    id: AssignmentId,
    target: AssignmentStatus,
    message: String,
}

impl ConfirmationRequest {
    /// Builds the request for a transition, phrasing the prompt from the
    /// target's action verb.
    #[must_use]
    pub fn for_transition(id: AssignmentId, target: AssignmentStatus) -> Self {
        let message = target.action_verb().map_or_else(
            || {
                format!(
                    "Are you sure you want to mark this assignment as {}?",
                    target.label().to_lowercase()
                )
            },
            |verb| format!("Are you sure you want to {verb} this assignment?"),
        );
        Self {
            id,
            target,
            message,
        }
    }

    /// Returns the assignment the prompt concerns.
    #[must_use]
    pub const fn id(&self) -> AssignmentId {
        self.id
    }

    /// Returns the transition target the prompt guards.
    #[must_use]
    pub const fn target(&self) -> AssignmentStatus {
        self.target
    }

    /// Returns the prompt text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// User-facing confirmation gate.
///
/// The prompt is modal from the caller's point of view: the answer is
/// available synchronously, and declining must abort with no side effects.
#[cfg_attr(test, mockall::automock)]
pub trait ConfirmationPrompt: Send + Sync {
    /// Returns `true` when the user approves the request.
    fn confirm(&self, request: &ConfirmationRequest) -> bool;
}
