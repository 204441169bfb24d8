//! Port contracts for the assignment context.
//!
//! Ports define infrastructure-agnostic interfaces used by the assignment
//! services: the backend that persists transitions and the user-facing
//! confirmation gate.

pub mod backend;
pub mod confirm;

pub use backend::{
    AssignmentBackend, AssignmentBackendError, AssignmentBackendResult, TransitionAck,
};
pub use confirm::{ConfirmationPrompt, ConfirmationRequest};

#[cfg(test)]
pub use confirm::MockConfirmationPrompt;
