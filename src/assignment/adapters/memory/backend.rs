//! In-memory assignment backend for tests.

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, RwLock};

use crate::assignment::{
    domain::{AssignmentDetail, AssignmentId, AssignmentStatus, BucketCounts},
    ports::{
        AssignmentBackend, AssignmentBackendError, AssignmentBackendResult, TransitionAck,
    },
};

/// Thread-safe in-memory assignment backend.
///
/// Serves seeded detail payloads, applies transitions to them, and records
/// every transition request. Failures can be scripted per call.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAssignmentBackend {
    state: Arc<RwLock<InMemoryBackendState>>,
}

#[derive(Debug, Default)]
struct InMemoryBackendState {
    details: HashMap<AssignmentId, AssignmentDetail>,
    counts: BucketCounts,
    failures: VecDeque<AssignmentBackendError>,
    transitions: Vec<(AssignmentId, AssignmentStatus)>,
    transition_message: Option<String>,
}

fn poisoned(err: impl std::fmt::Display) -> AssignmentBackendError {
    AssignmentBackendError::transport(std::io::Error::other(err.to_string()))
}

impl InMemoryAssignmentBackend {
    /// Creates an empty in-memory backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a detail payload, replacing any existing entry with the same id.
    pub fn seed_detail(&self, detail: AssignmentDetail) {
        let mut state = self.state.write().unwrap_or_else(|err| err.into_inner());
        state.details.insert(detail.id(), detail);
    }

    /// Sets the counts served by [`AssignmentBackend::bucket_counts`].
    pub fn set_counts(&self, counts: BucketCounts) {
        let mut state = self.state.write().unwrap_or_else(|err| err.into_inner());
        state.counts = counts;
    }

    /// Scripts a failure for the next backend call.
    pub fn enqueue_failure(&self, error: AssignmentBackendError) {
        let mut state = self.state.write().unwrap_or_else(|err| err.into_inner());
        state.failures.push_back(error);
    }

    /// Sets the message echoed in successful transition acknowledgements.
    pub fn set_transition_message(&self, message: impl Into<String>) {
        let mut state = self.state.write().unwrap_or_else(|err| err.into_inner());
        state.transition_message = Some(message.into());
    }

    /// Returns every transition request received, in order.
    #[must_use]
    pub fn recorded_transitions(&self) -> Vec<(AssignmentId, AssignmentStatus)> {
        let state = self.state.read().unwrap_or_else(|err| err.into_inner());
        state.transitions.clone()
    }
}

#[async_trait]
impl AssignmentBackend for InMemoryAssignmentBackend {
    async fn transition(
        &self,
        id: AssignmentId,
        target: AssignmentStatus,
    ) -> AssignmentBackendResult<TransitionAck> {
        let mut state = self.state.write().map_err(poisoned)?;
        state.transitions.push((id, target));
        if let Some(error) = state.failures.pop_front() {
            return Err(error);
        }

        let Some(detail) = state.details.get_mut(&id) else {
            return Err(AssignmentBackendError::NotFound(id));
        };
        detail.set_status(target);
        let refreshed = detail.clone();
        Ok(TransitionAck {
            status: Some(target),
            detail: Some(refreshed),
            message: state.transition_message.clone(),
        })
    }

    async fn detail(&self, id: AssignmentId) -> AssignmentBackendResult<AssignmentDetail> {
        let mut state = self.state.write().map_err(poisoned)?;
        if let Some(error) = state.failures.pop_front() {
            return Err(error);
        }
        state
            .details
            .get(&id)
            .cloned()
            .ok_or(AssignmentBackendError::NotFound(id))
    }

    async fn bucket_counts(&self) -> AssignmentBackendResult<BucketCounts> {
        let mut state = self.state.write().map_err(poisoned)?;
        if let Some(error) = state.failures.pop_front() {
            return Err(error);
        }
        Ok(state.counts)
    }
}
