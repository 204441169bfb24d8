//! Scripted confirmation prompt for tests.

use std::sync::{Arc, RwLock};

use crate::assignment::ports::{ConfirmationPrompt, ConfirmationRequest};

/// Prompt that always answers the same way and records what it was asked.
#[derive(Debug, Clone)]
pub struct StaticPrompt {
    answer: bool,
    requests: Arc<RwLock<Vec<ConfirmationRequest>>>,
}

impl StaticPrompt {
    /// Creates a prompt that approves every request.
    #[must_use]
    pub fn approving() -> Self {
        Self {
            answer: true,
            requests: Arc::default(),
        }
    }

    /// Creates a prompt that declines every request.
    #[must_use]
    pub fn declining() -> Self {
        Self {
            answer: false,
            requests: Arc::default(),
        }
    }

    /// Returns every request shown to the user, in order.
    #[must_use]
    pub fn recorded_requests(&self) -> Vec<ConfirmationRequest> {
        let requests = self.requests.read().unwrap_or_else(|err| err.into_inner());
        requests.clone()
    }
}

impl ConfirmationPrompt for StaticPrompt {
    fn confirm(&self, request: &ConfirmationRequest) -> bool {
        let mut requests = self.requests.write().unwrap_or_else(|err| err.into_inner());
        requests.push(request.clone());
        self.answer
    }
}
