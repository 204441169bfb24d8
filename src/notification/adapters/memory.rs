//! In-memory notification feed for tests.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, RwLock};
use std::time::Duration;

use crate::notification::ports::{NotificationFeed, NotificationFeedError, NotificationFeedResult};

/// Thread-safe in-memory notification feed.
///
/// Serves a settable unread count, records every call, and can hold each
/// count response for a configured delay so slow backends can be simulated
/// under paused time. Failures can be scripted per fetch.
#[derive(Debug, Clone, Default)]
pub struct InMemoryNotificationFeed {
    state: Arc<RwLock<InMemoryFeedState>>,
}

#[derive(Debug, Default)]
struct InMemoryFeedState {
    count: u64,
    response_delay: Option<Duration>,
    failures: VecDeque<NotificationFeedError>,
    started_fetches: usize,
    mark_read_calls: usize,
}

fn poisoned(err: impl std::fmt::Display) -> NotificationFeedError {
    NotificationFeedError::transport(std::io::Error::other(err.to_string()))
}

impl InMemoryNotificationFeed {
    /// Creates an empty in-memory feed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the unread count served to subsequent fetches.
    pub fn set_count(&self, count: u64) {
        let mut state = self.state.write().unwrap_or_else(|err| err.into_inner());
        state.count = count;
    }

    /// Holds every count response for `delay` before answering.
    pub fn set_response_delay(&self, delay: Duration) {
        let mut state = self.state.write().unwrap_or_else(|err| err.into_inner());
        state.response_delay = Some(delay);
    }

    /// Scripts a failure for the next count fetch.
    pub fn enqueue_failure(&self, error: NotificationFeedError) {
        let mut state = self.state.write().unwrap_or_else(|err| err.into_inner());
        state.failures.push_back(error);
    }

    /// Returns how many count fetches have started, including unanswered ones.
    #[must_use]
    pub fn started_fetches(&self) -> usize {
        self.state
            .read()
            .map(|state| state.started_fetches)
            .unwrap_or(0)
    }

    /// Returns how many mark-read requests have arrived.
    #[must_use]
    pub fn mark_read_calls(&self) -> usize {
        self.state
            .read()
            .map(|state| state.mark_read_calls)
            .unwrap_or(0)
    }
}

#[async_trait]
impl NotificationFeed for InMemoryNotificationFeed {
    async fn unread_count(&self) -> NotificationFeedResult<u64> {
        // The guard cannot be held across the simulated latency.
        let delay = {
            let mut state = self.state.write().map_err(poisoned)?;
            state.started_fetches += 1;
            state.response_delay
        };
        if let Some(wait) = delay {
            tokio::time::sleep(wait).await;
        }

        let mut state = self.state.write().map_err(poisoned)?;
        if let Some(error) = state.failures.pop_front() {
            return Err(error);
        }
        Ok(state.count)
    }

    async fn mark_read(&self) -> NotificationFeedResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        state.mark_read_calls += 1;
        Ok(())
    }
}
