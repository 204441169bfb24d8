//! In-memory schedule feed for tests.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, RwLock};

use crate::calendar::domain::{CalendarEvent, DateRange};
use crate::calendar::ports::{ScheduleFeed, ScheduleFeedError, ScheduleFeedResult};

/// Thread-safe in-memory schedule feed.
///
/// Serves the seeded events regardless of range and records every requested
/// range. Failures can be scripted per call.
#[derive(Debug, Clone, Default)]
pub struct InMemoryScheduleFeed {
    state: Arc<RwLock<InMemoryFeedState>>,
}

#[derive(Debug, Default)]
struct InMemoryFeedState {
    events: Vec<CalendarEvent>,
    failures: VecDeque<ScheduleFeedError>,
    requests: Vec<DateRange>,
}

impl InMemoryScheduleFeed {
    /// Creates an empty in-memory feed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the events served on every fetch.
    pub fn seed_events(&self, events: Vec<CalendarEvent>) {
        let mut state = self.state.write().unwrap_or_else(|err| err.into_inner());
        state.events = events;
    }

    /// Scripts a failure for the next fetch.
    pub fn enqueue_failure(&self, error: ScheduleFeedError) {
        let mut state = self.state.write().unwrap_or_else(|err| err.into_inner());
        state.failures.push_back(error);
    }

    /// Returns every requested range, in order.
    #[must_use]
    pub fn recorded_ranges(&self) -> Vec<DateRange> {
        let state = self.state.read().unwrap_or_else(|err| err.into_inner());
        state.requests.clone()
    }
}

#[async_trait]
impl ScheduleFeed for InMemoryScheduleFeed {
    async fn events_between(&self, range: &DateRange) -> ScheduleFeedResult<Vec<CalendarEvent>> {
        let mut state = self
            .state
            .write()
            .map_err(|err| ScheduleFeedError::transport(std::io::Error::other(err.to_string())))?;
        state.requests.push(*range);
        if let Some(error) = state.failures.pop_front() {
            return Err(error);
        }
        Ok(state.events.clone())
    }
}
