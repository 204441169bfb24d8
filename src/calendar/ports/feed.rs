//! Port for fetching schedule events.

use crate::calendar::domain::{CalendarEvent, DateRange};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result alias for schedule feed operations.
pub type ScheduleFeedResult<T> = Result<T, ScheduleFeedError>;

/// Serves the events visible in a calendar range.
#[async_trait]
pub trait ScheduleFeed: Send + Sync {
    /// Fetches every event overlapping the given range.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleFeedError`] when the feed rejects the request or
    /// cannot be reached.
    async fn events_between(&self, range: &DateRange) -> ScheduleFeedResult<Vec<CalendarEvent>>;
}

/// Errors surfaced by schedule feed implementations.
#[derive(Debug, Clone, Error)]
pub enum ScheduleFeedError {
    /// The feed refused the request.
    #[error("schedule fetch rejected: {}", message.as_deref().unwrap_or("no reason given"))]
    Rejected {
        /// Reason supplied by the feed, when any.
        message: Option<String>,
    },

    /// The feed could not be reached or its response could not be read.
    #[error("schedule feed unavailable: {0}")]
    Transport(#[source] Arc<dyn std::error::Error + Send + Sync>),
}

impl ScheduleFeedError {
    /// Wraps an underlying transport failure.
    #[must_use]
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }

    /// Returns the message shown on the calendar's error indicator.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected {
                message: Some(message),
            } => message.clone(),
            Self::Rejected { message: None } | Self::Transport(_) => {
                "Failed to load schedule events".to_owned()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_reason_is_preferred() {
        let error = ScheduleFeedError::Rejected {
            message: Some("Range too wide".to_owned()),
        };
        assert_eq!(error.user_message(), "Range too wide");
    }

    #[test]
    fn transport_failures_use_the_generic_message() {
        let error = ScheduleFeedError::transport(std::io::Error::other("refused"));
        assert_eq!(error.user_message(), "Failed to load schedule events");
    }
}
