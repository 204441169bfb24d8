//! Backend port for the unread-notification feed.

use std::sync::Arc;

use async_trait::async_trait;

/// Convenience alias for feed results.
pub type NotificationFeedResult<T> = Result<T, NotificationFeedError>;

/// Source of the unread notification count.
#[async_trait]
pub trait NotificationFeed: Send + Sync {
    /// Fetches the number of unread notifications.
    async fn unread_count(&self) -> NotificationFeedResult<u64>;

    /// Marks every notification as read on the backend.
    async fn mark_read(&self) -> NotificationFeedResult<()>;
}

/// Failures raised by a [`NotificationFeed`].
#[derive(Debug, Clone, thiserror::Error)]
pub enum NotificationFeedError {
    /// The backend refused the request.
    #[error("notification request rejected: {message:?}")]
    Rejected {
        /// Reason reported by the backend, when it sent one.
        message: Option<String>,
    },
    /// The request never produced a usable response.
    #[error("notification transport failure")]
    Transport(#[source] Arc<dyn std::error::Error + Send + Sync>),
}

impl NotificationFeedError {
    /// Wraps an underlying transport failure.
    pub fn transport<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Transport(Arc::new(err))
    }
}
