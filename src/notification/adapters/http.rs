//! HTTP implementation of the notification feed port.

use crate::notification::ports::{NotificationFeed, NotificationFeedError, NotificationFeedResult};
use crate::session::{BackendSession, CSRF_HEADER};
use async_trait::async_trait;
use reqwest::Response;
use serde::Deserialize;
use std::sync::Arc;

/// Notification feed speaking the scheduling API over HTTP.
#[derive(Debug, Clone)]
pub struct HttpNotificationFeed {
    session: Arc<BackendSession>,
}

#[derive(Debug, Clone, Deserialize)]
struct CountRow {
    count: u64,
}

#[derive(Debug, Clone, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl HttpNotificationFeed {
    /// Creates a feed bound to an authenticated session.
    #[must_use]
    pub const fn new(session: Arc<BackendSession>) -> Self {
        Self { session }
    }

    async fn reject(response: Response) -> NotificationFeedError {
        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message.or(body.error));
        NotificationFeedError::Rejected { message }
    }
}

#[async_trait]
impl NotificationFeed for HttpNotificationFeed {
    async fn unread_count(&self) -> NotificationFeedResult<u64> {
        let url = self.session.endpoint("notifications/count/");
        let response = self
            .session
            .client()
            .get(url)
            .send()
            .await
            .map_err(NotificationFeedError::transport)?;

        if !response.status().is_success() {
            return Err(Self::reject(response).await);
        }

        let row: CountRow = response
            .json()
            .await
            .map_err(NotificationFeedError::transport)?;
        Ok(row.count)
    }

    async fn mark_read(&self) -> NotificationFeedResult<()> {
        let url = self.session.endpoint("notifications/mark-read/");
        let response = self
            .session
            .client()
            .post(url)
            .header(CSRF_HEADER, self.session.csrf_token())
            .send()
            .await
            .map_err(NotificationFeedError::transport)?;

        if !response.status().is_success() {
            return Err(Self::reject(response).await);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_row_reads_the_wire_shape() {
        let row: CountRow =
            serde_json::from_value(serde_json::json!({ "count": 4 })).expect("valid row");
        assert_eq!(row.count, 4);
    }

    #[test]
    fn error_body_tolerates_either_key() {
        let body: ErrorBody =
            serde_json::from_value(serde_json::json!({ "error": "nope" })).expect("valid body");
        assert_eq!(body.message.or(body.error).as_deref(), Some("nope"));
    }
}
