//! HTTP implementation of the assignment backend port.

use super::models::{
    AssignmentDetailRow, BucketCountsRow, TransitionRequestBody, TransitionResponseBody,
};
use crate::assignment::domain::{AssignmentDetail, AssignmentId, AssignmentStatus, BucketCounts};
use crate::assignment::ports::{
    AssignmentBackend, AssignmentBackendError, AssignmentBackendResult, TransitionAck,
};
use crate::session::{BackendSession, CSRF_HEADER};
use async_trait::async_trait;
use reqwest::{Response, StatusCode};
use std::sync::Arc;

/// Assignment backend speaking the scheduling API over HTTP.
#[derive(Debug, Clone)]
pub struct HttpAssignmentBackend {
    session: Arc<BackendSession>,
}

impl HttpAssignmentBackend {
    /// Creates a backend bound to an authenticated session.
    #[must_use]
    pub const fn new(session: Arc<BackendSession>) -> Self {
        Self { session }
    }

    /// Maps a non-2xx response to a port error, draining the body for a
    /// reason when one is present.
    async fn reject(id: Option<AssignmentId>, response: Response) -> AssignmentBackendError {
        if response.status() == StatusCode::NOT_FOUND
            && let Some(missing) = id
        {
            return AssignmentBackendError::NotFound(missing);
        }
        let message = response
            .json::<TransitionResponseBody>()
            .await
            .ok()
            .and_then(|body| body.reason());
        AssignmentBackendError::Rejected { message }
    }
}

#[async_trait]
impl AssignmentBackend for HttpAssignmentBackend {
    async fn transition(
        &self,
        id: AssignmentId,
        target: AssignmentStatus,
    ) -> AssignmentBackendResult<TransitionAck> {
        let url = self
            .session
            .endpoint(&format!("assignments/{id}/transition/"));
        let body = TransitionRequestBody {
            status: target.as_str().to_owned(),
        };
        let response = self
            .session
            .client()
            .post(url)
            .header(CSRF_HEADER, self.session.csrf_token())
            .json(&body)
            .send()
            .await
            .map_err(AssignmentBackendError::transport)?;

        if !response.status().is_success() {
            return Err(Self::reject(Some(id), response).await);
        }

        let payload: TransitionResponseBody = response
            .json()
            .await
            .map_err(AssignmentBackendError::transport)?;
        if !payload.success {
            return Err(AssignmentBackendError::Rejected {
                message: payload.reason(),
            });
        }

        let status = payload
            .status
            .as_deref()
            .map(AssignmentStatus::try_from)
            .transpose()
            .map_err(AssignmentBackendError::transport)?;
        let detail = payload
            .assignment
            .map(AssignmentDetailRow::into_domain)
            .transpose()
            .map_err(AssignmentBackendError::transport)?;
        Ok(TransitionAck {
            status,
            detail,
            message: payload.message,
        })
    }

    async fn detail(&self, id: AssignmentId) -> AssignmentBackendResult<AssignmentDetail> {
        let url = self.session.endpoint(&format!("assignments/{id}/"));
        let response = self
            .session
            .client()
            .get(url)
            .send()
            .await
            .map_err(AssignmentBackendError::transport)?;

        if !response.status().is_success() {
            return Err(Self::reject(Some(id), response).await);
        }

        let row: AssignmentDetailRow = response
            .json()
            .await
            .map_err(AssignmentBackendError::transport)?;
        row.into_domain().map_err(AssignmentBackendError::transport)
    }

    async fn bucket_counts(&self) -> AssignmentBackendResult<BucketCounts> {
        let url = self.session.endpoint("assignments/counts/");
        let response = self
            .session
            .client()
            .get(url)
            .send()
            .await
            .map_err(AssignmentBackendError::transport)?;

        if !response.status().is_success() {
            return Err(Self::reject(None, response).await);
        }

        let row: BucketCountsRow = response
            .json()
            .await
            .map_err(AssignmentBackendError::transport)?;
        Ok(row.into())
    }
}
