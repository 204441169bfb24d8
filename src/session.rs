//! Backend session configuration shared by the HTTP adapters.
//!
//! A [`BackendSession`] bundles the validated base URL, the anti-forgery
//! token read from the active page session, and the HTTP client every
//! adapter reuses. Requests are same-origin and authenticated by ambient
//! session state; the token travels in the [`CSRF_HEADER`] header on
//! mutating calls.

use reqwest::Client;
use thiserror::Error;

/// Header carrying the anti-forgery token on mutating requests.
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// Errors returned while constructing a backend session.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SessionError {
    /// The base URL is not an absolute `http(s)` URL.
    #[error("invalid base URL '{0}', expected an absolute http(s) URL")]
    InvalidBaseUrl(String),

    /// The anti-forgery token is empty after trimming.
    #[error("anti-forgery token must not be empty")]
    EmptyCsrfToken,
}

/// Validated backend session: base URL, anti-forgery token, shared client.
#[derive(Debug, Clone)]
pub struct BackendSession {
    base_url: String,
    csrf_token: String,
    client: Client,
}

impl BackendSession {
    /// Creates a validated session.
    ///
    /// The base URL is normalized by dropping any trailing slashes.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::InvalidBaseUrl`] when the base URL is not an
    /// absolute `http(s)` URL, or [`SessionError::EmptyCsrfToken`] when the
    /// token is empty after trimming.
    pub fn new(
        base_url: impl Into<String>,
        csrf_token: impl Into<String>,
    ) -> Result<Self, SessionError> {
        let raw_url = base_url.into();
        let normalized = raw_url.trim().trim_end_matches('/');
        let has_scheme =
            normalized.starts_with("http://") || normalized.starts_with("https://");
        let has_host = normalized
            .split("://")
            .nth(1)
            .is_some_and(|rest| !rest.is_empty());
        if !has_scheme || !has_host {
            return Err(SessionError::InvalidBaseUrl(raw_url));
        }

        let token = csrf_token.into().trim().to_owned();
        if token.is_empty() {
            return Err(SessionError::EmptyCsrfToken);
        }

        Ok(Self {
            base_url: normalized.to_owned(),
            csrf_token: token,
            client: Client::new(),
        })
    }

    /// Returns the base URL without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the anti-forgery token sent on mutating requests.
    #[must_use]
    pub fn csrf_token(&self) -> &str {
        &self.csrf_token
    }

    /// Returns the HTTP client shared by all adapters.
    #[must_use]
    pub const fn client(&self) -> &Client {
        &self.client
    }

    /// Joins a relative path onto the base URL.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}
