//! Optional upstream chat relay.
//!
//! DESIGN
//! ======
//! When `CHAT_UPSTREAM_URL` is set, queries are proxied to that service
//! and its reply text replaces the canned agent's. Any failure on this
//! path is recovered by the caller with the canned reply — the relay is
//! an enhancement, never a dependency. The [`ChatRelay`] trait keeps the
//! handler testable with a mock relay.

#[cfg(test)]
#[path = "upstream_test.rs"]
mod upstream_test;

use std::time::Duration;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

const REQUEST_TIMEOUT_SECS: u64 = 30;
const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Errors on the upstream path. All of them degrade to the canned reply.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("CHAT_UPSTREAM_URL is not set")]
    NotConfigured,
    #[error("failed to build HTTP client: {0}")]
    HttpClientBuild(String),
    #[error("upstream request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("upstream returned status {0}")]
    BadStatus(u16),
}

/// Anything that can answer a chat query remotely.
#[async_trait::async_trait]
pub trait ChatRelay: Send + Sync {
    /// Relay one query and return the reply text.
    async fn relay(&self, query: &str, session_id: Uuid) -> Result<String, UpstreamError>;
}

#[derive(Debug, Serialize)]
struct RelayRequest<'a> {
    query: &'a str,
    session_id: Uuid,
}

#[derive(Debug, Deserialize)]
struct RelayReply {
    response: String,
}

/// HTTP relay to the configured upstream chat service.
pub struct UpstreamClient {
    http: reqwest::Client,
    url: String,
}

impl UpstreamClient {
    /// Build a relay from `CHAT_UPSTREAM_URL`.
    ///
    /// # Errors
    ///
    /// [`UpstreamError::NotConfigured`] when the variable is unset or
    /// blank; [`UpstreamError::HttpClientBuild`] when the HTTP client
    /// cannot be constructed.
    pub fn from_env() -> Result<Self, UpstreamError> {
        let url = std::env::var("CHAT_UPSTREAM_URL")
            .ok()
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty())
            .ok_or(UpstreamError::NotConfigured)?;
        Self::new(url)
    }

    /// Build a relay for an explicit URL.
    ///
    /// # Errors
    ///
    /// [`UpstreamError::HttpClientBuild`] when the HTTP client cannot be
    /// constructed.
    pub fn new(url: String) -> Result<Self, UpstreamError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .map_err(|e| UpstreamError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, url })
    }

    /// The configured upstream URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait::async_trait]
impl ChatRelay for UpstreamClient {
    async fn relay(&self, query: &str, session_id: Uuid) -> Result<String, UpstreamError> {
        let payload = RelayRequest { query, session_id };
        let resp = self.http.post(&self.url).json(&payload).send().await?;
        if !resp.status().is_success() {
            return Err(UpstreamError::BadStatus(resp.status().as_u16()));
        }
        let body: RelayReply = resp.json().await?;
        Ok(body.response)
    }
}
