//! Retrieval client for the monitor backend.
//!
//! The scheduler talks to a [`SnapshotSource`] trait object so cadence tests
//! can substitute a scripted source for the HTTP client.

use crate::snapshot::StateSnapshot;
use async_trait::async_trait;
use reqwest::header::{HeaderValue, CACHE_CONTROL};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Default endpoint served by the monitor backend.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000/api/state";

/// Request timeout, kept well under the refresh interval so a hung request
/// cannot stack up behind the next tick.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Why one retrieval attempt produced no snapshot.
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("server responded with status {0}")]
    Status(u16),

    #[error("malformed snapshot payload: {0}")]
    Decode(String),
}

/// Anything that can produce a [`StateSnapshot`] on demand.
#[async_trait]
pub trait SnapshotSource: Send + Sync {
    async fn fetch(&self) -> Result<StateSnapshot, FetchError>;
}

/// HTTP implementation polling the backend's state endpoint.
pub struct HttpSnapshotSource {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpSnapshotSource {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|error| FetchError::Transport(error.to_string()))?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SnapshotSource for HttpSnapshotSource {
    async fn fetch(&self) -> Result<StateSnapshot, FetchError> {
        let response = self
            .client
            .get(&self.endpoint)
            .header(CACHE_CONTROL, HeaderValue::from_static("no-cache"))
            .send()
            .await
            .map_err(|error| FetchError::Transport(error.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|error| FetchError::Transport(error.to_string()))?;
        debug!(bytes = body.len(), "snapshot payload received");

        serde_json::from_slice(&body).map_err(|error| FetchError::Decode(error.to_string()))
    }
}
