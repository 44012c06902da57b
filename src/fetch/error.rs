//! Fetch failure taxonomy.

use reqwest::StatusCode;
use thiserror::Error;

use crate::fetch::snapshot::PayloadError;

/// Errors that can occur while fetching a snapshot.
///
/// Every variant means "fetch failed" to the monitor loop: it retries all of
/// them the same way. The variants exist for logs and metrics.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection, DNS, TLS or timeout failure.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Endpoint answered with anything other than 200.
    #[error("unexpected status {0}")]
    BadStatus(StatusCode),

    /// Body was not seven comma-separated integers.
    #[error("malformed payload: {0}")]
    MalformedPayload(#[from] PayloadError),
}

impl FetchError {
    /// Short label used for metrics and structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Transport(_) => "transport",
            FetchError::BadStatus(_) => "bad_status",
            FetchError::MalformedPayload(_) => "malformed_payload",
        }
    }
}

/// Result type for fetch operations.
pub type FetchResult<T> = Result<T, FetchError>;
