//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate the endpoint URL and value ranges
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: MonitorConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;
use url::Url;

use crate::config::schema::MonitorConfig;

/// A single semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("endpoint url '{url}' is invalid: {reason}")]
    InvalidEndpoint { url: String, reason: String },

    #[error("retries.max_attempts must be at least 1")]
    ZeroAttempts,

    #[error("retries.max_delay_ms ({max}) is below retries.base_delay_ms ({base})")]
    BackoffRange { base: u64, max: u64 },

    #[error("endpoint.timeout_secs must be greater than 0")]
    ZeroTimeout,

    #[error("observability.metrics_address '{0}' is not a socket address")]
    MetricsAddress(String),
}

/// Check a configuration for semantic errors.
pub fn validate_config(config: &MonitorConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match Url::parse(&config.endpoint.url) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
        Ok(url) => errors.push(ValidationError::InvalidEndpoint {
            url: config.endpoint.url.clone(),
            reason: format!("unsupported scheme '{}'", url.scheme()),
        }),
        Err(e) => errors.push(ValidationError::InvalidEndpoint {
            url: config.endpoint.url.clone(),
            reason: e.to_string(),
        }),
    }

    if config.endpoint.timeout_secs == Some(0) {
        errors.push(ValidationError::ZeroTimeout);
    }

    if config.retries.max_attempts == 0 {
        errors.push(ValidationError::ZeroAttempts);
    }

    if config.retries.max_delay_ms < config.retries.base_delay_ms {
        errors.push(ValidationError::BackoffRange {
            base: config.retries.base_delay_ms,
            max: config.retries.max_delay_ms,
        });
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::MetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
