//! Startup orchestration.
//!
//! # Responsibilities
//! - Load and validate configuration (or fall back to defaults)
//! - Build the HTTP fetcher, sink and monitor loop
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - A missing `--config` means defaults, not an error

use std::path::Path;

use crate::config::validation::validate_config;
use crate::config::{load_config, ConfigError, MonitorConfig};
use crate::fetch::{FetchError, HttpFetcher};
use crate::monitor::{sink, MonitorLoop};

/// Load configuration from `path`, or validated defaults when absent.
pub fn resolve_config(path: Option<&Path>) -> Result<MonitorConfig, ConfigError> {
    match path {
        Some(path) => load_config(path),
        None => {
            let config = MonitorConfig::default();
            validate_config(&config).map_err(ConfigError::Validation)?;
            Ok(config)
        }
    }
}

/// Assemble the production monitor loop for `config`.
pub fn build_monitor(config: &MonitorConfig) -> Result<MonitorLoop<HttpFetcher>, FetchError> {
    let fetcher = HttpFetcher::new(&config.endpoint)?;
    let sink = sink::from_kind(config.output.sink);

    tracing::info!(
        endpoint = %fetcher.url(),
        sink = ?config.output.sink,
        "Monitor assembled"
    );

    Ok(MonitorLoop::new(fetcher, sink, config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_path() {
        let config = resolve_config(None).unwrap();
        assert_eq!(config.retries.max_attempts, 3);
    }

    #[test]
    fn test_build_monitor_from_defaults() {
        assert!(build_monitor(&MonitorConfig::default()).is_ok());
    }
}
