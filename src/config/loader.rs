//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::MonitorConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<MonitorConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<MonitorConfig, ConfigError> {
    let config: MonitorConfig = toml::from_str(content)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::SinkKind;

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("stats-monitor-{}.toml", std::process::id()));
        fs::write(
            &path,
            "[endpoint]\nurl = \"https://stats.internal/_stats\"\ntimeout_secs = 5\n\n[output]\nsink = \"log\"\n",
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(config.endpoint.url, "https://stats.internal/_stats");
        assert_eq!(config.endpoint.timeout_secs, Some(5));
        assert_eq!(config.output.sink, SinkKind::Log);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_config(Path::new("/nonexistent/stats-monitor.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_bad_toml_is_parse_error() {
        let err = parse_config("[retries]\nmax_attempts = \"three\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_validation_errors_are_joined() {
        let err = parse_config("[retries]\nmax_attempts = 0\n\n[endpoint]\ntimeout_secs = 0\n")
            .unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("Validation failed: "));
        assert!(message.contains("max_attempts"));
        assert!(message.contains("timeout_secs"));
    }
}
