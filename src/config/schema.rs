//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the monitor.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Endpoint polled when no configuration overrides it.
pub const DEFAULT_ENDPOINT: &str = "http://srv.msk01.gigacorp.local/_stats";

/// Root configuration for the stats monitor.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct MonitorConfig {
    /// Metrics endpoint settings.
    pub endpoint: EndpointConfig,

    /// Retry configuration.
    pub retries: RetryConfig,

    /// Pause between loop iterations.
    pub schedule: ScheduleConfig,

    /// Where warning lines go.
    pub output: OutputConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Alert thresholds. Fixed at their defaults when loaded from a file.
    #[serde(skip)]
    pub thresholds: ThresholdConfig,
}

/// Metrics endpoint configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct EndpointConfig {
    /// Full URL of the stats endpoint.
    pub url: String,

    /// Optional request timeout in seconds. `None` keeps the HTTP client default.
    pub timeout_secs: Option<u64>,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: None,
        }
    }
}

/// Retry configuration for a single loop iteration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Fetch attempts per iteration before reporting the server unavailable.
    pub max_attempts: u32,

    /// Base backoff delay in milliseconds (0 disables backoff).
    pub base_delay_ms: u64,

    /// Upper bound for the backoff delay in milliseconds.
    pub max_delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay_ms: 0,
            max_delay_ms: 0,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ScheduleConfig {
    /// Sleep between iterations in milliseconds. 0 polls back-to-back.
    pub interval_ms: u64,
}

/// Output sink selection.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SinkKind {
    /// One line per message on standard output.
    #[default]
    Stdout,
    /// Messages become warn-level tracing events.
    Log,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct OutputConfig {
    pub sink: SinkKind,
}

/// Alert thresholds. Every comparison is strictly greater-than.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThresholdConfig {
    /// Raw load average.
    pub load_average: i64,
    /// Memory used, integer percent.
    pub memory_percent: i64,
    /// Disk used, integer percent.
    pub disk_percent: i64,
    /// Network bandwidth used, integer percent.
    pub network_percent: i64,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            load_average: 30,
            memory_percent: 80,
            disk_percent: 90,
            network_percent: 90,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Emit logs as JSON instead of human-readable text.
    pub json_logs: bool,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: false,
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9090".to_string(),
        }
    }
}
