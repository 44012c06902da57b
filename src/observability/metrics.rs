//! Metrics collection and exposition.
//!
//! # Metrics
//! - `monitor_fetch_attempts_total` (counter): attempts by outcome
//! - `monitor_unavailable_total` (counter): iterations where every attempt failed
//! - `monitor_alerts_total` (counter): fired rules by rule name
//!
//! Without an installed recorder every call is a no-op.

use std::net::SocketAddr;

use metrics::counter;
use metrics_exporter_prometheus::PrometheusBuilder;

/// Start the Prometheus scrape endpoint. Must run inside a tokio runtime.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

pub fn record_fetch_attempt(outcome: &'static str) {
    counter!("monitor_fetch_attempts_total", "outcome" => outcome).increment(1);
}

pub fn record_unavailable() {
    counter!("monitor_unavailable_total").increment(1);
}

pub fn record_alert(rule: &'static str) {
    counter!("monitor_alerts_total", "rule" => rule).increment(1);
}
