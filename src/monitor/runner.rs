//! The fetch-retry-evaluate loop.

use std::time::Duration;

use tokio::sync::broadcast;
use tokio::time::sleep;

use crate::config::{MonitorConfig, RetryConfig, ThresholdConfig};
use crate::fetch::StatsSource;
use crate::monitor::rules::{evaluate, Alert};
use crate::monitor::sink::OutputSink;
use crate::observability::metrics;
use crate::resilience::fetch_with_retries;

/// Line emitted when every attempt of an iteration failed.
pub const UNAVAILABLE_MESSAGE: &str = "Unable to fetch server statistic";

/// What a single iteration produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IterationOutcome {
    /// All attempts failed.
    Unavailable { attempts: u32 },
    /// A snapshot was fetched and checked; `alerts` may be empty.
    Evaluated { attempts: u32, alerts: Vec<Alert> },
}

/// Polls a [`StatsSource`] and reports threshold breaches to a sink.
pub struct MonitorLoop<S> {
    source: S,
    sink: Box<dyn OutputSink>,
    retries: RetryConfig,
    thresholds: ThresholdConfig,
    interval: Duration,
}

impl<S: StatsSource> MonitorLoop<S> {
    pub fn new(source: S, sink: Box<dyn OutputSink>, config: &MonitorConfig) -> Self {
        Self {
            source,
            sink,
            retries: config.retries.clone(),
            thresholds: config.thresholds,
            interval: Duration::from_millis(config.schedule.interval_ms),
        }
    }

    /// Run one fetch-evaluate cycle and emit its messages.
    pub async fn run_iteration(&self) -> IterationOutcome {
        let outcome = fetch_with_retries(&self.source, &self.retries).await;

        let Some(snapshot) = outcome.snapshot else {
            tracing::warn!(attempts = outcome.attempts, "Stats endpoint unavailable");
            metrics::record_unavailable();
            self.sink.emit(UNAVAILABLE_MESSAGE);
            return IterationOutcome::Unavailable {
                attempts: outcome.attempts,
            };
        };

        tracing::debug!(attempts = outcome.attempts, ?snapshot, "Snapshot fetched");

        let alerts = evaluate(&snapshot, &self.thresholds);
        for alert in &alerts {
            metrics::record_alert(alert.rule());
            self.sink.emit(&alert.to_string());
        }

        IterationOutcome::Evaluated {
            attempts: outcome.attempts,
            alerts,
        }
    }

    /// Loop until a shutdown signal arrives.
    ///
    /// A signal received mid-iteration drops the in-flight fetch.
    pub async fn run(self, mut shutdown: broadcast::Receiver<()>) {
        tracing::info!(
            max_attempts = self.retries.max_attempts,
            interval_ms = self.interval.as_millis() as u64,
            "Monitor loop starting"
        );

        let mut iterations: u64 = 0;
        loop {
            tokio::select! {
                biased;
                _ = shutdown.recv() => {
                    tracing::info!(iterations, "Monitor loop received shutdown signal, exiting loop");
                    break;
                }
                _ = self.tick() => {
                    iterations += 1;
                }
            }
        }
    }

    async fn tick(&self) {
        self.run_iteration().await;
        if self.interval.is_zero() {
            // Keep the loop cancellable even when the source never awaits.
            tokio::task::yield_now().await;
        } else {
            sleep(self.interval).await;
        }
    }
}
