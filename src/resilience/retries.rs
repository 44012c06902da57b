//! Retry logic.
//!
//! # Responsibilities
//! - Call a [`StatsSource`] until one attempt succeeds or the budget is spent
//! - Optionally sleep with exponential backoff between attempts
//!
//! # Design Decisions
//! - Every fetch error is retryable; the cause is only logged
//! - Exhausting the budget is not an error, it yields `None`

use tokio::time::sleep;

use crate::config::RetryConfig;
use crate::fetch::{MetricsSnapshot, StatsSource};
use crate::observability::metrics;
use crate::resilience::backoff::calculate_backoff;

/// Result of one retried fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryOutcome {
    /// Snapshot from the first successful attempt, if any.
    pub snapshot: Option<MetricsSnapshot>,
    /// Attempts made, including the successful one.
    pub attempts: u32,
}

/// Fetch with up to `config.max_attempts` attempts.
pub async fn fetch_with_retries<S: StatsSource>(source: &S, config: &RetryConfig) -> RetryOutcome {
    let mut attempts = 0;

    while attempts < config.max_attempts {
        if attempts > 0 {
            let delay = calculate_backoff(attempts, config.base_delay_ms, config.max_delay_ms);
            if !delay.is_zero() {
                sleep(delay).await;
            }
        }
        attempts += 1;

        match source.fetch().await {
            Ok(snapshot) => {
                metrics::record_fetch_attempt("success");
                return RetryOutcome {
                    snapshot: Some(snapshot),
                    attempts,
                };
            }
            Err(e) => {
                metrics::record_fetch_attempt(e.kind());
                tracing::debug!(
                    attempt = attempts,
                    max_attempts = config.max_attempts,
                    kind = e.kind(),
                    error = %e,
                    "Fetch attempt failed"
                );
            }
        }
    }

    RetryOutcome {
        snapshot: None,
        attempts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::{FetchResult, PayloadError};
    use std::sync::atomic::{AtomicU32, Ordering};

    /// Fails the first `failures` calls, then succeeds.
    struct FlakySource {
        failures: u32,
        calls: AtomicU32,
    }

    impl StatsSource for FlakySource {
        async fn fetch(&self) -> FetchResult<MetricsSnapshot> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst);
            if n < self.failures {
                Err(PayloadError::FieldCount { expected: 7, actual: 1 }.into())
            } else {
                Ok("1,2,3,4,5,6,7".parse::<MetricsSnapshot>()?)
            }
        }
    }

    fn flaky(failures: u32) -> FlakySource {
        FlakySource {
            failures,
            calls: AtomicU32::new(0),
        }
    }

    #[tokio::test]
    async fn test_first_attempt_success() {
        let source = flaky(0);
        let outcome = fetch_with_retries(&source, &RetryConfig::default()).await;
        assert_eq!(outcome.attempts, 1);
        assert!(outcome.snapshot.is_some());
    }

    #[tokio::test]
    async fn test_recovers_on_second_attempt() {
        let source = flaky(1);
        let outcome = fetch_with_retries(&source, &RetryConfig::default()).await;
        assert_eq!(outcome.attempts, 2);
        assert_eq!(outcome.snapshot.map(|s| s.load_average), Some(1));
        assert_eq!(source.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_gives_up_after_max_attempts() {
        let source = flaky(u32::MAX);
        let outcome = fetch_with_retries(&source, &RetryConfig::default()).await;
        assert_eq!(outcome.attempts, 3);
        assert!(outcome.snapshot.is_none());
        assert_eq!(source.calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_backoff_between_attempts() {
        let source = flaky(2);
        let config = RetryConfig {
            max_attempts: 3,
            base_delay_ms: 100,
            max_delay_ms: 1000,
        };
        let started = tokio::time::Instant::now();
        let outcome = fetch_with_retries(&source, &config).await;
        assert_eq!(outcome.attempts, 3);
        assert!(started.elapsed().as_millis() >= 300);
    }
}
