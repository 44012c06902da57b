//! Resilience subsystem.
//!
//! # Data Flow
//! ```text
//! Monitor iteration:
//!     → retries.rs (attempt fetch, stop on first success)
//!     → backoff.rs (optional delay between attempts)
//! ```
//!
//! # Design Decisions
//! - Retry budget is per iteration, never carried over
//! - Backoff is off by default so retries happen back-to-back

pub mod backoff;
pub mod retries;

pub use retries::{fetch_with_retries, RetryOutcome};
