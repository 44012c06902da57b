//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Fetcher and monitor loop produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (counters)
//!
//! Consumers:
//!     → stderr/stdout log stream (text or JSON)
//!     → Metrics endpoint (Prometheus scrape, optional)
//! ```
//!
//! Alert lines themselves go through `monitor::sink`, not through here,
//! unless the log sink is selected.

pub mod logging;
pub mod metrics;
