//! Fetcher subsystem.
//!
//! # Data Flow
//! ```text
//! HTTP GET <endpoint>
//!     → client.rs (status check)
//!     → snapshot.rs (split on ',', parse 7 × i64)
//!     → MetricsSnapshot | FetchError
//! ```
//!
//! # Design Decisions
//! - One network call per fetch, no internal retries
//! - No timeout unless configured; the transport default applies
//! - Partial snapshots are never returned

pub mod client;
pub mod error;
pub mod snapshot;

pub use client::{HttpFetcher, StatsSource};
pub use error::{FetchError, FetchResult};
pub use snapshot::{MetricsSnapshot, PayloadError};
