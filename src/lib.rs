//! Remote server stats monitor library.

pub mod config;
pub mod fetch;
pub mod lifecycle;
pub mod monitor;
pub mod observability;
pub mod resilience;

pub use config::schema::MonitorConfig;
pub use fetch::{HttpFetcher, MetricsSnapshot, StatsSource};
pub use lifecycle::Shutdown;
pub use monitor::MonitorLoop;
