//! Monitor subsystem.
//!
//! # Data Flow
//! ```text
//! Each iteration:
//!     → resilience::retries (up to max_attempts fetches)
//!     → None: emit "Unable to fetch server statistic"
//!     → Some(snapshot): rules.rs evaluates load, memory, disk, network
//!     → sink.rs receives one line per fired rule
//! ```
//!
//! # Design Decisions
//! - Iterations are stateless: no deduplication, no hysteresis
//! - Rules are independent and never short-circuit
//! - Cancellation via broadcast receiver, checked before each iteration

pub mod rules;
pub mod runner;
pub mod sink;

pub use rules::{evaluate, Alert};
pub use runner::{IterationOutcome, MonitorLoop, UNAVAILABLE_MESSAGE};
pub use sink::{MemorySink, OutputSink};
