//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → MonitorConfig (validated, immutable)
//!     → handed to the fetcher and monitor loop at construction
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults to allow an empty or missing file
//! - Validation separates syntactic (serde) from semantic checks
//! - Thresholds live in the config struct but are not read from files

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::EndpointConfig;
pub use schema::MonitorConfig;
pub use schema::RetryConfig;
pub use schema::SinkKind;
pub use schema::ThresholdConfig;
