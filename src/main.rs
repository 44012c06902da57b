//! Remote server stats monitor.
//!
//! Polls a host's `_stats` endpoint, checks the reported load, memory, disk
//! and network figures against thresholds and prints a warning for every
//! breach.
//!
//! # Architecture Overview
//!
//! ```text
//!   ┌──────────────────────────── MONITOR LOOP ────────────────────────────┐
//!   │                                                                      │
//!   │   ┌────────────┐  up to N   ┌──────────┐  GET /_stats  ┌─────────┐   │
//!   │   │ resilience │──attempts─▶│  fetch   │──────────────▶│ remote  │   │
//!   │   │  retries   │◀───────────│ (client) │◀──────────────│  host   │   │
//!   │   └─────┬──────┘  snapshot  └──────────┘  "a,b,c,..."  └─────────┘   │
//!   │         │                                                            │
//!   │         ▼                                                            │
//!   │   ┌────────────┐   alerts   ┌──────────┐                             │
//!   │   │   rules    │───────────▶│   sink   │──▶ stdout / log stream      │
//!   │   └────────────┘            └──────────┘                             │
//!   │                                                                      │
//!   │   config · observability · lifecycle (shutdown on SIGINT/SIGTERM)    │
//!   └──────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use stats_monitor::config::validation::validate_config;
use stats_monitor::config::ConfigError;
use stats_monitor::lifecycle::{signals, startup, Shutdown};
use stats_monitor::observability::{logging, metrics};

#[derive(Parser)]
#[command(name = "stats-monitor")]
#[command(about = "Poll a server's stats endpoint and warn on resource pressure", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the stats endpoint URL.
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Run a single iteration and exit.
    #[arg(long)]
    once: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = startup::resolve_config(cli.config.as_deref())?;
    if let Some(endpoint) = cli.endpoint {
        config.endpoint.url = endpoint;
        validate_config(&config).map_err(ConfigError::Validation)?;
    }

    logging::init_logging(&config.observability);

    tracing::info!("stats-monitor v{} starting", env!("CARGO_PKG_VERSION"));

    tracing::info!(
        endpoint = %config.endpoint.url,
        max_attempts = config.retries.max_attempts,
        interval_ms = config.schedule.interval_ms,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    let monitor = startup::build_monitor(&config)?;

    if cli.once {
        let outcome = monitor.run_iteration().await;
        tracing::debug!(?outcome, "Single iteration complete");
        return Ok(());
    }

    let shutdown = Arc::new(Shutdown::new());
    let receiver = shutdown.subscribe();
    tokio::spawn(signals::forward_signals(shutdown.clone()));

    monitor.run(receiver).await;

    tracing::info!("Shutdown complete");
    Ok(())
}
