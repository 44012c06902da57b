//! Threshold rules.
//!
//! Four independent checks run against every snapshot. Percentages use
//! truncating integer division, so 80 of 100 is exactly 80% and does not
//! exceed an 80% threshold. Arithmetic wraps instead of panicking on
//! nonsensical inputs.

use std::fmt;

use crate::config::ThresholdConfig;
use crate::fetch::MetricsSnapshot;

/// Bytes per binary megabyte.
const MEBI: i64 = 1024 * 1024;

/// A fired threshold rule and the figure reported with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alert {
    /// Raw load average.
    HighLoad { load_average: i64 },
    /// Memory used, integer percent.
    HighMemory { percent: i64 },
    /// Free disk space in MiB.
    LowDisk { free_mb: i64 },
    /// Spare bandwidth in binary megabits per second.
    HighNetwork { available_mbit: i64 },
}

impl Alert {
    /// Rule label for metrics.
    pub fn rule(&self) -> &'static str {
        match self {
            Alert::HighLoad { .. } => "load",
            Alert::HighMemory { .. } => "memory",
            Alert::LowDisk { .. } => "disk",
            Alert::HighNetwork { .. } => "network",
        }
    }
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Alert::HighLoad { load_average } => {
                write!(f, "Load Average is too high: {}", load_average)
            }
            Alert::HighMemory { percent } => write!(f, "Memory usage too high: {}%", percent),
            Alert::LowDisk { free_mb } => {
                write!(f, "Free disk space is too low: {} Mb left", free_mb)
            }
            Alert::HighNetwork { available_mbit } => write!(
                f,
                "Network bandwidth usage high: {} Mbit/s available",
                available_mbit
            ),
        }
    }
}

/// Integer percent of `used` in `total`, or `None` when `total` is not positive.
fn usage_percent(used: i64, total: i64) -> Option<i64> {
    (total > 0).then(|| used.wrapping_mul(100) / total)
}

/// Evaluate every rule; fired alerts come back in load, memory, disk, network order.
pub fn evaluate(snapshot: &MetricsSnapshot, thresholds: &ThresholdConfig) -> Vec<Alert> {
    let mut alerts = Vec::new();

    if snapshot.load_average > thresholds.load_average {
        alerts.push(Alert::HighLoad {
            load_average: snapshot.load_average,
        });
    }

    if let Some(percent) = usage_percent(snapshot.memory_used_bytes, snapshot.memory_total_bytes) {
        if percent > thresholds.memory_percent {
            alerts.push(Alert::HighMemory { percent });
        }
    }

    if let Some(percent) = usage_percent(snapshot.disk_used_bytes, snapshot.disk_total_bytes) {
        if percent > thresholds.disk_percent {
            let free = snapshot.disk_total_bytes.wrapping_sub(snapshot.disk_used_bytes);
            alerts.push(Alert::LowDisk {
                free_mb: free / MEBI,
            });
        }
    }

    if let Some(percent) = usage_percent(
        snapshot.network_usage_bytes_per_sec,
        snapshot.network_bandwidth_bytes_per_sec,
    ) {
        if percent > thresholds.network_percent {
            let spare = snapshot
                .network_bandwidth_bytes_per_sec
                .wrapping_sub(snapshot.network_usage_bytes_per_sec);
            alerts.push(Alert::HighNetwork {
                available_mbit: spare.wrapping_mul(8) / MEBI,
            });
        }
    }

    alerts
}
