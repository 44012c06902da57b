//! Wire payload decoding.
//!
//! The stats endpoint answers with a single line of seven comma-separated
//! base-10 integers. Splitting is literal: no whitespace is trimmed.

use std::num::ParseIntError;
use std::str::FromStr;

use thiserror::Error;

/// Field names in wire order.
pub const FIELD_NAMES: [&str; 7] = [
    "load_average",
    "memory_total_bytes",
    "memory_used_bytes",
    "disk_total_bytes",
    "disk_used_bytes",
    "network_bandwidth_bytes_per_sec",
    "network_usage_bytes_per_sec",
];

/// One resource-usage sample of the monitored host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub load_average: i64,
    pub memory_total_bytes: i64,
    pub memory_used_bytes: i64,
    pub disk_total_bytes: i64,
    pub disk_used_bytes: i64,
    pub network_bandwidth_bytes_per_sec: i64,
    pub network_usage_bytes_per_sec: i64,
}

/// Reasons a response body is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PayloadError {
    #[error("expected {expected} comma-separated fields, got {actual}")]
    FieldCount { expected: usize, actual: usize },

    #[error("field {index} ({name}) = {raw:?} is not an integer: {source}")]
    InvalidField {
        index: usize,
        name: &'static str,
        raw: String,
        source: ParseIntError,
    },
}

impl MetricsSnapshot {
    fn from_fields(f: [i64; 7]) -> Self {
        Self {
            load_average: f[0],
            memory_total_bytes: f[1],
            memory_used_bytes: f[2],
            disk_total_bytes: f[3],
            disk_used_bytes: f[4],
            network_bandwidth_bytes_per_sec: f[5],
            network_usage_bytes_per_sec: f[6],
        }
    }
}

impl FromStr for MetricsSnapshot {
    type Err = PayloadError;

    fn from_str(body: &str) -> Result<Self, Self::Err> {
        let raw: Vec<&str> = body.split(',').collect();
        if raw.len() != FIELD_NAMES.len() {
            return Err(PayloadError::FieldCount {
                expected: FIELD_NAMES.len(),
                actual: raw.len(),
            });
        }

        let mut fields = [0i64; 7];
        for (index, text) in raw.iter().enumerate() {
            fields[index] = text.parse::<i64>().map_err(|source| PayloadError::InvalidField {
                index,
                name: FIELD_NAMES[index],
                raw: (*text).to_string(),
                source,
            })?;
        }

        Ok(Self::from_fields(fields))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_fields() {
        let snapshot: MetricsSnapshot = "31,1000,100,2000,200,3000,300".parse().unwrap();
        assert_eq!(
            snapshot,
            MetricsSnapshot {
                load_average: 31,
                memory_total_bytes: 1000,
                memory_used_bytes: 100,
                disk_total_bytes: 2000,
                disk_used_bytes: 200,
                network_bandwidth_bytes_per_sec: 3000,
                network_usage_bytes_per_sec: 300,
            }
        );
    }

    #[test]
    fn test_negative_and_zero_accepted() {
        let snapshot: MetricsSnapshot = "-1,0,0,-5,0,0,-9223372036854775808".parse().unwrap();
        assert_eq!(snapshot.load_average, -1);
        assert_eq!(snapshot.disk_total_bytes, -5);
        assert_eq!(snapshot.network_usage_bytes_per_sec, i64::MIN);
    }

    #[test]
    fn test_wrong_field_count() {
        assert_eq!(
            "1,2,3,4,5,6".parse::<MetricsSnapshot>(),
            Err(PayloadError::FieldCount { expected: 7, actual: 6 })
        );
        assert_eq!(
            "1,2,3,4,5,6,7,8".parse::<MetricsSnapshot>(),
            Err(PayloadError::FieldCount { expected: 7, actual: 8 })
        );
        assert_eq!(
            "".parse::<MetricsSnapshot>(),
            Err(PayloadError::FieldCount { expected: 7, actual: 1 })
        );
    }

    #[test]
    fn test_non_numeric_field() {
        let err = "12,abc,1,2,3,4,5".parse::<MetricsSnapshot>().unwrap_err();
        match err {
            PayloadError::InvalidField { index, name, raw, .. } => {
                assert_eq!(index, 1);
                assert_eq!(name, "memory_total_bytes");
                assert_eq!(raw, "abc");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_empty_overflow_and_whitespace_rejected() {
        assert!("1,,3,4,5,6,7".parse::<MetricsSnapshot>().is_err());
        assert!("1,2,3,4,5,6,9223372036854775808".parse::<MetricsSnapshot>().is_err());
        assert!("1, 2,3,4,5,6,7".parse::<MetricsSnapshot>().is_err());
        assert!("1,2,3,4,5,6,7\n".parse::<MetricsSnapshot>().is_err());
        assert!("1.5,2,3,4,5,6,7".parse::<MetricsSnapshot>().is_err());
    }
}
