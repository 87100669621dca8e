//! Timing statistics and result normalization.

use crate::core::ResultRecord;
use std::time::Duration;

/// Arithmetic mean of the samples in milliseconds; 0 for an empty set.
pub fn mean_ms(samples: &[Duration]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let total: f64 = samples.iter().map(|d| d.as_secs_f64() * 1000.0).sum();
    total / samples.len() as f64
}

/// Percentile of the sample distribution in milliseconds, nearest-rank.
pub fn percentile_ms(samples: &[Duration], pct: f64) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let mut sorted: Vec<f64> = samples.iter().map(|d| d.as_secs_f64() * 1000.0).collect();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let rank = ((pct / 100.0) * sorted.len() as f64).ceil() as usize;
    sorted[rank.clamp(1, sorted.len()) - 1]
}

/// Raw output of one task execution, before normalization. Different
/// execution paths report different shapes; the aggregator folds them all
/// into the canonical `ResultRecord`.
#[derive(Debug, Clone)]
pub enum RawMeasurement {
    /// A bare elapsed-seconds value.
    Seconds(f64),
    /// An already-structured record; passes through unchanged.
    Record(ResultRecord),
    /// The task reported nothing; fall back to the wall clock measured
    /// around the whole call.
    Empty,
}

pub fn normalize(raw: RawMeasurement, wall_clock: Duration, total_ops: usize) -> ResultRecord {
    match raw {
        RawMeasurement::Record(record) => record,
        RawMeasurement::Seconds(duration_s) => ResultRecord::from_duration(duration_s, total_ops),
        RawMeasurement::Empty => {
            ResultRecord::from_duration(wall_clock.as_secs_f64(), total_ops)
        }
    }
}
