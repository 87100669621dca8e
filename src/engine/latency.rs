//! Latency mode: strictly sequential execution, one timing sample per
//! operation.
//!
//! All operations are compiled before the first timer starts so that backend
//! translation cost never leaks into the measurement. Any execution failure
//! aborts the run; a partial percentile is never reported.

use crate::core::{AbstractOperation, BenchResult, MetricType, ResultRecord};
use crate::engine::executor::{CompiledOp, OperationExecutor};
use crate::metrics;
use std::time::{Duration, Instant};

/// Minimum sample count for a meaningful p99; below this the percentile is
/// reported as 0 as an explicit insufficient-sample signal.
pub const P99_MIN_SAMPLES: usize = 100;

pub fn run_latency(
    ops: &[AbstractOperation],
    executor: &mut dyn OperationExecutor,
) -> BenchResult<ResultRecord> {
    // Compilation phase, excluded from timing.
    let compiled: Vec<CompiledOp> = ops
        .iter()
        .map(|op| executor.compile(op))
        .collect::<BenchResult<_>>()?;

    let mut samples: Vec<Duration> = Vec::with_capacity(compiled.len());
    for op in &compiled {
        let start = Instant::now();
        executor.execute(op)?;
        samples.push(start.elapsed());
    }

    let avg_latency_ms = metrics::mean_ms(&samples);
    let p99_latency_ms = if samples.len() >= P99_MIN_SAMPLES {
        metrics::percentile_ms(&samples, 99.0)
    } else {
        0.0
    };
    let duration_s = samples.iter().map(Duration::as_secs_f64).sum();

    Ok(ResultRecord {
        metric_type: MetricType::Latency,
        avg_latency_ms: Some(avg_latency_ms),
        p99_latency_ms: Some(p99_latency_ms),
        ops_per_sec: None,
        duration_s,
        total_ops: ops.len(),
    })
}
