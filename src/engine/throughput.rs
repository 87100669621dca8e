//! Throughput mode: the operation sequence is split into contiguous chunks,
//! one worker thread per chunk, and a single wall-clock timer brackets
//! dispatch through the join of every worker.
//!
//! Chunk-to-worker assignment is static. Each worker owns its own execution
//! context; contexts are never shared. Backend translation of every chunk
//! finishes before the timer starts, so only execution is measured. Within a
//! chunk operations run strictly in order; across chunks there is no
//! ordering guarantee.

use crate::core::{AbstractOperation, BenchError, BenchResult, MetricType, ResultRecord};
use crate::engine::executor::{CompiledOp, ExecutorFactory, OperationExecutor};
use log::debug;
use std::thread;
use std::time::Instant;

/// Splits `ops` into contiguous chunks of `ceil(len / workers)`. The final
/// chunk may be shorter; concatenating the chunks in order reconstructs the
/// input exactly.
pub fn chunk_ops(ops: &[AbstractOperation], workers: usize) -> Vec<&[AbstractOperation]> {
    if ops.is_empty() {
        return Vec::new();
    }
    let workers = workers.max(1);
    let chunk_size = ops.len().div_ceil(workers);
    ops.chunks(chunk_size).collect()
}

pub fn run_throughput(
    ops: &[AbstractOperation],
    factory: &dyn ExecutorFactory,
    concurrency: usize,
) -> BenchResult<ResultRecord> {
    let chunks = chunk_ops(ops, concurrency);
    debug!(
        "Dispatching {} operations across {} workers",
        ops.len(),
        chunks.len()
    );

    // Compilation phase, excluded from timing: each worker's own context
    // translates its chunk up front.
    let mut workers: Vec<(Box<dyn OperationExecutor>, Vec<CompiledOp>)> =
        Vec::with_capacity(chunks.len());
    for chunk in &chunks {
        let ctx = factory.create()?;
        let compiled = chunk
            .iter()
            .map(|op| ctx.compile(op))
            .collect::<BenchResult<Vec<_>>>()?;
        workers.push((ctx, compiled));
    }

    let start = Instant::now();

    let outcome: BenchResult<()> = thread::scope(|scope| {
        let handles: Vec<_> = workers
            .into_iter()
            .map(|(mut ctx, compiled)| {
                scope.spawn(move || -> BenchResult<()> {
                    for op in &compiled {
                        ctx.execute(op)?;
                    }
                    Ok(())
                })
            })
            .collect();

        // Every worker is joined before any failure propagates, so a slow
        // chunk is never abandoned mid-flight.
        let mut first_failure = None;
        for (idx, handle) in handles.into_iter().enumerate() {
            let joined = match handle.join() {
                Ok(result) => result,
                Err(_) => Err(BenchError::WorkerPanic(idx)),
            };
            if let Err(e) = joined {
                first_failure.get_or_insert(e);
            }
        }
        match first_failure {
            Some(e) => Err(e),
            None => Ok(()),
        }
    });

    let elapsed = start.elapsed().as_secs_f64();
    outcome?;

    let ops_per_sec = if elapsed > 0.0 {
        ops.len() as f64 / elapsed
    } else {
        0.0
    };

    Ok(ResultRecord {
        metric_type: MetricType::Throughput,
        avg_latency_ms: None,
        p99_latency_ms: None,
        ops_per_sec: Some(ops_per_sec),
        duration_s: elapsed,
        total_ops: ops.len(),
    })
}
