use graphbench::core::{AbstractOperation, BenchError, BenchResult, MetricType, OpType};
use graphbench::engine::executor::{
    CompiledOp, ExecutorFactory, OperationExecutor, SimulatedExecutor, SimulatedFactory,
};
use graphbench::engine::{chunk_ops, run_latency, run_throughput};
use std::time::Duration;

fn read_ops(n: usize) -> Vec<AbstractOperation> {
    (0..n)
        .map(|i| AbstractOperation::node(OpType::ReadNbrs, i.to_string()))
        .collect()
}

#[test]
fn test_latency_scenario_small_run() {
    // Scenario A: 3 operations at ~10ms each. Average reflects the stub
    // cost, p99 stays 0 because the sample is too small, totals add up.
    let mut exec = SimulatedExecutor::new(Duration::from_millis(10));
    let record = run_latency(&read_ops(3), &mut exec).expect("latency run");

    assert_eq!(record.metric_type, MetricType::Latency);
    assert_eq!(record.total_ops, 3);
    assert_eq!(record.p99_latency_ms, Some(0.0));

    let avg = record.avg_latency_ms.expect("avg present");
    assert!(avg >= 10.0 && avg < 25.0, "avg {}ms outside noise band", avg);
}

#[test]
fn test_latency_p99_reported_at_hundred_samples() {
    let mut exec = SimulatedExecutor::new(Duration::from_millis(1));
    let record = run_latency(&read_ops(100), &mut exec).expect("latency run");
    let p99 = record.p99_latency_ms.expect("p99 present");
    assert!(p99 >= 1.0, "p99 {}ms should reflect the stub cost", p99);
}

#[test]
fn test_throughput_scenario_parallel_speedup() {
    // Scenario C: 100 ops, 4 workers, 5ms per op executed sequentially
    // inside each worker. Expected elapsed ~= 25 * 5ms = 125ms, far below
    // the 500ms a sequential run would take.
    let factory = SimulatedFactory::new(Duration::from_millis(5));
    let record = run_throughput(&read_ops(100), &factory, 4).expect("throughput run");

    assert_eq!(record.total_ops, 100);
    assert!(
        record.duration_s < 0.35,
        "elapsed {:.3}s shows no parallelism",
        record.duration_s
    );

    let ops_per_sec = record.ops_per_sec.expect("ops_per_sec present");
    assert!(
        ops_per_sec > 285.0,
        "throughput {:.1} ops/s is below the concurrent floor",
        ops_per_sec
    );
}

#[test]
fn test_chunk_partition_property() {
    for n in [1usize, 7, 100, 101, 1000] {
        for k in [1usize, 3, 8, 16] {
            let ops = read_ops(n);
            let chunks = chunk_ops(&ops, k);
            let expected_size = n.div_ceil(k);

            for chunk in chunks.iter().take(chunks.len().saturating_sub(1)) {
                assert_eq!(chunk.len(), expected_size);
            }
            let rebuilt: Vec<AbstractOperation> =
                chunks.iter().flat_map(|c| c.iter().cloned()).collect();
            assert_eq!(rebuilt, ops, "n={} k={}", n, k);
        }
    }
}

struct PoisonedFactory;

struct PoisonedExecutor;

impl OperationExecutor for PoisonedExecutor {
    fn compile(&self, op: &AbstractOperation) -> BenchResult<CompiledOp> {
        SimulatedExecutor::new(Duration::ZERO).compile(op)
    }

    fn execute(&mut self, op: &CompiledOp) -> BenchResult<()> {
        if op.params.get("id").map(String::as_str) == Some("13") {
            Err(BenchError::Execution("poisoned operation".to_string()))
        } else {
            Ok(())
        }
    }
}

impl ExecutorFactory for PoisonedFactory {
    fn create(&self) -> BenchResult<Box<dyn OperationExecutor>> {
        Ok(Box::new(PoisonedExecutor))
    }
}

#[test]
fn test_throughput_propagates_worker_failure() {
    let err = run_throughput(&read_ops(40), &PoisonedFactory, 4).expect_err("must fail");
    assert!(matches!(err, BenchError::Execution(_)));
}

#[test]
fn test_latency_aborts_on_poisoned_operation() {
    let mut exec = PoisonedExecutor;
    let err = run_latency(&read_ops(40), &mut exec).expect_err("must fail");
    assert!(matches!(err, BenchError::Execution(_)));
}

#[test]
fn test_empty_sequence_yields_zero_rates() {
    let factory = SimulatedFactory::new(Duration::ZERO);
    let record = run_throughput(&[], &factory, 4).expect("empty run");
    assert_eq!(record.total_ops, 0);

    let mut exec = SimulatedExecutor::new(Duration::ZERO);
    let record = run_latency(&[], &mut exec).expect("empty run");
    assert_eq!(record.avg_latency_ms, Some(0.0));
}
