//! Execution engine: drives generated operation sequences against a backend
//! executor under one of two measurement disciplines.

pub mod executor;
pub mod latency;
pub mod throughput;

pub use executor::{
    CompiledOp, ExecutorFactory, OperationCompiler, OperationExecutor, SimulatedExecutor,
    SimulatedFactory,
};
pub use latency::{run_latency, P99_MIN_SAMPLES};
pub use throughput::{chunk_ops, run_throughput};
