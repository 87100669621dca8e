//! Executor seams between the engine and backend-specific code.
//!
//! The engine never sees a wire protocol. It depends on two capabilities:
//! `OperationExecutor` (compile + one blocking execute call) and
//! `ExecutorFactory` (one independent execution context per worker).

use crate::core::{AbstractOperation, BenchError, BenchResult, OpParams, OpType};
use std::collections::HashMap;
use std::thread;
use std::time::Duration;

/// A backend-native command compiled from one abstract operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledOp {
    pub op_type: OpType,
    /// Command text (Cypher/Gremlin/AQL/...), parameter placeholders included.
    pub text: String,
    pub params: HashMap<String, String>,
}

/// Translates abstract operations into backend-native commands, one method
/// per operation-type variant. `compile` dispatches over the tagged union.
pub trait OperationCompiler {
    fn read_nbrs(&self, id: &str) -> CompiledOp;
    fn add_node(&self, id: &str) -> CompiledOp;
    fn del_node(&self, id: &str) -> CompiledOp;
    fn add_edge(&self, src: &str, dst: &str) -> CompiledOp;
    fn del_edge(&self, src: &str, dst: &str) -> CompiledOp;

    fn compile(&self, op: &AbstractOperation) -> BenchResult<CompiledOp> {
        match (&op.op_type, &op.params) {
            (OpType::ReadNbrs, OpParams::Node { id }) => Ok(self.read_nbrs(id)),
            (OpType::AddNode, OpParams::Node { id }) => Ok(self.add_node(id)),
            (OpType::DelNode, OpParams::Node { id }) => Ok(self.del_node(id)),
            (OpType::AddEdge, OpParams::Edge { src, dst }) => Ok(self.add_edge(src, dst)),
            (OpType::DelEdge, OpParams::Edge { src, dst }) => Ok(self.del_edge(src, dst)),
            _ => Err(BenchError::Execution(format!(
                "parameter shape does not match operation type {}",
                op.op_type
            ))),
        }
    }
}

/// One execution context against the backend. Contexts are owned by exactly
/// one caller at a time; concurrent workers each get their own.
pub trait OperationExecutor: Send {
    /// Translates an abstract operation into backend-native form. Callers
    /// finish compilation before starting any timer.
    fn compile(&self, op: &AbstractOperation) -> BenchResult<CompiledOp>;

    /// Runs one compiled operation to completion. This is the only call the
    /// latency engine times.
    fn execute(&mut self, op: &CompiledOp) -> BenchResult<()>;
}

/// Creates execution contexts. The throughput engine creates one context per
/// chunk, hands it to that chunk's worker exclusively, and drops it when the
/// chunk finishes.
pub trait ExecutorFactory: Sync {
    fn create(&self) -> BenchResult<Box<dyn OperationExecutor>>;
}

/// In-process executor that models a backend with a fixed per-operation cost.
/// Used by the dry-run CLI path and by tests that need deterministic timing.
pub struct SimulatedExecutor {
    delay: Duration,
    executed: usize,
}

impl SimulatedExecutor {
    pub fn new(delay: Duration) -> Self {
        Self { delay, executed: 0 }
    }

    pub fn executed(&self) -> usize {
        self.executed
    }
}

impl OperationExecutor for SimulatedExecutor {
    fn compile(&self, op: &AbstractOperation) -> BenchResult<CompiledOp> {
        let mut params = HashMap::new();
        match &op.params {
            OpParams::Node { id } => {
                params.insert("id".to_string(), id.clone());
            }
            OpParams::Edge { src, dst } => {
                params.insert("src".to_string(), src.clone());
                params.insert("dst".to_string(), dst.clone());
            }
        }
        Ok(CompiledOp {
            op_type: op.op_type,
            text: format!("SIMULATE {}", op.op_type),
            params,
        })
    }

    fn execute(&mut self, _op: &CompiledOp) -> BenchResult<()> {
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
        self.executed += 1;
        Ok(())
    }
}

/// Factory handing out independent simulated contexts.
pub struct SimulatedFactory {
    delay: Duration,
}

impl SimulatedFactory {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl ExecutorFactory for SimulatedFactory {
    fn create(&self) -> BenchResult<Box<dyn OperationExecutor>> {
        Ok(Box::new(SimulatedExecutor::new(self.delay)))
    }
}
