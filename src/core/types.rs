//! Core value types shared across the workload generator, the execution
//! engine and the reporting layer.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// The five abstract graph operations the benchmark understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OpType {
    #[serde(rename = "READ_NBRS")]
    ReadNbrs,
    #[serde(rename = "ADD_NODE")]
    AddNode,
    #[serde(rename = "DEL_NODE")]
    DelNode,
    #[serde(rename = "ADD_EDGE")]
    AddEdge,
    #[serde(rename = "DEL_EDGE")]
    DelEdge,
}

impl OpType {
    /// Canonical wire name, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            OpType::ReadNbrs => "READ_NBRS",
            OpType::AddNode => "ADD_NODE",
            OpType::DelNode => "DEL_NODE",
            OpType::AddEdge => "ADD_EDGE",
            OpType::DelEdge => "DEL_EDGE",
        }
    }

    /// Whether the operation targets a single node (as opposed to an edge).
    pub fn is_node_op(&self) -> bool {
        matches!(self, OpType::ReadNbrs | OpType::AddNode | OpType::DelNode)
    }
}

impl fmt::Display for OpType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Operation parameters: node operations carry one id, edge operations carry
/// a source and a destination endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OpParams {
    Node { id: String },
    Edge { src: String, dst: String },
}

/// One backend-independent benchmark action. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbstractOperation {
    #[serde(rename = "type")]
    pub op_type: OpType,
    pub params: OpParams,
}

impl AbstractOperation {
    pub fn node(op_type: OpType, id: impl Into<String>) -> Self {
        Self {
            op_type,
            params: OpParams::Node { id: id.into() },
        }
    }

    pub fn edge(op_type: OpType, src: impl Into<String>, dst: impl Into<String>) -> Self {
        Self {
            op_type,
            params: OpParams::Edge {
                src: src.into(),
                dst: dst.into(),
            },
        }
    }
}

/// Measurement discipline a task ran under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricType {
    Latency,
    Throughput,
}

/// Canonical performance record produced for every completed task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub metric_type: MetricType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_latency_ms: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub p99_latency_ms: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ops_per_sec: Option<f64>,
    pub duration_s: f64,
    pub total_ops: usize,
}

impl ResultRecord {
    /// A duration-only record, used when a task reports nothing richer than
    /// elapsed wall-clock time.
    pub fn from_duration(duration_s: f64, total_ops: usize) -> Self {
        Self {
            metric_type: MetricType::Throughput,
            avg_latency_ms: None,
            p99_latency_ms: None,
            ops_per_sec: None,
            duration_s,
            total_ops,
        }
    }
}

/// Describes one benchmark task from the configuration. The task name selects
/// both the operation type and the measurement mode by convention, e.g.
/// `read_nbrs_latency` or `mixed_workload_throughput`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskSpec {
    pub name: String,
    pub op_count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ratios: Option<HashMap<String, f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub concurrency: Option<usize>,
}

impl TaskSpec {
    pub fn new(name: impl Into<String>, op_count: usize) -> Self {
        Self {
            name: name.into(),
            op_count,
            ratios: None,
            concurrency: None,
        }
    }

    /// Tasks run in latency mode unless the name asks for throughput.
    pub fn metric_type(&self) -> MetricType {
        if self.name.contains("throughput") {
            MetricType::Throughput
        } else {
            MetricType::Latency
        }
    }
}
