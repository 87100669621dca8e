//! GraphBench - A workload-driven benchmark harness for graph databases
//!
//! This crate samples valid entity ids from an edge-list dataset, synthesizes
//! reproducible sequences of abstract graph operations, and drives them
//! against a backend executor under sequential latency or concurrent
//! throughput measurement, producing a canonical performance report.

pub mod backends;
pub mod config;
pub mod core;
pub mod engine;
pub mod logging;
pub mod metrics;
pub mod runner;
pub mod workload;
