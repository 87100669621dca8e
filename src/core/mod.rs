pub mod error;
pub mod types;

pub use error::{BenchError, BenchResult};
pub use types::{AbstractOperation, MetricType, OpParams, OpType, ResultRecord, TaskSpec};
