//! Unified error handling for graphbench.
//!
//! Generation-time problems (unreadable datasets, unresolvable ratio keys) are
//! recovered locally with documented fallbacks and never surface here.
//! Execution-time failures propagate to the task runner, which records the
//! task as failed and moves on to the next one.

use thiserror::Error;

/// Unified benchmark error type
#[derive(Error, Debug)]
pub enum BenchError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Operation execution failed: {0}")]
    Execution(String),

    #[error("Worker thread panicked while executing chunk {0}")]
    WorkerPanic(usize),
}

/// Unified result type
pub type BenchResult<T> = Result<T, BenchError>;

impl From<toml::de::Error> for BenchError {
    fn from(e: toml::de::Error) -> Self {
        BenchError::Config(e.to_string())
    }
}

impl From<toml::ser::Error> for BenchError {
    fn from(e: toml::ser::Error) -> Self {
        BenchError::Serialization(e.to_string())
    }
}

impl From<serde_json::Error> for BenchError {
    fn from(e: serde_json::Error) -> Self {
        BenchError::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_execution_error_display() {
        let err = BenchError::Execution("connection reset".to_string());
        assert_eq!(
            err.to_string(),
            "Operation execution failed: connection reset"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: BenchError = io.into();
        assert!(matches!(err, BenchError::Io(_)));
    }
}
