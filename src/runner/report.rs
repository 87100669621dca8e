//! Run-level report: one outcome per task plus run metadata, serialized to
//! JSON for downstream tooling.

use crate::core::{BenchResult, ResultRecord};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskOutcome {
    pub task: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<ResultRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TaskOutcome {
    pub fn succeeded(&self) -> bool {
        self.record.is_some()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub backend: String,
    pub dataset: String,
    pub started_at: String,
    pub os: String,
    pub arch: String,
    pub cpus: usize,
    pub results: Vec<TaskOutcome>,
}

impl RunReport {
    pub fn new(backend: &str, dataset: &str) -> Self {
        Self {
            backend: backend.to_string(),
            dataset: dataset.to_string(),
            started_at: Utc::now().to_rfc3339(),
            os: std::env::consts::OS.to_string(),
            arch: std::env::consts::ARCH.to_string(),
            cpus: num_cpus::get(),
            results: Vec::new(),
        }
    }

    pub fn push_completed(&mut self, task: &str, record: ResultRecord) {
        self.results.push(TaskOutcome {
            task: task.to_string(),
            record: Some(record),
            error: None,
        });
    }

    pub fn push_failed(&mut self, task: &str, error: String) {
        self.results.push(TaskOutcome {
            task: task.to_string(),
            record: None,
            error: Some(error),
        });
    }

    pub fn completed_count(&self) -> usize {
        self.results.iter().filter(|r| r.succeeded()).count()
    }

    pub fn failed_count(&self) -> usize {
        self.results.len() - self.completed_count()
    }

    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> BenchResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}
