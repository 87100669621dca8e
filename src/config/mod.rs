use crate::core::{BenchResult, TaskSpec};
use crate::workload::DEFAULT_SAMPLE_CAP;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Benchmark run configuration, loaded from a TOML file.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    /// Backend name recorded in the report (e.g. "neo4j", "simulated").
    pub backend: String,
    pub host: String,
    pub port: u16,
    pub password: String,
    /// Edge-list dataset the ID pool is sampled from.
    pub dataset_path: String,
    /// Maximum number of distinct ids sampled into the pool.
    pub sample_cap: usize,
    /// Seed for the synthesizer RNG; identical seeds reproduce identical
    /// operation sequences.
    pub seed: u64,
    /// Worker count for throughput tasks that do not set their own.
    pub default_concurrency: usize,
    pub report_path: String,
    pub log_level: String,
    pub log_dir: String,
    pub log_file: String,
    pub max_log_file_size: u64,
    pub max_log_files: usize,
    #[serde(default)]
    pub tasks: Vec<TaskSpec>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: "simulated".to_string(),
            host: "127.0.0.1".to_string(),
            port: 7687,
            password: String::new(),
            dataset_path: "data/graph.csv".to_string(),
            sample_cap: DEFAULT_SAMPLE_CAP,
            seed: 42,
            default_concurrency: 8,
            report_path: "report.json".to_string(),
            log_level: "info".to_string(),
            log_dir: "logs".to_string(),
            log_file: "graphbench".to_string(),
            max_log_file_size: 100 * 1024 * 1024, // 100MB
            max_log_files: 5,
            tasks: vec![
                TaskSpec::new("read_nbrs_latency", 1000),
                TaskSpec::new("read_nbrs_throughput", 1000),
            ],
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> BenchResult<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> BenchResult<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Effective concurrency for a task: task override first, then the
    /// run-wide default, floored at one worker.
    pub fn concurrency_for(&self, task: &TaskSpec) -> usize {
        task.concurrency.unwrap_or(self.default_concurrency).max(1)
    }
}
