//! Task runner: ties sampling, synthesis, the execution engine and the
//! report together for one benchmark run.
//!
//! The ID pool is built once per dataset per run. Tasks run in configuration
//! order; a failed task is recorded in the report and the run moves on, so
//! completed results are never lost.

pub mod report;

use crate::config::Config;
use crate::core::{BenchResult, MetricType, ResultRecord, TaskSpec};
use crate::engine::executor::ExecutorFactory;
use crate::engine::{latency, throughput};
use crate::metrics::{self, RawMeasurement};
use crate::workload::{sample_ids, IdPool, Synthesizer};
use log::{error, info};
use report::RunReport;
use std::time::Instant;

pub struct BenchRunner<'a> {
    config: &'a Config,
    factory: &'a dyn ExecutorFactory,
}

impl<'a> BenchRunner<'a> {
    pub fn new(config: &'a Config, factory: &'a dyn ExecutorFactory) -> Self {
        Self { config, factory }
    }

    /// Executes every configured task and returns the assembled report.
    pub fn run(&self) -> RunReport {
        let pool = sample_ids(&self.config.dataset_path, self.config.sample_cap);
        info!(
            "Sampled {} ids from {}",
            pool.len(),
            self.config.dataset_path
        );

        let mut synthesizer = Synthesizer::new(self.config.seed);
        let mut report = RunReport::new(&self.config.backend, &self.config.dataset_path);

        for task in &self.config.tasks {
            info!("Task {} started ({} ops)", task.name, task.op_count);
            let started = Instant::now();

            match self.run_task(task, &pool, &mut synthesizer) {
                Ok(record) => {
                    let record =
                        metrics::normalize(RawMeasurement::Record(record), started.elapsed(), task.op_count);
                    info!(
                        "Task {} completed in {:.4}s",
                        task.name,
                        started.elapsed().as_secs_f64()
                    );
                    report.push_completed(&task.name, record);
                }
                Err(e) => {
                    error!("Task {} failed: {}", task.name, e);
                    report.push_failed(&task.name, e.to_string());
                }
            }
        }

        report
    }

    fn run_task(
        &self,
        task: &TaskSpec,
        pool: &IdPool,
        synthesizer: &mut Synthesizer,
    ) -> BenchResult<ResultRecord> {
        let ops =
            synthesizer.synthesize_for_task(&task.name, pool, task.op_count, task.ratios.as_ref());

        match task.metric_type() {
            MetricType::Latency => {
                let mut ctx = self.factory.create()?;
                latency::run_latency(&ops, ctx.as_mut())
            }
            MetricType::Throughput => {
                throughput::run_throughput(&ops, self.factory, self.config.concurrency_for(task))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::executor::SimulatedFactory;
    use std::time::Duration;

    #[test]
    fn test_run_produces_one_outcome_per_task() {
        let mut config = Config::default();
        config.dataset_path = "/nonexistent/graph.csv".to_string(); // fallback pool
        config.tasks = vec![
            TaskSpec::new("read_nbrs_latency", 20),
            TaskSpec::new("add_edges_throughput", 20),
        ];

        let factory = SimulatedFactory::new(Duration::ZERO);
        let report = BenchRunner::new(&config, &factory).run();

        assert_eq!(report.results.len(), 2);
        assert_eq!(report.completed_count(), 2);
        assert_eq!(report.results[0].task, "read_nbrs_latency");
    }
}
