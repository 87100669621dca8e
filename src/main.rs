use anyhow::{bail, Result};
use clap::Parser;
use std::time::Duration;

use graphbench::config::Config;
use graphbench::engine::executor::{ExecutorFactory, SimulatedFactory};
use graphbench::logging;
use graphbench::runner::BenchRunner;
use graphbench::workload::{sample_ids, Synthesizer};

#[derive(Parser)]
#[clap(version = "0.1.0", author = "GraphBench Contributors")]
enum Cli {
    /// Run the configured benchmark tasks and write a JSON report
    Run {
        #[clap(short, long, default_value = "config.toml")]
        config: String,
    },
    /// Synthesize a workload and print it as JSON without executing it
    Generate {
        /// Task name, e.g. read_nbrs_latency or mixed_workload_throughput
        #[clap(short, long)]
        task: String,
        #[clap(short = 'n', long, default_value_t = 1000)]
        count: usize,
        #[clap(short, long, default_value = "config.toml")]
        config: String,
    },
}

fn build_factory(config: &Config) -> Result<Box<dyn ExecutorFactory>> {
    match config.backend.as_str() {
        "simulated" => Ok(Box::new(SimulatedFactory::new(Duration::from_micros(100)))),
        other => bail!(
            "Backend '{}' has no built-in executor; implement ExecutorFactory for it",
            other
        ),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli {
        Cli::Run { config } => {
            let config = Config::load(&config)?;
            logging::init(&config).map_err(|e| anyhow::anyhow!("Logging init failed: {}", e))?;

            let factory = build_factory(&config)?;
            let report = BenchRunner::new(&config, factory.as_ref()).run();
            report.save_json(&config.report_path)?;

            println!(
                "Benchmark finished: {} completed, {} failed, report written to {}",
                report.completed_count(),
                report.failed_count(),
                config.report_path
            );
            logging::shutdown();
        }
        Cli::Generate {
            task,
            count,
            config,
        } => {
            let config = Config::load(&config)?;
            let pool = sample_ids(&config.dataset_path, config.sample_cap);
            let mut synthesizer = Synthesizer::new(config.seed);
            let ops = synthesizer.synthesize_for_task(&task, &pool, count, None);
            println!("{}", serde_json::to_string_pretty(&ops)?);
        }
    }

    Ok(())
}
