//! CLI argument parsing and run wiring

use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use fanout_core::{
    read_targets, Coordinator, HttpFetcher, InterruptListener, RunConfig, RunOutcome, WorkItem,
};

/// Fan a list of URLs out across a fixed worker pool and report per-worker counts
///
/// Targets are read one per line from stdin (or --input) until end of input.
/// Ctrl+C or SIGTERM prints the counts gathered so far and exits with status 1.
#[derive(Parser, Debug)]
#[command(name = "fanout-bench")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Number of workers (defaults to the host's available parallelism)
    #[arg(short, long, env = "FANOUT_WORKERS")]
    pub workers: Option<usize>,

    /// Read targets from this file instead of stdin
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Run configuration derived from the arguments
    pub fn config(&self) -> RunConfig {
        match self.workers {
            Some(workers) => RunConfig::new(workers),
            None => RunConfig::from_host(),
        }
    }

    /// Read the target list from the input file or stdin
    pub fn load_targets(&self) -> Result<Vec<WorkItem>> {
        load_targets(self.input.as_deref())
    }

    /// Read targets and run them through the coordinator
    ///
    /// The interrupt listener is installed before any input is read, so a
    /// signal during the read still yields an empty report.
    pub async fn run(&self) -> Result<RunOutcome> {
        let mut listener =
            InterruptListener::install().context("Failed to install interrupt listener")?;

        let config = self.config();
        tracing::info!("number of workers: {}", config.workers);

        let coordinator = Coordinator::new(config, Arc::new(HttpFetcher::new()))
            .context("Invalid run configuration")?;

        let input = self.input.clone();
        let reader = tokio::task::spawn_blocking(move || load_targets(input.as_deref()));

        let targets = tokio::select! {
            targets = reader => targets.context("Target reader task failed")??,
            _ = listener.recv() => {
                tracing::info!("Interrupted while reading targets");
                return Ok(RunOutcome::interrupted_before_dispatch());
            }
        };
        tracing::info!("Loaded {} targets", targets.len());

        let outcome = coordinator.run_until(targets, listener.recv()).await?;
        Ok(outcome)
    }
}

/// Read targets from `path`, or from stdin when no path is given
fn load_targets(path: Option<&Path>) -> Result<Vec<WorkItem>> {
    match path {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open input file: {}", path.display()))?;
            read_targets(BufReader::new(file))
                .with_context(|| format!("Failed to read targets from: {}", path.display()))
        }
        None => read_targets(io::stdin().lock()).context("Failed to read targets from stdin"),
    }
}
