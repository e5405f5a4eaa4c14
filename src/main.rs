//! fanout-bench - fan a list of URLs out across a fixed worker pool

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // Logs go to stderr so the report on stdout stays clean
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let outcome = cli.run().await?;

    println!("\nStatistics:");
    print!("{}", outcome.report());

    if outcome.is_interrupted() {
        // In-flight workers are abandoned, not drained
        std::process::exit(outcome.exit_code());
    }

    Ok(())
}
