//! Simpler CLI
//!
//! Runs the demo player jobs through the job runner from the command line.

mod commands;
mod config;
mod players;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Log filter used when RUST_LOG is unset
const DEFAULT_LOG_FILTER: &str = "simpler=info,simpler_core=info,simpler_runner=info";

#[derive(Parser)]
#[command(name = "simpler")]
#[command(about = "Run Simpler jobs from the command line", long_about = None)]
struct Cli {
    /// Runner identifier stamped on run reports
    #[arg(long, env = "SIMPLER_RUNNER_ID")]
    runner_id: Option<String>,

    /// Do not log each injected sub-job
    #[arg(long)]
    quiet_injection: bool,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    // Logs go to stderr so --json output stays clean
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = Config::load(cli.runner_id, cli.quiet_injection)?;

    handle_command(cli.command, &config)
}
