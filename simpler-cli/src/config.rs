//! Configuration module
//!
//! Builds the runner configuration from the environment and CLI flags.

use anyhow::{Context, Result};
use simpler_runner::RunnerConfig;
use tracing::debug;

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Configuration handed to every job runner the CLI creates
    pub runner: RunnerConfig,
}

impl Config {
    /// Loads the runner configuration, letting explicit flags win
    ///
    /// A missing runner id falls back to a generated one. An invalid
    /// environment setting is reported as an error.
    pub fn load(runner_id: Option<String>, quiet_injection: bool) -> Result<Self> {
        let mut runner = RunnerConfig::from_env_or_default(runner_id)
            .context("Invalid runner configuration")?;

        if quiet_injection {
            runner.trace_injection = false;
        }

        runner.validate()?;
        debug!("Runner configuration: {:?}", runner);
        Ok(Self { runner })
    }
}
