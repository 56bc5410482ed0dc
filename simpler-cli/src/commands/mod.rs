//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod players;

pub use players::PlayerCommands;

use anyhow::Result;
use clap::Subcommand;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Player jobs
    Players {
        #[command(subcommand)]
        command: PlayerCommands,
    },
}

/// Routes the command to the appropriate handler module
pub fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Players { command } => players::handle_player_command(command, config),
    }
}
