//! Player command handlers
//!
//! Each command builds a root job, hands it to a `JobRunner` and prints the
//! job's output together with the run report.

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::*;
use simpler_core::{InJob, Tracked};
use simpler_runner::{JobRunner, RunReport};

use crate::config::Config;
use crate::players::{Player, Roster, Show, show};

/// Player subcommands
#[derive(Subcommand)]
pub enum PlayerCommands {
    /// Show a single player by running the Show job
    Show {
        /// Player id
        id: u32,

        /// Print output and run report as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the ids available in the demo roster
    Ids,
}

/// Handle player commands
pub fn handle_player_command(command: PlayerCommands, config: &Config) -> Result<()> {
    match command {
        PlayerCommands::Show { id, json } => show_player(config, id, json),
        PlayerCommands::Ids => list_ids(),
    }
}

fn show_player(config: &Config, player_id: u32, json: bool) -> Result<()> {
    let runner = JobRunner::new(config.runner.clone());

    let mut job = Tracked::new(Show::default());
    job.set_input(show::In { player_id });

    let (output, report) = runner
        .run_to_output(&mut job)
        .with_context(|| format!("Failed to show player {}", player_id))?;

    if json {
        let body = serde_json::json!({
            "output": output,
            "report": report,
        });
        println!("{}", serde_json::to_string_pretty(&body)?);
        return Ok(());
    }

    match &output.player {
        Some(player) => print_player(player),
        None => println!(
            "{}",
            format!("No player with id {}.", player_id).yellow()
        ),
    }
    println!();
    print_report(&report);

    Ok(())
}

fn list_ids() -> Result<()> {
    let roster = Roster::seeded();
    println!("{}", "Demo roster:".bold());
    for player in roster.players() {
        println!("  {} {}", format!("{:>3}", player.id).cyan(), player.name);
    }
    Ok(())
}

fn print_player(player: &Player) {
    println!("{}", player.name.bold());
    println!("  {}: {}", "Id".dimmed(), player.id);
    println!("  {}: {}", "Team".dimmed(), player.team);
}

fn print_report(report: &RunReport) {
    println!("{}", "Run".bold());
    println!("  {}: {}", "Run ID".dimmed(), report.run_id);
    println!("  {}: {}", "Runner".dimmed(), report.runner_id);
    println!("  {}: {}", "Job".dimmed(), report.job_type);
    println!(
        "  {}: {}",
        "State".dimmed(),
        format!("{:?}", report.state).green()
    );
    println!(
        "  {}: {} ms",
        "Duration".dimmed(),
        report.duration().num_milliseconds()
    );

    if report.injected.is_empty() {
        println!("  {}: {}", "Injected".dimmed(), "none".dimmed());
    } else {
        println!("  {}:", "Injected".dimmed());
        for entry in report.injected.entries() {
            println!("    {} {}", entry.member.cyan(), entry.job_type);
        }
    }
}
