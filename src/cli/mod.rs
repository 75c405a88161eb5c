//! Command-line interface for `recollfox`.
//!
//! This module provides the CLI parsing and command routing using clap.

pub mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::logging;

/// `recollfox` - Incremental Firefox history exporter for Recoll.
#[derive(Parser, Debug)]
#[command(name = "recollfox")]
#[command(
    author,
    version,
    about = "Export new Firefox history entries into the Recoll web queue",
    long_about = None,
    after_help = "Designed for unattended runs (cron/systemd timer); each run \
                  exports only entries newer than the committed watermark."
)]
pub struct Cli {
    /// Output format: text (default) or json
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to places.sqlite (skips profile discovery)
    #[arg(long, global = true, value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// Recoll web queue directory
    #[arg(long, global = true, env = "RECOLL_WEBQUEUE", value_name = "DIR")]
    pub queue_dir: Option<PathBuf>,

    /// Watermark checkpoint file
    #[arg(long, global = true, env = "RECOLLFOX_STATE_FILE", value_name = "PATH")]
    pub state_file: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run one export pass (the default when no command is given)
    Export,

    /// Show resolved configuration and the current watermark
    Status,

    /// Check profile discovery, source store, queue, and checkpoint
    Doctor,
}

/// Run the CLI.
///
/// # Errors
///
/// Returns an error if the command fails to execute.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose, cli.quiet)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))?;

    let config = Config::resolve(cli.db, cli.queue_dir, cli.state_file)?;

    match cli.command.unwrap_or(Commands::Export) {
        Commands::Export => commands::export::execute(&config, cli.json)?,
        Commands::Status => commands::status::execute(&config, cli.json)?,
        Commands::Doctor => commands::doctor::execute(&config, cli.json)?,
    }

    Ok(())
}
