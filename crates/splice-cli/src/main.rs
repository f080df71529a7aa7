//! splice CLI
//!
//! Applies, removes and inspects generated blocks in native project files.

mod cli;
mod commands;
mod context;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use context::Project;
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{}: failed to set up logging: {e}", "warning".yellow());
    }
    tracing::debug!(config = %cli.config.display(), "Starting");

    match cli.command {
        Commands::Apply { dry_run } => {
            let project = Project::load(&cli.config, cli.root.as_deref())?;
            commands::run_apply(&project, dry_run)
        }
        Commands::Remove { tags, dry_run } => {
            let project = Project::load(&cli.config, cli.root.as_deref())?;
            commands::run_remove(&project, &tags, dry_run)
        }
        Commands::Status { json } => {
            let project = Project::load(&cli.config, cli.root.as_deref())?;
            commands::run_status(&project, json)
        }
        Commands::Blocks { file, json } => {
            let root = context::resolve_root(&cli.config, cli.root.as_deref());
            commands::run_blocks(&root.join(file), json)
        }
    }
}
