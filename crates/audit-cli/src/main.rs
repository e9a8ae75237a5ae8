//! Audit Manager CLI
//!
//! The command-line interface for removing and inspecting blocks in
//! audit-definition files.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    // Execute command
    match cli.command {
        Some(cmd) => execute_command(cmd),
        None => {
            // No command provided - show help hint
            println!("{} Audit Manager CLI", "auditctl".green().bold());
            println!();
            println!("Run {} for available commands.", "auditctl --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Remove {
            file,
            descriptions,
            names,
            reports,
            ignore_case,
            dry_run,
            json,
        } => {
            let opts = audit_core::RemoveOptions {
                descriptions,
                names,
                remove_reports: reports,
                ignore_case,
            };
            commands::run_remove(&file, &opts, dry_run, json)
        }
        Commands::List { file, json } => commands::run_list(&file, json),
        Commands::Completions { shell } => commands::run_completions(shell),
    }
}
