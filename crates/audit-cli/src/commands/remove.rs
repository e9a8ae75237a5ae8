//! Remove command for audit blocks

use colored::Colorize;
use std::path::Path;

use audit_core::{RemoveOptions, backup_path, list_blocks, remove_blocks};

use crate::commands::render_listing;
use crate::error::{CliError, Result};

/// Run the remove command
pub fn run_remove(file: &Path, opts: &RemoveOptions, dry_run: bool, json: bool) -> Result<()> {
    if opts.descriptions.is_empty() && opts.names.is_empty() {
        return Err(CliError::user(
            "no criteria given: pass at least one --description or --name",
        ));
    }

    if json {
        let outcome = remove_blocks(file, opts, dry_run)?;
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    println!("{}", "Blocks before removal:".bold());
    render_listing(&list_blocks(file)?);
    println!();

    let outcome = remove_blocks(file, opts, dry_run)?;

    let verb = if dry_run { "Would remove" } else { "Removed" };
    if opts.remove_reports {
        println!(
            "{} {} items, {} reports",
            verb.green().bold(),
            outcome.items_removed,
            outcome.reports_removed
        );
    } else {
        println!("{} {} items", verb.green().bold(), outcome.items_removed);
    }

    if dry_run {
        println!("{}", "Dry run: no files were written.".dimmed());
        return Ok(());
    }

    println!(
        "{} {}",
        "Backup written to".dimmed(),
        backup_path(file).display()
    );
    println!();
    println!("{}", "Blocks after removal:".bold());
    render_listing(&list_blocks(file)?);
    Ok(())
}
