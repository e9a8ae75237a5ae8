//! List command for audit blocks

use colored::Colorize;
use std::path::Path;

use audit_core::{Listing, list_blocks};

use crate::error::Result;

/// Run the list command
pub fn run_list(file: &Path, json: bool) -> Result<()> {
    let listing = list_blocks(file)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }

    println!("{} {}", "Audit blocks in".bold(), file.display());
    println!();
    render_listing(&listing);
    Ok(())
}

/// Print a listing in the human-readable layout shared by `list` and the
/// before/after output of `remove`.
pub fn render_listing(listing: &Listing) {
    if !listing.items.is_empty() {
        println!("{}:", "Items".cyan().bold());
        for (i, item) in listing.items.iter().enumerate() {
            let name = item.name.as_deref().unwrap_or("<no name>");
            println!("  {:>3}. {} {}", i + 1, name.green(), format!("(line {})", item.line).dimmed());
            if let Some(desc) = &item.description {
                println!("       {desc}");
            }
        }
        println!();
    }

    if !listing.reports.is_empty() {
        println!("{}:", "Reports".cyan().bold());
        for (i, report) in listing.reports.iter().enumerate() {
            let desc = report.description.as_deref().unwrap_or("<no description>");
            println!("  {:>3}. {} {}", i + 1, desc, format!("(line {})", report.line).dimmed());
        }
        println!();
    }

    println!(
        "{} {} items, {} reports",
        "Total:".dimmed(),
        listing.item_count(),
        listing.report_count()
    );
}
