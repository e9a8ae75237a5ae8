//! CLI argument parsing using clap derive

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Audit Manager - Remove and inspect blocks in audit-definition files
#[derive(Parser, Debug)]
#[command(name = "auditctl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Remove matching item and report blocks from an audit file
    ///
    /// Writes a verbatim backup to <FILE>.backup before rewriting.
    ///
    /// Examples:
    ///   auditctl remove rhel8.audit -n passwd_duplicate_username
    ///   auditctl remove rhel8.audit -d "6.2.6 Ensure no duplicate user names exist"
    ///   auditctl remove rhel8.audit -d "..." --reports
    ///   auditctl remove rhel8.audit -n foo --dry-run
    Remove {
        /// Path to the audit file
        file: PathBuf,

        /// Target description value (repeatable)
        #[arg(short, long = "description", value_name = "DESC")]
        descriptions: Vec<String>,

        /// Target name value, items only (repeatable)
        #[arg(short, long = "name", value_name = "NAME")]
        names: Vec<String>,

        /// Also remove report blocks whose description matches
        #[arg(long)]
        reports: bool,

        /// Compare criteria case-insensitively
        #[arg(long)]
        ignore_case: bool,

        /// Preview removal counts without writing any file
        #[arg(long)]
        dry_run: bool,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// List all item and report blocks with their key fields
    List {
        /// Path to the audit file
        file: PathBuf,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}
