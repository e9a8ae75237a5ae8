//! Command implementations for audit-cli

pub mod completions;
pub mod list;
pub mod remove;

pub use completions::run_completions;
pub use list::{render_listing, run_list};
pub use remove::run_remove;
