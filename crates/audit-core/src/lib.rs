//! Selective block removal and listing for Audit Manager
//!
//! Given an audit file and a set of match criteria, removes every item
//! block whose `description` or `name` field matches, and optionally
//! every report block whose `description` matches. The original file is
//! preserved verbatim at `<path>.backup` before any rewrite; the edited
//! document is rewritten atomically.
//!
//! The operation order is validate → backup → rewrite: a structurally
//! broken document (mismatched or nested markers) aborts before any file
//! is touched.

pub mod error;
pub mod listing;
pub mod normalize;
pub mod options;
pub mod remove;

pub use audit_fs::{BACKUP_SUFFIX, backup_path};
pub use error::{Error, Result};
pub use listing::{BlockSummary, Listing, list_blocks, list_text};
pub use normalize::collapse_blank_lines;
pub use options::RemoveOptions;
pub use remove::{RemoveOutcome, remove_blocks, remove_from_text};
