//! Filesystem layer for Audit Manager
//!
//! Whole-file reads and atomic writes for audit files, plus the sibling
//! backup copy written before a file is rewritten.

pub mod constants;
pub mod error;
pub mod io;

pub use constants::{BACKUP_SUFFIX, backup_path};
pub use error::{Error, Result};
pub use io::{read_text, write_backup, write_text};
