//! Block scanning for audit-definition files.
//!
//! Audit files are flat text documents containing delimited blocks:
//!
//! ```text
//! <item>
//! name        : "passwd_duplicate_username"
//! description : "6.2.6 Ensure no duplicate user names exist"
//! </item>
//! ```
//!
//! Item blocks open with `<item>` or `<custom_item>` followed by a newline
//! and close with `</item>` or `</custom_item>`. Report blocks open with
//! `<report type:"...">` and close with `</report>`. Blocks of the same
//! kind never nest; a document that nests or mispairs them is rejected
//! with a typed error rather than silently mispaired.

pub mod error;
pub mod fields;
pub mod scanner;

pub use error::{Error, Result};
pub use fields::{description, field_value, name};
pub use scanner::{Block, BlockKind, scan_items, scan_reports};
