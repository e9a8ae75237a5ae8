//! Error types for audit-blocks

use crate::scanner::BlockKind;

/// Result type for audit-blocks operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while scanning block markers
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Mismatched {kind} tags: {opens} openings vs {closes} closings")]
    TagMismatch {
        kind: BlockKind,
        opens: usize,
        closes: usize,
    },

    #[error("Nested {kind} block at line {line}: previous block has not closed")]
    NestedBlock { kind: BlockKind, line: usize },

    #[error("Closing {kind} tag at line {line} has no open block")]
    DanglingClose { kind: BlockKind, line: usize },
}
