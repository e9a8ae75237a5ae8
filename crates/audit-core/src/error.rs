//! Error types for audit-core

/// Result type for audit-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in audit-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Structural fault in the document's block markers
    #[error(transparent)]
    Blocks(#[from] audit_blocks::Error),

    /// Filesystem fault while reading, backing up, or rewriting
    #[error(transparent)]
    Fs(#[from] audit_fs::Error),
}
