//! Fixed filesystem names used by Audit Manager.

use std::path::{Path, PathBuf};

/// Suffix appended to a file's full name to form its backup path.
pub const BACKUP_SUFFIX: &str = ".backup";

/// Sibling backup location for a file: the same path with
/// [`BACKUP_SUFFIX`] appended to the full file name.
///
/// # Example
/// ```
/// use audit_fs::backup_path;
/// use std::path::Path;
///
/// let backup = backup_path(Path::new("rhel8.audit"));
/// assert_eq!(backup, Path::new("rhel8.audit.backup"));
/// ```
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(BACKUP_SUFFIX);
    PathBuf::from(name)
}
