//! FileSystem port - abstraction over file I/O operations
//!
//! Pipeline steps only touch the project through this trait, so the same
//! steps run against the real disk or against a dry-run overlay.

use std::path::{Path, PathBuf};

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
#[derive(Debug)]
pub enum FsError {
    /// File not found
    NotFound(PathBuf),
    /// Permission denied
    PermissionDenied(PathBuf),
    /// I/O error
    Io(PathBuf, std::io::Error),
}

impl FsError {
    /// Attach the offending path to an I/O error.
    pub fn from_io(path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
            _ => FsError::Io(path.to_path_buf(), err),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, FsError::NotFound(_))
    }
}

impl std::fmt::Display for FsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FsError::NotFound(path) => write!(f, "file not found: {}", path.display()),
            FsError::PermissionDenied(path) => {
                write!(f, "permission denied: {}", path.display())
            }
            FsError::Io(path, err) => write!(f, "I/O error on {}: {}", path.display(), err),
        }
    }
}

impl std::error::Error for FsError {}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O with atomic writes
/// - `DryRunFs` - in-memory overlay that records planned changes
pub trait FileSystem {
    /// Read file content as string
    fn read(&self, path: &Path) -> FsResult<String>;

    /// Write content to file atomically, creating parent directories
    fn write(&self, path: &Path, content: &str) -> FsResult<()>;

    /// Check if a file or directory exists
    fn exists(&self, path: &Path) -> bool;

    /// Create directory and parents
    fn create_dir_all(&self, path: &Path) -> FsResult<()>;

    /// Move a file, replacing anything already at `to`
    fn rename(&self, from: &Path, to: &Path) -> FsResult<()>;
}
