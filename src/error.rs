//! Error types for tsinit
//!
//! Only fatal conditions live here. Recoverable per-step problems are
//! reported through `StepOutcome` instead.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for tsinit operations
pub type TsinitResult<T> = Result<T, TsinitError>;

/// Main error type for tsinit operations
#[derive(Error, Debug)]
pub enum TsinitError {
    /// The configured package list is not an array of strings
    #[error("packages should be an array of strings, got {found}")]
    InvalidPackageList { found: String },

    /// Project settings file could not be parsed
    #[error("invalid settings in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Project root is missing or not a directory
    #[error("project directory not found: {path}")]
    ProjectNotFound { path: PathBuf },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
