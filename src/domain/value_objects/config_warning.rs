//! Settings warning value object.

use std::path::PathBuf;

/// Non-fatal settings warning surfaced to CLI users.
///
/// Produced while loading `tsinit.toml` when a key is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    /// The unknown key (last path segment)
    pub key: String,
    /// The settings file that contained it
    pub file: PathBuf,
    /// The line number (1-indexed) if available
    pub line: Option<usize>,
    /// A close known key, if any
    pub suggestion: Option<String>,
}
