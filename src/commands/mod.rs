//! Command handlers invoked from `main`.

pub mod init;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Turn the `--path` argument into an absolute project directory.
///
/// Symlinks are kept as given; `.` components are dropped.
pub(crate) fn resolve_project_dir(path: &Path) -> Result<PathBuf> {
    let cwd = std::env::current_dir().context("cannot determine the current directory")?;
    Ok(absolute_dir(path, &cwd))
}

fn absolute_dir(path: &Path, cwd: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    };
    joined.components().collect()
}
