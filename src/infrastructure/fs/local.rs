//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::io::Write;
use std::path::Path;

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};

/// Local file system implementation
///
/// Writes go through a temp file in the target directory followed by a
/// rename, so a crash never leaves a half-written `package.json`. An
/// existing file keeps its permissions, and a symlink is written through.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn read(&self, path: &Path) -> FsResult<String> {
        std::fs::read_to_string(path).map_err(|e| FsError::from_io(path, e))
    }

    fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        // Write through symlinks so a linked manifest keeps its link.
        let target = match std::fs::canonicalize(path) {
            Ok(resolved) => resolved,
            Err(_) => path.to_path_buf(),
        };
        let existing = std::fs::metadata(&target).ok();

        let parent = match target.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(parent).map_err(|e| FsError::from_io(parent, e))?;

        let mut tmp =
            tempfile::NamedTempFile::new_in(parent).map_err(|e| FsError::from_io(parent, e))?;
        tmp.write_all(content.as_bytes())
            .map_err(|e| FsError::from_io(path, e))?;
        if let Some(meta) = existing {
            tmp.as_file()
                .set_permissions(meta.permissions())
                .map_err(|e| FsError::from_io(path, e))?;
        }
        tmp.persist(&target)
            .map_err(|e| FsError::from_io(path, e.error))?;
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        std::fs::create_dir_all(path).map_err(|e| FsError::from_io(path, e))
    }

    fn rename(&self, from: &Path, to: &Path) -> FsResult<()> {
        match std::fs::rename(from, to) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(FsError::from_io(from, e)),
            Err(_) if from.is_file() => {
                // Different mount points cannot be renamed across.
                std::fs::copy(from, to).map_err(|e| FsError::from_io(to, e))?;
                std::fs::remove_file(from).map_err(|e| FsError::from_io(from, e))
            }
            Err(e) => Err(FsError::from_io(from, e)),
        }
    }
}
