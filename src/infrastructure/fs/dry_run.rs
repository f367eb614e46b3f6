//! Dry-run file system
//!
//! Reads fall through to a base file system; writes, directory creation
//! and moves are kept in memory so later steps observe earlier ones
//! exactly as they would on disk. Nothing ever reaches the base.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};

/// A file whose content would change
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedChange {
    pub path: PathBuf,
    /// Content on disk today (`None` when the file would be created)
    pub before: Option<String>,
    pub after: String,
}

/// A file that would be moved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedMove {
    pub from: PathBuf,
    pub to: PathBuf,
}

#[derive(Debug, Clone)]
enum Overlay {
    Present(String),
    Removed,
}

#[derive(Debug, Default)]
struct DryRunState {
    files: BTreeMap<PathBuf, Overlay>,
    written: BTreeSet<PathBuf>,
    dirs: BTreeSet<PathBuf>,
    moves: Vec<PlannedMove>,
}

/// In-memory overlay over another file system
pub struct DryRunFs<F: FileSystem> {
    base: F,
    state: RefCell<DryRunState>,
}

impl<F: FileSystem> DryRunFs<F> {
    pub fn new(base: F) -> Self {
        Self {
            base,
            state: RefCell::new(DryRunState::default()),
        }
    }

    /// Files that would be written with different content, sorted by path.
    pub fn planned_changes(&self) -> Vec<PlannedChange> {
        let state = self.state.borrow();
        state
            .written
            .iter()
            .filter_map(|path| {
                let after = match state.files.get(path) {
                    Some(Overlay::Present(content)) => content.clone(),
                    _ => return None,
                };
                let before = self.base.read(path).ok();
                if before.as_deref() == Some(after.as_str()) {
                    return None;
                }
                Some(PlannedChange {
                    path: path.clone(),
                    before,
                    after,
                })
            })
            .collect()
    }

    /// Moves in the order they were requested.
    pub fn planned_moves(&self) -> Vec<PlannedMove> {
        self.state.borrow().moves.clone()
    }

    /// Directories that do not exist yet and would be created.
    pub fn planned_dirs(&self) -> Vec<PathBuf> {
        self.state
            .borrow()
            .dirs
            .iter()
            .filter(|dir| !self.base.exists(dir))
            .cloned()
            .collect()
    }
}

impl<F: FileSystem> FileSystem for DryRunFs<F> {
    fn read(&self, path: &Path) -> FsResult<String> {
        match self.state.borrow().files.get(path) {
            Some(Overlay::Present(content)) => return Ok(content.clone()),
            Some(Overlay::Removed) => return Err(FsError::NotFound(path.to_path_buf())),
            None => {}
        }
        self.base.read(path)
    }

    fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        let mut state = self.state.borrow_mut();
        state
            .files
            .insert(path.to_path_buf(), Overlay::Present(content.to_string()));
        state.written.insert(path.to_path_buf());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        {
            let state = self.state.borrow();
            match state.files.get(path) {
                Some(Overlay::Present(_)) => return true,
                Some(Overlay::Removed) => return false,
                None => {}
            }
            if state.dirs.contains(path) {
                return true;
            }
        }
        self.base.exists(path)
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        self.state.borrow_mut().dirs.insert(path.to_path_buf());
        Ok(())
    }

    fn rename(&self, from: &Path, to: &Path) -> FsResult<()> {
        let content = self.read(from)?;
        let mut state = self.state.borrow_mut();
        state.files.insert(from.to_path_buf(), Overlay::Removed);
        state.files.insert(to.to_path_buf(), Overlay::Present(content));
        state.written.remove(from);
        state.moves.push(PlannedMove {
            from: from.to_path_buf(),
            to: to.to_path_buf(),
        });
        Ok(())
    }
}
