//! Project context
//!
//! Everything the steps need to know about the project, resolved once
//! before the pipeline starts and passed down explicitly.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::config::Settings;
use crate::domain::entities::document::parse_object;
use crate::domain::entities::manifest::project_label;
use crate::domain::ports::FileSystem;
use crate::error::{TsinitError, TsinitResult};

#[derive(Debug, Clone)]
pub struct ProjectContext {
    root: PathBuf,
    settings: Settings,
    /// Snapshot taken at startup, for display only. Steps re-read from disk.
    manifest: Option<Map<String, Value>>,
}

impl ProjectContext {
    /// Build a context for `root`, which must be an existing directory.
    pub fn load(
        root: impl Into<PathBuf>,
        settings: Settings,
        fs: &dyn FileSystem,
    ) -> TsinitResult<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(TsinitError::ProjectNotFound { path: root });
        }

        let manifest_path = root.join(&settings.files.manifest);
        let manifest = fs
            .read(&manifest_path)
            .ok()
            .and_then(|content| parse_object(&content).ok());

        Ok(Self {
            root,
            settings,
            manifest,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn manifest(&self) -> Option<&Map<String, Value>> {
        self.manifest.as_ref()
    }

    /// `name@version` from the manifest, or the directory name.
    pub fn project_label(&self) -> String {
        self.manifest
            .as_ref()
            .and_then(project_label)
            .or_else(|| {
                self.root
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
            })
            .unwrap_or_else(|| self.root.display().to_string())
    }

    pub fn build_config_path(&self) -> PathBuf {
        self.root.join(&self.settings.files.build_config)
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.root.join(&self.settings.files.manifest)
    }

    pub fn entry_path(&self) -> PathBuf {
        self.root.join(&self.settings.files.entry)
    }

    pub fn app_source_path(&self) -> PathBuf {
        self.root.join(&self.settings.files.app_source)
    }
}
