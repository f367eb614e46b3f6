//! Settings type definitions

use serde::{Deserialize, Serialize};

use crate::domain::entities::CompilerDirs;
use crate::domain::value_objects::FallbackPolicy;

/// Names of the project files the pipeline touches
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilesConfig {
    pub build_config: String,
    pub manifest: String,
    pub entry: String,
    pub app_source: String,
    pub app_target_name: String,
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            build_config: "tsconfig.json".to_string(),
            manifest: "package.json".to_string(),
            entry: "index.js".to_string(),
            app_source: "App.js".to_string(),
            app_target_name: "App.tsx".to_string(),
        }
    }
}

/// Defaults for the enforced `compilerOptions` fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompilerOptionsConfig {
    pub root_dir: String,
    pub out_dir: String,
}

impl Default for CompilerOptionsConfig {
    fn default() -> Self {
        let dirs = CompilerDirs::default();
        Self {
            root_dir: dirs.root_dir,
            out_dir: dirs.out_dir,
        }
    }
}

impl CompilerOptionsConfig {
    pub fn dirs(&self) -> CompilerDirs {
        CompilerDirs {
            root_dir: self.root_dir.clone(),
            out_dir: self.out_dir.clone(),
        }
    }
}

/// Development dependency installation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstallConfig {
    /// Kept raw: the installer validates the shape itself
    pub packages: toml::Value,
    pub primary: String,
    pub fallback: String,
    pub fallback_policy: FallbackPolicy,
}

impl Default for InstallConfig {
    fn default() -> Self {
        Self {
            packages: toml::Value::Array(vec![
                toml::Value::String("concurrently".to_string()),
                toml::Value::String("typescript".to_string()),
            ]),
            primary: "yarn".to_string(),
            fallback: "npm".to_string(),
            fallback_policy: FallbackPolicy::default(),
        }
    }
}

/// The one-off compile at the end of the pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompileConfig {
    pub enabled: bool,
    pub command: Vec<String>,
}

impl Default for CompileConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            command: vec!["npx".to_string(), "tsc".to_string()],
        }
    }
}

/// Complete tool settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    pub files: FilesConfig,
    pub compiler_options: CompilerOptionsConfig,
    pub install: InstallConfig,
    pub compile: CompileConfig,
}
