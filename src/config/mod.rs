//! Settings for tsinit
//!
//! Resolution order:
//! 1. Environment variables (TSINIT_*)
//! 2. Project settings (`<project>/tsinit.toml`)
//! 3. User settings (`<config dir>/tsinit/config.toml`)
//! 4. Built-in defaults
//!
//! Project and user files are not merged: the first one found is used.

mod env_validator;
mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use env_validator::{EnvVarValidator, EnvWarning};
pub use loader::{
    load_with_warnings, resolve, resolve_with, user_settings_path, with_env_overrides_from,
    ResolvedSettings, SettingsSource, PROJECT_SETTINGS_FILE,
};
pub use types::{
    CompileConfig, CompilerOptionsConfig, FilesConfig, InstallConfig, Settings,
};
