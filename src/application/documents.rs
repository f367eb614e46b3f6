//! Read/write helpers for the JSON documents the steps share.

use std::path::Path;

use serde_json::{Map, Value};

use crate::domain::entities::build_config::compiler_dir;
use crate::domain::entities::document::{parse_object, render_pretty};
use crate::domain::ports::FileSystem;

/// File name for messages (`tsconfig.json` rather than a full path).
pub(crate) fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Pretty-print and write atomically.
pub(crate) fn write_document(
    fs: &dyn FileSystem,
    path: &Path,
    doc: &Map<String, Value>,
) -> Result<(), String> {
    let content = render_pretty(doc).map_err(|e| e.to_string())?;
    fs.write(path, &content).map_err(|e| e.to_string())
}

/// Read `compilerOptions.<key>` from the build configuration on disk.
pub(crate) fn read_compiler_dir(
    fs: &dyn FileSystem,
    build_config_path: &Path,
    key: &str,
) -> Result<String, String> {
    let name = file_label(build_config_path);
    let content = fs.read(build_config_path).map_err(|e| e.to_string())?;
    let doc = parse_object(&content).map_err(|e| format!("{} is {}", name, e))?;
    compiler_dir(&doc, key)
        .map(str::to_string)
        .ok_or_else(|| format!("{} has no string compilerOptions.{}", name, key))
}
