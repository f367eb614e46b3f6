//! Step 3: add the `build:ts` script to `package.json`.

use std::path::Path;

use crate::domain::entities::document::parse_object;
use crate::domain::entities::manifest::{merge_build_script, BUILD_TS_KEY};
use crate::domain::ports::FileSystem;
use crate::domain::value_objects::StepOutcome;

use super::documents::{file_label, write_document};

/// Merge the watch-mode build script into the manifest's script table.
pub fn ensure_build_script(fs: &dyn FileSystem, manifest_path: &Path) -> StepOutcome {
    let name = file_label(manifest_path);

    let content = match fs.read(manifest_path) {
        Ok(content) => content,
        Err(e) if e.is_not_found() => {
            return StepOutcome::skipped(format!("no {} in the project", name));
        }
        Err(e) => return StepOutcome::failed(e.to_string()),
    };

    let mut doc = match parse_object(&content) {
        Ok(doc) => doc,
        Err(e) => return StepOutcome::failed(format!("{} is {}; left untouched", name, e)),
    };

    match merge_build_script(&mut doc) {
        Err(e) => StepOutcome::failed(format!("{}: {}; left untouched", name, e)),
        Ok(false) => StepOutcome::skipped(format!("{} script already present", BUILD_TS_KEY)),
        Ok(true) => match write_document(fs, manifest_path, &doc) {
            Ok(()) => StepOutcome::applied(format!("added {} script to {}", BUILD_TS_KEY, name)),
            Err(e) => StepOutcome::failed(e),
        },
    }
}
