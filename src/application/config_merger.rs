//! Step 1: make sure `tsconfig.json` declares `rootDir` and `outDir`.

use std::path::Path;

use crate::domain::entities::build_config::{default_document, merge_required_dirs};
use crate::domain::entities::document::parse_object;
use crate::domain::entities::CompilerDirs;
use crate::domain::ports::FileSystem;
use crate::domain::value_objects::StepOutcome;

use super::documents::{file_label, write_document};

/// Create the build configuration, or fill in whichever enforced field is
/// missing. A file that cannot be merged is left untouched.
pub fn ensure_build_config(
    fs: &dyn FileSystem,
    path: &Path,
    defaults: &CompilerDirs,
) -> StepOutcome {
    let name = file_label(path);

    let content = match fs.read(path) {
        Ok(content) => content,
        Err(e) if e.is_not_found() => {
            return match write_document(fs, path, &default_document(defaults)) {
                Ok(()) => StepOutcome::applied(format!("created {}", name)),
                Err(e) => StepOutcome::failed(e),
            };
        }
        Err(e) => return StepOutcome::failed(e.to_string()),
    };

    let mut doc = match parse_object(&content) {
        Ok(doc) => doc,
        Err(e) => {
            return StepOutcome::failed(format!("{} is {}; left untouched", name, e));
        }
    };

    match merge_required_dirs(&mut doc, defaults) {
        Err(e) => StepOutcome::failed(format!("{}: {}; left untouched", name, e)),
        Ok(added) if added.is_empty() => {
            StepOutcome::skipped(format!("{} already sets rootDir and outDir", name))
        }
        Ok(added) => match write_document(fs, path, &doc) {
            Ok(()) => StepOutcome::applied(format!(
                "added compilerOptions.{} to {}",
                added.join(", compilerOptions."),
                name
            )),
            Err(e) => StepOutcome::failed(e),
        },
    }
}
