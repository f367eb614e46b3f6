//! Step 4: point the entry file's `App` import at the compiled output.

use std::path::Path;

use crate::domain::entities::build_config::OUT_DIR;
use crate::domain::entities::entry_source::{import_prefix, rewrite_app_import};
use crate::domain::ports::FileSystem;
use crate::domain::value_objects::StepOutcome;

use super::documents::{file_label, read_compiler_dir};

/// Rewrite `import App from './App';` in the entry file.
///
/// The entry file is read first: a missing entry is reported as such even
/// when the build configuration is broken too.
pub fn rewrite_entry_import(
    fs: &dyn FileSystem,
    entry_path: &Path,
    build_config_path: &Path,
) -> StepOutcome {
    let source = match fs.read(entry_path) {
        Ok(source) => source,
        Err(e) if e.is_not_found() => {
            return StepOutcome::failed(format!(
                "entry file not found: {}",
                entry_path.display()
            ));
        }
        Err(e) => return StepOutcome::failed(e.to_string()),
    };

    let out_dir = match read_compiler_dir(fs, build_config_path, OUT_DIR) {
        Ok(out_dir) => out_dir,
        Err(reason) => return StepOutcome::failed(reason),
    };

    let name = file_label(entry_path);
    match rewrite_app_import(&source, &out_dir) {
        Err(e) => StepOutcome::failed(e.to_string()),
        Ok(None) => StepOutcome::skipped(format!(
            "{} has no `import App from './App';` line",
            name
        )),
        Ok(Some(rewritten)) => match fs.write(entry_path, &rewritten) {
            Ok(()) => StepOutcome::applied(format!(
                "{} now imports App from ./{}/App",
                name,
                import_prefix(&out_dir)
            )),
            Err(e) => StepOutcome::failed(e.to_string()),
        },
    }
}
