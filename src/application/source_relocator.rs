//! Step 5: move the root component into the TypeScript source root.

use std::path::{Component, Path};

use crate::config::FilesConfig;
use crate::domain::entities::build_config::ROOT_DIR;
use crate::domain::ports::FileSystem;
use crate::domain::value_objects::{SafePath, StepOutcome};

use super::documents::read_compiler_dir;

/// Move `<root>/App.js` to `<root>/<rootDir>/App.tsx`.
///
/// Nothing to move is not an error. An existing destination is replaced.
pub fn relocate_application_source(
    fs: &dyn FileSystem,
    root: &Path,
    build_config_path: &Path,
    files: &FilesConfig,
) -> StepOutcome {
    let source = root.join(&files.app_source);
    if !fs.exists(&source) {
        return StepOutcome::skipped(format!("no {} to move", files.app_source));
    }

    let root_dir = match read_compiler_dir(fs, build_config_path, ROOT_DIR) {
        Ok(root_dir) => root_dir,
        Err(reason) => return StepOutcome::failed(reason),
    };
    let root_dir = match SafePath::new(&root_dir) {
        Ok(path) => path,
        Err(e) => {
            return StepOutcome::failed(format!(
                "rootDir '{}' escapes the project: {}",
                root_dir, e
            ));
        }
    };

    if !is_plain_file_name(&files.app_target_name) {
        return StepOutcome::failed(format!(
            "app_target_name '{}' must be a plain file name",
            files.app_target_name
        ));
    }

    let target_dir = root_dir.resolve(root);
    if let Err(e) = fs.create_dir_all(&target_dir) {
        return StepOutcome::failed(e.to_string());
    }

    let target = target_dir.join(&files.app_target_name);
    match fs.rename(&source, &target) {
        Ok(()) => StepOutcome::applied(format!(
            "moved {} to {}",
            files.app_source,
            root_dir.as_path().join(&files.app_target_name).display()
        )),
        Err(e) => StepOutcome::failed(e.to_string()),
    }
}

fn is_plain_file_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}
