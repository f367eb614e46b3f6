//! Build configuration (`tsconfig.json`) merge rules.
//!
//! Only `compilerOptions.rootDir` and `compilerOptions.outDir` are
//! enforced. Whatever the user already set wins; missing fields are filled
//! from the defaults and nothing else is touched.

use serde_json::{json, Map, Value};

use super::document::{is_unset, kind_of, DocumentError};

pub const COMPILER_OPTIONS: &str = "compilerOptions";
pub const ROOT_DIR: &str = "rootDir";
pub const OUT_DIR: &str = "outDir";

/// The two directories the pipeline relies on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilerDirs {
    pub root_dir: String,
    pub out_dir: String,
}

impl Default for CompilerDirs {
    fn default() -> Self {
        Self {
            root_dir: "src".to_string(),
            out_dir: "build".to_string(),
        }
    }
}

/// Document written when the project has no build configuration at all.
pub fn default_document(dirs: &CompilerDirs) -> Map<String, Value> {
    let value = json!({
        "compilerOptions": {
            "target": "es2015",
            "module": "es2015",
            "jsx": "react-native",
            "moduleResolution": "node",
            "allowSyntheticDefaultImports": true,
            "sourceMap": true,
            "rootDir": dirs.root_dir,
            "outDir": dirs.out_dir,
        },
        "exclude": ["node_modules", dirs.out_dir],
    });

    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

/// Add any missing enforced field. Returns the names of the fields added;
/// an empty list means the document is already complete.
pub fn merge_required_dirs(
    doc: &mut Map<String, Value>,
    dirs: &CompilerDirs,
) -> Result<Vec<&'static str>, DocumentError> {
    if is_unset(doc.get(COMPILER_OPTIONS)) {
        let mut options = Map::new();
        options.insert(ROOT_DIR.to_string(), Value::String(dirs.root_dir.clone()));
        options.insert(OUT_DIR.to_string(), Value::String(dirs.out_dir.clone()));
        doc.insert(COMPILER_OPTIONS.to_string(), Value::Object(options));
        return Ok(vec![ROOT_DIR, OUT_DIR]);
    }

    let options = match doc.get_mut(COMPILER_OPTIONS) {
        Some(Value::Object(options)) => options,
        Some(other) => {
            return Err(DocumentError::NotAnObject {
                key: COMPILER_OPTIONS,
                found: kind_of(other),
            })
        }
        None => return Ok(Vec::new()),
    };

    let mut added = Vec::new();
    for (key, default) in [(ROOT_DIR, &dirs.root_dir), (OUT_DIR, &dirs.out_dir)] {
        if is_unset(options.get(key)) {
            options.insert(key.to_string(), Value::String(default.clone()));
            added.push(key);
        }
    }

    Ok(added)
}

/// Read `compilerOptions.<key>` if it is a string.
pub fn compiler_dir<'a>(doc: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    doc.get(COMPILER_OPTIONS)?.get(key)?.as_str()
}
