//! Entry file (`index.js`) import rewrite.
//!
//! Exactly one line is recognised: `import App from './App';`. It is
//! pointed at the compiled output directory. An already rewritten file no
//! longer matches, which makes a second run a no-op.

use regex::{NoExpand, Regex};

/// Line-anchored; `R` lets `$` match before `\r\n` as well.
const APP_IMPORT_PATTERN: &str = r"(?mR)^import App from '\./App';$";

/// Normalize an `outDir` value into an import path prefix.
///
/// `./build/` → `build`, `out\\js` → `out/js`.
pub fn import_prefix(out_dir: &str) -> String {
    let unified = out_dir.trim().replace('\\', "/");
    let mut prefix = unified.as_str();
    while let Some(rest) = prefix.strip_prefix("./") {
        prefix = rest;
    }
    prefix.trim_end_matches('/').to_string()
}

/// The import line after rewriting.
pub fn rewritten_import(out_dir: &str) -> String {
    let prefix = import_prefix(out_dir);
    if prefix.is_empty() || prefix == "." {
        return "import App from './App';".to_string();
    }
    format!("import App from './{}/App';", prefix)
}

/// Rewrite the first matching import line.
///
/// Returns `Ok(None)` when no line matches or the rewrite would not change
/// anything.
pub fn rewrite_app_import(source: &str, out_dir: &str) -> Result<Option<String>, regex::Error> {
    let pattern = Regex::new(APP_IMPORT_PATTERN)?;
    if !pattern.is_match(source) {
        return Ok(None);
    }

    let replacement = rewritten_import(out_dir);
    let rewritten = pattern.replace(source, NoExpand(&replacement));
    if rewritten == source {
        return Ok(None);
    }
    Ok(Some(rewritten.into_owned()))
}
