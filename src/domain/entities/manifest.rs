//! Package manifest (`package.json`) script table.

use serde_json::{Map, Value};

use super::document::{is_unset, kind_of, DocumentError};

pub const SCRIPTS: &str = "scripts";
pub const BUILD_TS_KEY: &str = "build:ts";
/// Watch-mode compile running alongside the React Native packager.
pub const BUILD_TS_COMMAND: &str =
    "concurrently -r \"tsc -w\" node_modules/react-native/local-cli/cli.js start";

/// Set `scripts["build:ts"]`, creating the table if needed.
///
/// Returns `false` when the script was already present with the exact
/// command (nothing to write).
pub fn merge_build_script(doc: &mut Map<String, Value>) -> Result<bool, DocumentError> {
    if is_unset(doc.get(SCRIPTS)) {
        let mut scripts = Map::new();
        scripts.insert(
            BUILD_TS_KEY.to_string(),
            Value::String(BUILD_TS_COMMAND.to_string()),
        );
        doc.insert(SCRIPTS.to_string(), Value::Object(scripts));
        return Ok(true);
    }

    match doc.get_mut(SCRIPTS) {
        Some(Value::Object(scripts)) => {
            if scripts.get(BUILD_TS_KEY).and_then(Value::as_str) == Some(BUILD_TS_COMMAND) {
                return Ok(false);
            }
            scripts.insert(
                BUILD_TS_KEY.to_string(),
                Value::String(BUILD_TS_COMMAND.to_string()),
            );
            Ok(true)
        }
        Some(other) => Err(DocumentError::NotAnObject {
            key: SCRIPTS,
            found: kind_of(other),
        }),
        None => Ok(false),
    }
}

/// `name@version` for display, if the manifest has a name.
pub fn project_label(doc: &Map<String, Value>) -> Option<String> {
    let name = doc.get("name")?.as_str()?;
    match doc.get("version").and_then(Value::as_str) {
        Some(version) => Some(format!("{}@{}", name, version)),
        None => Some(name.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::document::parse_object;
    use serde_json::json;

    #[test]
    fn appends_build_script_after_existing_ones() {
        let mut doc = parse_object(r#"{"scripts": {"start": "x"}}"#).unwrap();
        assert!(merge_build_script(&mut doc).unwrap());

        assert_eq!(
            Value::Object(doc),
            json!({"scripts": {"start": "x", "build:ts": BUILD_TS_COMMAND}})
        );
    }

    #[test]
    fn creates_scripts_table_when_absent() {
        let mut doc = parse_object(r#"{"name": "app"}"#).unwrap();
        assert!(merge_build_script(&mut doc).unwrap());

        assert_eq!(doc[SCRIPTS], json!({ "build:ts": BUILD_TS_COMMAND }));
        assert_eq!(doc["name"], json!("app"));
    }

    #[test]
    fn overwrites_stale_build_script_in_place() {
        let mut doc =
            parse_object(r#"{"scripts": {"build:ts": "tsc", "test": "jest"}}"#).unwrap();
        assert!(merge_build_script(&mut doc).unwrap());

        let keys: Vec<&String> = doc[SCRIPTS].as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["build:ts", "test"]);
        assert_eq!(doc[SCRIPTS][BUILD_TS_KEY], json!(BUILD_TS_COMMAND));
    }

    #[test]
    fn reports_no_change_when_already_present() {
        let mut doc = parse_object(&format!(
            r#"{{"scripts": {{"build:ts": {}}}}}"#,
            serde_json::to_string(BUILD_TS_COMMAND).unwrap()
        ))
        .unwrap();
        assert!(!merge_build_script(&mut doc).unwrap());
    }

    #[test]
    fn rejects_non_object_scripts() {
        let mut doc = parse_object(r#"{"scripts": ["start"]}"#).unwrap();
        assert!(merge_build_script(&mut doc).is_err());
    }

    #[test]
    fn project_label_with_and_without_version() {
        let doc = parse_object(r#"{"name": "app", "version": "0.1.0"}"#).unwrap();
        assert_eq!(project_label(&doc), Some("app@0.1.0".to_string()));

        let doc = parse_object(r#"{"name": "app"}"#).unwrap();
        assert_eq!(project_label(&doc), Some("app".to_string()));

        let doc = parse_object(r#"{"private": true}"#).unwrap();
        assert_eq!(project_label(&doc), None);
    }
}
