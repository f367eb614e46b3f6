//! JSON document helpers shared by `tsconfig.json` and `package.json`.
//!
//! Key order is preserved (`serde_json/preserve_order`), and output always
//! uses two-space indentation with a trailing newline.

use serde_json::{Map, Value};
use std::fmt;

/// Why a document cannot be merged
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    /// Not well-formed JSON
    Parse(String),
    /// The top level is not an object
    NotAnObjectDocument { found: &'static str },
    /// A value that must be an object is something else
    NotAnObject { key: &'static str, found: &'static str },
}

impl fmt::Display for DocumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentError::Parse(msg) => write!(f, "not valid JSON ({})", msg),
            DocumentError::NotAnObjectDocument { found } => {
                write!(f, "not a JSON object (found {})", found)
            }
            DocumentError::NotAnObject { key, found } => {
                write!(f, "'{}' must be an object, found {}", key, found)
            }
        }
    }
}

impl std::error::Error for DocumentError {}

/// Parse a document whose top level must be an object.
pub fn parse_object(content: &str) -> Result<Map<String, Value>, DocumentError> {
    let value: Value =
        serde_json::from_str(content).map_err(|e| DocumentError::Parse(e.to_string()))?;
    match value {
        Value::Object(map) => Ok(map),
        other => Err(DocumentError::NotAnObjectDocument {
            found: kind_of(&other),
        }),
    }
}

/// Pretty-print with two-space indentation and a trailing newline.
pub fn render_pretty(map: &Map<String, Value>) -> Result<String, serde_json::Error> {
    let mut out = serde_json::to_string_pretty(map)?;
    out.push('\n');
    Ok(out)
}

/// JSON type name for diagnostics.
pub fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// `None`, `null` and `""` all count as "not set".
pub fn is_unset(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.trim().is_empty(),
        Some(_) => false,
    }
}
