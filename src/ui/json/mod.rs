//! JSON output for `--json`.
//!
//! One event object per line on stdout (NDJSON).

pub mod events;

use serde::Serialize;
use std::io::{self, Write};

/// Emit a typed event as NDJSON to stdout.
pub fn emit_event<T: Serialize>(event: &T) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_typed_event(&mut out, event)
}

/// Write a typed event to a custom writer.
pub fn write_typed_event<T: Serialize, W: Write>(out: &mut W, event: &T) -> io::Result<()> {
    let json =
        serde_json::to_string(event).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    out.write_all(json.as_bytes())?;
    out.write_all(b"\n")?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use events::*;

    #[test]
    fn writes_one_object_per_line() {
        let mut buffer = Vec::new();

        write_typed_event(&mut buffer, &StepStartedEvent::new("install", "Installing...")).unwrap();
        write_typed_event(&mut buffer, &CompleteEvent::new("init", 5, 1, 0)).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 2);

        let last: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(last["event"], "complete");
        assert_eq!(last["applied"], 5);
    }
}
