//! NDJSON output: one JSON object per line, each tagged with the command.

use serde::Serialize;
use std::io::{self, Write};

/// Write a single NDJSON event.
pub fn write_event(out: &mut impl Write, event: &serde_json::Value) -> io::Result<()> {
    let line = serde_json::to_string(event).unwrap_or_else(|_| "{}".to_string());
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

/// Serialize `payload`, add `event` and `command` fields, and write it.
pub fn write_tagged<T: Serialize>(
    out: &mut impl Write,
    command: &str,
    event: &str,
    payload: &T,
) -> io::Result<()> {
    let mut value = serde_json::to_value(payload)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    if !value.is_object() {
        value = serde_json::json!({ "value": value });
    }
    if let Some(obj) = value.as_object_mut() {
        obj.insert("event".to_string(), serde_json::json!(event));
        obj.insert("command".to_string(), serde_json::json!(command));
    }
    write_event(out, &value)
}

/// [`write_tagged`] to stdout.
pub fn emit<T: Serialize>(command: &str, event: &str, payload: &T) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_tagged(&mut out, command, event, payload)
}
