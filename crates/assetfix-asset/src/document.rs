//! JSON document read/write
//!
//! Every JSON file in the registry is written in one canonical shape:
//! four-space indentation, keys in their original order, and a trailing
//! newline. Writes go through [`write_atomic`] so a failed write never leaves
//! a truncated document behind.

use crate::fs::write_atomic;
use assetfix_core::{AssetfixError, Result};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use std::fs;
use std::path::Path;

const INDENT: &[u8] = b"    ";

/// Read and parse a JSON file, keeping object keys in file order
pub fn read_json_file(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path).map_err(|e| AssetfixError::io("read", path, e))?;
    serde_json::from_str(&content).map_err(|e| AssetfixError::json(path, e))
}

/// Serialize a value in the registry's canonical pretty form
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    buf.push(b'\n');
    Ok(buf)
}

/// Write a value to `path` in canonical pretty form
pub fn write_json_file<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let bytes = to_pretty_json(value).map_err(|e| AssetfixError::json(path, e))?;
    write_atomic(path, &bytes)
}

/// Reformat a JSON file in place.
///
/// Returns `true` if the file was rewritten, `false` if it was already in
/// canonical form.
pub fn format_json_file(path: &Path) -> Result<bool> {
    let original = fs::read(path).map_err(|e| AssetfixError::io("read", path, e))?;
    let value: Value =
        serde_json::from_slice(&original).map_err(|e| AssetfixError::json(path, e))?;

    let formatted = to_pretty_json(&value).map_err(|e| AssetfixError::json(path, e))?;
    if formatted == original {
        return Ok(false);
    }

    write_atomic(path, &formatted)?;
    Ok(true)
}
