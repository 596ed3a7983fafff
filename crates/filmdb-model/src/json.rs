//! JSON artifact I/O.
//!
//! Output files are pretty-printed with a 4-space indent and
//! lexicographically sorted keys. Downstream tooling diffs and greps these
//! files, so the formatting is a compatibility contract, not cosmetics.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Read a JSON array artifact. Any missing required key or type mismatch
/// aborts here, before the stage runs.
pub fn read_json_array<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

/// Render `items` as a pretty-printed JSON array, keys sorted, 4-space
/// indent. An empty slice renders as `[]`.
pub fn to_json_sorted<T: Serialize>(items: &[T]) -> Result<String> {
    // Round-trip through `Value`: serde_json objects are BTreeMap-backed
    // (the `preserve_order` feature is off), so keys come out sorted.
    let value: Value = serde_json::to_value(items).context("serializing JSON artifact")?;
    let mut out = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut out, formatter);
    value
        .serialize(&mut ser)
        .context("formatting JSON artifact")?;
    String::from_utf8(out).context("formatting JSON artifact")
}

/// Write a JSON array artifact wholesale. Re-running a stage overwrites its
/// previous generation.
pub fn write_json_sorted<T: Serialize>(path: &Path, items: &[T]) -> Result<()> {
    let text = to_json_sorted(items)?;
    fs::write(path, text).with_context(|| format!("writing {}", path.display()))
}
