//! JSON writer for `index.json`.
//!
//! Output is pretty-printed with 2-space indentation and a trailing newline.
//! Non-ASCII text is written as UTF-8, not escaped.

use crate::model::Index;
use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Serialize the index to its on-disk text form.
pub fn render(index: &Index) -> Result<String> {
    let mut out = serde_json::to_string_pretty(index).context("failed to serialize index")?;
    out.push('\n');
    Ok(out)
}

/// Write the index to `path`, replacing any previous content.
pub fn write_index(path: &Path, index: &Index) -> Result<()> {
    let output = render(index)?;
    fs::write(path, output).with_context(|| format!("failed to write {}", path.display()))
}

/// Whether the file at `path` already holds exactly this index.
///
/// Compared as JSON values, so formatting differences do not count.
pub fn is_up_to_date(path: &Path, index: &Index) -> Result<bool> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(false),
        Err(e) => {
            return Err(e).with_context(|| format!("failed to read {}", path.display()));
        }
    };
    let Ok(existing) = serde_json::from_str::<Value>(&content) else {
        return Ok(false);
    };
    let expected = serde_json::to_value(index).context("failed to serialize index")?;
    Ok(existing == expected)
}
