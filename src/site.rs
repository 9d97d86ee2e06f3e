//! Site metadata carried over from a previous `index.json`.

use crate::model::SiteMetadata;
use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Load the `site` object from an existing index, falling back to defaults.
///
/// A missing index is the normal first-run case and is silent. Anything else
/// that prevents reading the metadata is reported as a warning.
pub fn load_site_metadata(index_path: &Path) -> SiteMetadata {
    if !index_path.exists() {
        return SiteMetadata::default();
    }
    match read_site(index_path) {
        Ok(Some(Value::Object(map))) => SiteMetadata(map),
        Ok(Some(other)) => {
            eprintln!(
                "warning: discarding \"site\" in {}: expected an object, found {}; using default site metadata",
                index_path.display(),
                other
            );
            SiteMetadata::default()
        }
        Ok(None) => SiteMetadata::default(),
        Err(e) => {
            eprintln!(
                "warning: failed to read existing {}: {:#}",
                index_path.display(),
                e
            );
            SiteMetadata::default()
        }
    }
}

/// Raw `site` value of the index at `index_path`, if it has one.
fn read_site(index_path: &Path) -> Result<Option<Value>> {
    let content = fs::read_to_string(index_path)
        .with_context(|| format!("failed to read {}", index_path.display()))?;
    let mut data: Value = serde_json::from_str(&content).context("invalid JSON")?;

    Ok(data.get_mut("site").map(Value::take))
}
