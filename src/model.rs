//! Data model for the generated index.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Top-level shape of `index.json`.
#[derive(Debug, Serialize)]
pub struct Index {
    pub site: SiteMetadata,
    pub projects: Vec<Project>,
}

/// Descriptive fields carried over from the previous index.
///
/// Kept as a raw JSON object so keys the tool does not know about survive
/// regeneration untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SiteMetadata(pub Map<String, Value>);

impl Default for SiteMetadata {
    fn default() -> Self {
        let mut map = Map::new();
        map.insert("title".into(), Value::String("Documentation".into()));
        map.insert(
            "description".into(),
            Value::String("Project Documentation".into()),
        );
        SiteMetadata(map)
    }
}

/// One documentation directory under the root.
#[derive(Debug, Serialize)]
pub struct Project {
    /// Directory name
    pub id: String,
    pub title: String,
    /// Always empty; not derived from the scan
    pub description: String,
    pub docs: Vec<DocEntry>,
}

/// One Markdown file inside a project.
#[derive(Debug, Serialize)]
pub struct DocEntry {
    pub title: String,
    pub description: String,
    /// "<project-dir>/<filename>", relative to the docs root
    pub file: String,
    /// Filename without the `.md` extension
    pub id: String,
}
