//! Project discovery under the docs root.
//!
//! Every visible, non-reserved subdirectory of the root is a candidate
//! project; its `.md` files (non-recursive) become the project's documents.

use crate::model::{DocEntry, Project};
use crate::title::{derive_title, strip_extension, MARKDOWN_EXT};
use anyhow::{Context, Result};
use glob::Pattern;
use std::fs;
use std::path::Path;

/// Directory names that hold site assets or configuration, never docs.
pub const RESERVED_DIRS: &[&str] = &["assets", "config", "eagleyeradar"];

/// Decides which root entries are not projects.
#[derive(Debug, Default)]
pub struct Exclusions {
    extra: Vec<Pattern>,
}

impl Exclusions {
    /// Build from user-supplied glob patterns, on top of the reserved names.
    pub fn new(patterns: &[String]) -> Result<Self> {
        let extra = patterns
            .iter()
            .map(|p| Pattern::new(p).with_context(|| format!("invalid exclude pattern: {}", p)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { extra })
    }

    pub fn is_excluded(&self, name: &str) -> bool {
        name.starts_with('.')
            || RESERVED_DIRS.contains(&name)
            || self.extra.iter().any(|p| p.matches(name))
    }
}

/// Scan `root` and build the sorted list of non-empty projects.
///
/// Fails only when the root itself cannot be listed. Unreadable project
/// directories are skipped with a warning.
pub fn scan_projects(root: &Path, exclusions: &Exclusions) -> Result<Vec<Project>> {
    let mut projects = Vec::new();

    for dir in project_dirs(root, exclusions)? {
        let docs = match scan_docs(&root.join(&dir), &dir) {
            Ok(docs) => docs,
            Err(e) => {
                eprintln!("warning: skipping project {}: {:#}", dir, e);
                continue;
            }
        };
        if docs.is_empty() {
            continue;
        }

        let project = Project {
            title: derive_title(&dir),
            id: dir,
            description: String::new(),
            docs,
        };
        println!(
            "Added project: {} ({} files)",
            project.title,
            project.docs.len()
        );
        projects.push(project);
    }

    Ok(projects)
}

/// List candidate project directory names under `root`, sorted.
fn project_dirs(root: &Path, exclusions: &Exclusions) -> Result<Vec<String>> {
    let entries = fs::read_dir(root)
        .with_context(|| format!("failed to read directory: {}", root.display()))?;

    let mut dirs = Vec::new();
    for entry in entries.flatten() {
        let Some(name) = utf8_name(&entry) else {
            continue;
        };
        // `Path::is_dir` follows symlinks, so linked projects are included.
        if !entry.path().is_dir() || exclusions.is_excluded(&name) {
            continue;
        }
        dirs.push(name);
    }
    dirs.sort();
    Ok(dirs)
}

/// Build document entries for every `.md` file in one project directory.
fn scan_docs(project_path: &Path, project_id: &str) -> Result<Vec<DocEntry>> {
    let entries = fs::read_dir(project_path)
        .with_context(|| format!("failed to read directory: {}", project_path.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry
            .with_context(|| format!("failed to list {}", project_path.display()))?;
        let Some(name) = utf8_name(&entry) else {
            continue;
        };
        if name.ends_with(MARKDOWN_EXT) && entry.path().is_file() {
            files.push(name);
        }
    }
    files.sort();

    Ok(files
        .into_iter()
        .map(|name| DocEntry {
            title: derive_title(&name),
            description: String::new(),
            file: format!("{}/{}", project_id, name),
            id: strip_extension(&name).to_string(),
        })
        .collect())
}

fn utf8_name(entry: &fs::DirEntry) -> Option<String> {
    match entry.file_name().into_string() {
        Ok(name) => Some(name),
        Err(raw) => {
            eprintln!(
                "warning: skipping non UTF-8 name: {}",
                raw.to_string_lossy()
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "# doc\n").unwrap();
    }

    fn ids(projects: &[Project]) -> Vec<&str> {
        projects.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn projects_sorted_by_directory_name() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "02-Beta/a.md");
        touch(dir.path(), "01-Alpha/a.md");

        let projects = scan_projects(dir.path(), &Exclusions::default()).unwrap();
        assert_eq!(ids(&projects), ["01-Alpha", "02-Beta"]);
        assert_eq!(projects[0].title, "Alpha");
        assert_eq!(projects[1].title, "Beta");
    }

    #[test]
    fn docs_sorted_and_filtered_to_markdown() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "guide/02-Usage.md");
        touch(dir.path(), "guide/01-Install.md");
        touch(dir.path(), "guide/diagram.png");
        touch(dir.path(), "guide/notes.markdown");

        let projects = scan_projects(dir.path(), &Exclusions::default()).unwrap();
        assert_eq!(projects.len(), 1);
        let docs = &projects[0].docs;
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].id, "01-Install");
        assert_eq!(docs[0].title, "Install");
        assert_eq!(docs[0].file, "guide/01-Install.md");
        assert_eq!(docs[0].description, "");
        assert_eq!(docs[1].id, "02-Usage");
    }

    #[test]
    fn empty_projects_are_omitted() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "full/readme.md");
        touch(dir.path(), "images/logo.png");
        fs::create_dir(dir.path().join("empty")).unwrap();

        let projects = scan_projects(dir.path(), &Exclusions::default()).unwrap();
        assert_eq!(ids(&projects), ["full"]);
    }

    #[test]
    fn reserved_and_hidden_dirs_are_skipped() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "assets/a.md");
        touch(dir.path(), "config/a.md");
        touch(dir.path(), "eagleyeradar/a.md");
        touch(dir.path(), ".git/a.md");
        touch(dir.path(), "real/a.md");

        let projects = scan_projects(dir.path(), &Exclusions::default()).unwrap();
        assert_eq!(ids(&projects), ["real"]);
    }

    #[test]
    fn extra_exclusion_patterns() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "drafts-2024/a.md");
        touch(dir.path(), "drafts-old/a.md");
        touch(dir.path(), "published/a.md");

        let exclusions = Exclusions::new(&["drafts-*".to_string()]).unwrap();
        let projects = scan_projects(dir.path(), &exclusions).unwrap();
        assert_eq!(ids(&projects), ["published"]);
    }

    #[test]
    fn invalid_exclusion_pattern_is_rejected() {
        let err = Exclusions::new(&["[".to_string()]).unwrap_err();
        assert!(format!("{:#}", err).contains("invalid exclude pattern"));
    }

    #[test]
    fn files_at_root_and_nested_dirs_are_ignored() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "top.md");
        touch(dir.path(), "proj/nested/deep.md");
        touch(dir.path(), "proj/sub.md/inner.md");
        touch(dir.path(), "proj/one.md");

        let projects = scan_projects(dir.path(), &Exclusions::default()).unwrap();
        assert_eq!(ids(&projects), ["proj"]);
        assert_eq!(projects[0].docs.len(), 1);
        assert_eq!(projects[0].docs[0].file, "proj/one.md");
    }

    #[test]
    fn missing_root_is_an_error() {
        let dir = TempDir::new().unwrap();
        let err = scan_projects(&dir.path().join("nope"), &Exclusions::default()).unwrap_err();
        assert!(format!("{:#}", err).contains("failed to read directory"));
    }
}
