//! Catalog file for the static front end
//!
//! The catalog is a single JSON document, `{ "projects": [...] }`, served
//! as a static asset. Writes go through a temp file and a rename so the
//! site never sees a half-written catalog.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::domain::ProjectRecord;

#[derive(Serialize)]
struct Catalog<'a> {
    projects: &'a [ProjectRecord],
}

/// Renders the catalog document
pub fn render_catalog(projects: &[ProjectRecord]) -> Result<String> {
    let mut content = serde_json::to_string_pretty(&Catalog { projects })
        .context("Failed to serialize catalog")?;
    content.push('\n');
    Ok(content)
}

/// Store for the published catalog file
pub struct CatalogStore {
    path: PathBuf,
}

impl CatalogStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path of the catalog file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes the catalog atomically (temp file + rename)
    pub fn write(&self, projects: &[ProjectRecord]) -> Result<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
        }

        let content = render_catalog(projects)?;
        let temp_path = self.path.with_extension("json.tmp");

        fs::write(&temp_path, &content)
            .with_context(|| format!("Failed to write temp file: {}", temp_path.display()))?;

        fs::rename(&temp_path, &self.path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                temp_path.display(),
                self.path.display()
            )
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{parse_issue_body, IssueMeta};
    use tempfile::TempDir;

    const BODY: &str = "# Terrastories

## Description
Oral storytelling maps.

## Organization
**Name:** Ruby for Good
**Short Name:** rubyforgood
**URL:** https://rubyforgood.org

## Project Status
**State:** active
**Usage:** used

## Links
**Homepage:** https://terrastories.app
";

    fn record() -> ProjectRecord {
        let meta = IssueMeta::new(5, "2024-01-15T10:30:00Z", "2024-01-20T09:00:00Z");
        parse_issue_body(BODY, &meta).unwrap()
    }

    #[test]
    fn renders_projects_wrapper_with_camel_case_keys() {
        let json: serde_json::Value =
            serde_json::from_str(&render_catalog(&[record()]).unwrap()).unwrap();

        let project = &json["projects"][0];
        assert_eq!(project["id"], "terrastories");
        assert_eq!(project["issueNumber"], 5);
        assert_eq!(project["organization"]["shortName"], "rubyforgood");
        assert_eq!(project["status"]["usage"], "used");
        assert_eq!(project["status"]["notes"], "");
        assert_eq!(project["tags"], serde_json::json!([]));
        assert_eq!(project["media"]["logo"], "");
        assert_eq!(project["timestamps"]["createdAt"], "2024-01-15T10:30:00Z");
        assert_eq!(project["timestamps"]["lastUpdatedAt"], "2024-01-20T09:00:00Z");
    }

    #[test]
    fn empty_catalog() {
        let json: serde_json::Value = serde_json::from_str(&render_catalog(&[]).unwrap()).unwrap();
        assert_eq!(json, serde_json::json!({ "projects": [] }));
    }

    #[test]
    fn write_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let store = CatalogStore::new(dir.path().join("public").join("projects.json"));

        store.write(&[record()]).unwrap();

        let content = fs::read_to_string(store.path()).unwrap();
        assert!(content.contains("\"projects\""));
        assert!(content.ends_with('\n'));
    }

    #[test]
    fn atomic_write_no_temp_file_left() {
        let dir = TempDir::new().unwrap();
        let store = CatalogStore::new(dir.path().join("projects.json"));

        store.write(&[record()]).unwrap();

        assert!(!dir.path().join("projects.json.tmp").exists());
        assert!(store.path().exists());
    }

    #[test]
    fn write_replaces_previous_catalog() {
        let dir = TempDir::new().unwrap();
        let store = CatalogStore::new(dir.path().join("projects.json"));

        store.write(&[record()]).unwrap();
        store.write(&[]).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();
        assert_eq!(json["projects"].as_array().unwrap().len(), 0);
    }
}
