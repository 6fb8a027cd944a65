//! Issue dumps fetched from the tracker API
//!
//! The fetch step writes the raw API response (a JSON array of issues) to
//! disk; this module reads it back. Only the keys the pipeline needs are
//! modeled, everything else in the payload is ignored.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::parser::IssueMeta;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub name: String,
}

/// One issue as returned by the tracker API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    pub number: u64,

    #[serde(default)]
    pub title: String,

    /// Markdown body; `null` when the issue was opened without text
    #[serde(default)]
    pub body: Option<String>,

    #[serde(default)]
    pub created_at: String,

    #[serde(default)]
    pub updated_at: String,

    #[serde(default)]
    pub labels: Vec<Label>,

    /// Present when the entry is a pull request rather than an issue
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pull_request: Option<serde_json::Value>,
}

impl Issue {
    /// Returns the metadata handed to the parser
    pub fn meta(&self) -> IssueMeta {
        IssueMeta::new(self.number, self.created_at.clone(), self.updated_at.clone())
    }

    pub fn is_pull_request(&self) -> bool {
        self.pull_request.is_some()
    }

    /// Checks for a label by name (case-insensitive)
    pub fn has_label(&self, name: &str) -> bool {
        self.labels.iter().any(|l| l.name.eq_ignore_ascii_case(name))
    }
}

/// Reads an issue dump file
pub fn load_issues(path: &Path) -> Result<Vec<Issue>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read issues file: {}", path.display()))?;

    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse issues file: {}", path.display()))
}
