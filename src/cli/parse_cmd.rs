//! `showcase parse` - one issue body to one project record

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use super::output::Output;
use crate::parser::{parse_issue_body, IssueMeta};

/// Parses an issue body file and prints the record as JSON
pub fn run(
    output: &Output,
    file: &Path,
    issue_number: u64,
    created_at: Option<String>,
    updated_at: Option<String>,
) -> Result<()> {
    let body = fs::read_to_string(file)
        .with_context(|| format!("Failed to read issue body: {}", file.display()))?;

    let defaults = IssueMeta::now(issue_number);
    let meta = IssueMeta::new(
        issue_number,
        created_at.unwrap_or(defaults.created_at),
        updated_at.unwrap_or(defaults.updated_at),
    );
    output.verbose_ctx(
        "parse",
        &format!("Timestamps: created {}, updated {}", meta.created_at, meta.updated_at),
    );

    let record = parse_issue_body(&body, &meta)
        .with_context(|| format!("Failed to parse issue #{}", issue_number))?;

    output.data(&record)
}
