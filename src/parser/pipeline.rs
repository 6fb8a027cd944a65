//! Issue body to project record pipeline
//!
//! ```text
//! body ──► title ──► sections ──► required fields ──► schema gate
//!            │                         │                  │
//!            ▼                         ▼                  ▼
//!       MissingTitle      MissingRequiredField     SchemaViolations
//! ```
//!
//! Each body is processed independently; nothing is shared between calls.

use chrono::{SecondsFormat, Utc};
use thiserror::Error;
use tracing::debug;

use crate::domain::{validate, ProjectRecord, Violation};

use super::assemble::assemble;

/// Why an issue body did not produce a project record
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ParseError {
    #[error("Issue has no body text")]
    EmptyBody,

    #[error("No level-1 heading found for the project title")]
    MissingTitle,

    #[error("Missing required field: {0}")]
    MissingRequiredField(&'static str),

    #[error("Schema validation failed: {}", join_violations(.0))]
    SchemaViolations(Vec<Violation>),
}

fn join_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(Violation::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ParseError {
    /// Field paths this error points at (empty for body-level failures)
    pub fn fields(&self) -> Vec<&str> {
        match self {
            ParseError::EmptyBody | ParseError::MissingTitle => Vec::new(),
            ParseError::MissingRequiredField(field) => vec![*field],
            ParseError::SchemaViolations(violations) => {
                violations.iter().map(|v| v.field.as_str()).collect()
            }
        }
    }
}

/// Issue metadata supplied alongside the body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueMeta {
    pub number: u64,
    /// ISO-8601 creation time
    pub created_at: String,
    /// ISO-8601 last update time
    pub updated_at: String,
}

impl IssueMeta {
    pub fn new(number: u64, created_at: impl Into<String>, updated_at: impl Into<String>) -> Self {
        Self {
            number,
            created_at: created_at.into(),
            updated_at: updated_at.into(),
        }
    }

    /// Metadata stamped with the current time for both timestamps
    pub fn now(number: u64) -> Self {
        let now = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
        Self::new(number, now.clone(), now)
    }
}

/// Parses one issue body into a validated project record
pub fn parse_issue_body(body: &str, meta: &IssueMeta) -> Result<ProjectRecord, ParseError> {
    if body.trim().is_empty() {
        return Err(ParseError::EmptyBody);
    }

    let draft = assemble(body, meta)?;
    debug!(issue = meta.number, slug = %draft.slug, "required fields present");

    let record = validate(&draft).map_err(ParseError::SchemaViolations)?;
    debug!(issue = meta.number, slug = %record.slug(), "record validated");

    Ok(record)
}
