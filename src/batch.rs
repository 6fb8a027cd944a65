//! Batch catalog build
//!
//! Parses every selected issue of a dump and splits the results into
//! accepted projects and per-issue failures. A failing issue never stops
//! the batch. Issues are independent, so parsing fans out over rayon's
//! thread pool unless sequential mode is requested; results keep input
//! order either way.

use rayon::prelude::*;
use tracing::{info, warn};

use crate::domain::ProjectRecord;
use crate::parser::{parse_issue_body, ParseError};
use crate::storage::{BuildConfig, Issue};

/// Which issues to parse and how
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildOptions {
    /// Only issues carrying this label are parsed
    pub label: Option<String>,
    pub parallel: bool,
}

impl BuildOptions {
    /// Returns true if the issue should be parsed at all
    pub fn selects(&self, issue: &Issue) -> bool {
        if issue.is_pull_request() {
            return false;
        }

        match &self.label {
            Some(label) => issue.has_label(label),
            None => true,
        }
    }
}

impl From<&BuildConfig> for BuildOptions {
    fn from(config: &BuildConfig) -> Self {
        Self {
            label: config.label.clone(),
            parallel: config.parallel,
        }
    }
}

/// An issue that did not make it into the catalog
#[derive(Debug, Clone, PartialEq)]
pub struct Failure {
    pub issue_number: u64,
    pub error: ParseError,
}

/// Outcome of a batch build
#[derive(Debug, Default)]
pub struct BuildReport {
    /// Issues that went through the parser
    pub attempted: usize,
    /// Issues filtered out before parsing (pull requests, missing label)
    pub skipped: usize,
    pub projects: Vec<ProjectRecord>,
    pub failures: Vec<Failure>,
}

impl BuildReport {
    pub fn accepted(&self) -> usize {
        self.projects.len()
    }

    pub fn rejected(&self) -> usize {
        self.failures.len()
    }
}

/// Parses one fetched issue
pub fn parse_issue(issue: &Issue) -> Result<ProjectRecord, ParseError> {
    match issue.body.as_deref() {
        Some(body) => parse_issue_body(body, &issue.meta()),
        None => Err(ParseError::EmptyBody),
    }
}

/// Parses the selected issues and collects projects and failures
pub fn build_catalog(issues: &[Issue], options: &BuildOptions) -> BuildReport {
    let selected: Vec<&Issue> = issues.iter().filter(|i| options.selects(i)).collect();

    let outcomes: Vec<(u64, Result<ProjectRecord, ParseError>)> = if options.parallel {
        selected
            .par_iter()
            .map(|issue| (issue.number, parse_issue(issue)))
            .collect()
    } else {
        selected
            .iter()
            .map(|issue| (issue.number, parse_issue(issue)))
            .collect()
    };

    let mut report = BuildReport {
        attempted: selected.len(),
        skipped: issues.len() - selected.len(),
        ..BuildReport::default()
    };

    for (issue_number, outcome) in outcomes {
        match outcome {
            Ok(record) => report.projects.push(record),
            Err(error) => {
                warn!(issue = issue_number, %error, "issue rejected");
                report.failures.push(Failure {
                    issue_number,
                    error,
                });
            }
        }
    }

    info!(
        attempted = report.attempted,
        accepted = report.accepted(),
        rejected = report.rejected(),
        skipped = report.skipped,
        "catalog built"
    );

    report
}
