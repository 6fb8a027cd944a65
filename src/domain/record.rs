//! Project record domain model
//!
//! A [`DraftRecord`] is what the extractors produce: every field is a raw
//! string, nothing is checked. A [`ProjectRecord`] is what the schema gate
//! hands out once every constraint holds. Project records are only built by
//! [`super::validate`] and expose read-only accessors, so a validated record
//! cannot be changed afterwards.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::slug::Slug;

/// A value that is not a member of a closed enumeration
#[derive(Debug, Error, PartialEq)]
#[error("expected one of {expected}, got '{value}'")]
pub struct EnumError {
    value: String,
    expected: &'static str,
}

/// Lifecycle state of a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectState {
    Active,
    Paused,
    Archived,
}

impl ProjectState {
    pub const EXPECTED: &'static str = "active, paused, archived";

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectState::Active => "active",
            ProjectState::Paused => "paused",
            ProjectState::Archived => "archived",
        }
    }
}

impl FromStr for ProjectState {
    type Err = EnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(ProjectState::Active),
            "paused" => Ok(ProjectState::Paused),
            "archived" => Ok(ProjectState::Archived),
            other => Err(EnumError {
                value: other.to_string(),
                expected: Self::EXPECTED,
            }),
        }
    }
}

impl fmt::Display for ProjectState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How widely a project is used
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Usage {
    Experimental,
    Used,
    WidelyUsed,
}

impl Usage {
    pub const EXPECTED: &'static str = "experimental, used, widely-used";

    pub fn as_str(&self) -> &'static str {
        match self {
            Usage::Experimental => "experimental",
            Usage::Used => "used",
            Usage::WidelyUsed => "widely-used",
        }
    }
}

impl FromStr for Usage {
    type Err = EnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "experimental" => Ok(Usage::Experimental),
            "used" => Ok(Usage::Used),
            "widely-used" => Ok(Usage::WidelyUsed),
            other => Err(EnumError {
                value: other.to_string(),
                expected: Self::EXPECTED,
            }),
        }
    }
}

impl fmt::Display for Usage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub name: String,
    pub short_name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Status {
    pub state: ProjectState,
    pub usage: Usage,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Media {
    /// Logo URL, empty when the issue has none
    pub logo: String,
    /// Screenshot URLs in order of appearance, never containing the logo
    pub images: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Links {
    pub homepage: String,
    pub repository: String,
    pub documentation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Timestamps {
    pub created_at: DateTime<Utc>,
    pub last_updated_at: DateTime<Utc>,
}

/// A validated project, as published in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub(super) id: Slug,
    pub(super) issue_number: u64,
    pub(super) title: String,
    pub(super) slug: Slug,
    pub(super) description: String,
    pub(super) organization: Organization,
    pub(super) status: Status,
    pub(super) tags: Vec<String>,
    pub(super) media: Media,
    pub(super) links: Links,
    pub(super) timestamps: Timestamps,
}

impl ProjectRecord {
    pub fn id(&self) -> &Slug {
        &self.id
    }

    pub fn issue_number(&self) -> u64 {
        self.issue_number
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn slug(&self) -> &Slug {
        &self.slug
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn organization(&self) -> &Organization {
        &self.organization
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    /// Tags exactly as written in the issue (order and duplicates kept)
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn media(&self) -> &Media {
        &self.media
    }

    pub fn links(&self) -> &Links {
        &self.links
    }

    pub fn timestamps(&self) -> &Timestamps {
        &self.timestamps
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftOrganization {
    pub name: String,
    pub short_name: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftStatus {
    pub state: String,
    pub usage: String,
    pub notes: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftMedia {
    pub logo: String,
    pub images: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftLinks {
    pub homepage: String,
    pub repository: String,
    pub documentation: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftTimestamps {
    pub created_at: String,
    pub last_updated_at: String,
}

/// Unvalidated extraction result, shaped like [`ProjectRecord`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftRecord {
    pub id: String,
    pub issue_number: u64,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub organization: DraftOrganization,
    pub status: DraftStatus,
    pub tags: Vec<String>,
    pub media: DraftMedia,
    pub links: DraftLinks,
    pub timestamps: DraftTimestamps,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_parses_members_only() {
        assert_eq!("active".parse::<ProjectState>(), Ok(ProjectState::Active));
        assert_eq!("paused".parse::<ProjectState>(), Ok(ProjectState::Paused));
        assert_eq!("archived".parse::<ProjectState>(), Ok(ProjectState::Archived));
        assert!("unknown".parse::<ProjectState>().is_err());
        assert!("Active".parse::<ProjectState>().is_err());
    }

    #[test]
    fn usage_parses_members_only() {
        assert_eq!("widely-used".parse::<Usage>(), Ok(Usage::WidelyUsed));
        assert!("unknown".parse::<Usage>().is_err());
        assert!("".parse::<Usage>().is_err());
    }

    #[test]
    fn enum_error_lists_expected_values() {
        let err = "unknown".parse::<Usage>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "expected one of experimental, used, widely-used, got 'unknown'"
        );
    }

    #[test]
    fn enums_serialize_to_wire_names() {
        assert_eq!(serde_json::to_string(&Usage::WidelyUsed).unwrap(), "\"widely-used\"");
        assert_eq!(serde_json::to_string(&ProjectState::Paused).unwrap(), "\"paused\"");
    }
}
