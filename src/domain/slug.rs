//! URL-safe identifiers derived from project titles
//!
//! Slug format: lowercase ASCII letters and digits separated by single
//! hyphens, never starting or ending with a hyphen
//! (e.g., `comapeo-config-spreadsheet-plugin`).
//!
//! A slug is a pure function of the title. Titles that reduce to nothing
//! (empty, or punctuation only) map to [`FALLBACK_SLUG`].

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use thiserror::Error;

/// Slug used when a title contains no letters or digits
pub const FALLBACK_SLUG: &str = "unknown";

static NON_SLUG_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z0-9]+").unwrap());

#[derive(Debug, Error, PartialEq)]
pub enum SlugError {
    #[error("Slug must not be empty")]
    Empty,

    #[error("Invalid slug: expected lowercase letters, digits and hyphens, got '{0}'")]
    InvalidCharacters(String),

    #[error("Invalid slug: must not start or end with a hyphen, got '{0}'")]
    EdgeHyphen(String),
}

/// Derives a slug from a title
///
/// Lowercases, collapses every run of characters outside `[a-z0-9]` into a
/// single hyphen, then strips hyphens from both ends.
pub fn slugify(title: &str) -> String {
    let lowered = title.to_lowercase();
    let hyphenated = NON_SLUG_RUN.replace_all(&lowered, "-");
    let trimmed = hyphenated.trim_matches('-');

    if trimmed.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        trimmed.to_string()
    }
}

/// A validated slug
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Slug(String);

impl Slug {
    /// Creates the slug for a title
    pub fn from_title(title: &str) -> Self {
        Self(slugify(title))
    }

    /// Returns the slug as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Slug {
    type Err = SlugError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(SlugError::Empty);
        }

        if !s.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-') {
            return Err(SlugError::InvalidCharacters(s.to_string()));
        }

        if s.starts_with('-') || s.ends_with('-') {
            return Err(SlugError::EdgeHyphen(s.to_string()));
        }

        Ok(Self(s.to_string()))
    }
}

impl TryFrom<String> for Slug {
    type Error = SlugError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Slug> for String {
    fn from(slug: Slug) -> Self {
        slug.0
    }
}
