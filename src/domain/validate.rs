//! Schema gate for extracted records
//!
//! [`validate`] checks a [`DraftRecord`] against every constraint of the
//! published record shape and either returns the canonical
//! [`ProjectRecord`] or the full list of violations. It never stops at the
//! first problem.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use url::Url;

use super::record::{
    DraftRecord, EnumError, Links, Media, Organization, ProjectRecord, ProjectState, Status,
    Timestamps, Usage,
};
use super::slug::Slug;

pub const MAX_TITLE_CHARS: usize = 200;
pub const MAX_DESCRIPTION_CHARS: usize = 2000;
pub const MAX_SHORT_NAME_CHARS: usize = 50;
pub const MAX_TAG_CHARS: usize = 50;

/// A single failed constraint, keyed by the field's path in the published JSON
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub field: String,
    pub reason: String,
}

impl Violation {
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

/// Accumulates violations while the draft is walked field by field
#[derive(Default)]
struct Checker {
    violations: Vec<Violation>,
}

impl Checker {
    fn reject(&mut self, field: impl Into<String>, reason: impl Into<String>) {
        self.violations.push(Violation::new(field, reason));
    }

    /// Non-empty text with an optional character ceiling
    fn text(&mut self, field: &str, value: &str, max_chars: Option<usize>) {
        if value.trim().is_empty() {
            self.reject(field, "must not be empty");
            return;
        }

        if let Some(max) = max_chars {
            self.max_chars(field, value, max);
        }
    }

    fn max_chars(&mut self, field: &str, value: &str, max: usize) {
        let len = value.chars().count();
        if len > max {
            self.reject(field, format!("must be at most {} characters, got {}", max, len));
        }
    }

    fn slug(&mut self, field: &str, value: &str) -> Option<Slug> {
        match value.parse::<Slug>() {
            Ok(slug) => Some(slug),
            Err(e) => {
                self.reject(field, e.to_string());
                None
            }
        }
    }

    fn member<T>(&mut self, field: &str, value: &str, expected: &str) -> Option<T>
    where
        T: FromStr<Err = EnumError>,
    {
        if value.is_empty() {
            self.reject(field, format!("missing; expected one of {}", expected));
            return None;
        }

        match value.parse::<T>() {
            Ok(member) => Some(member),
            Err(e) => {
                self.reject(field, e.to_string());
                None
            }
        }
    }

    /// Absolute URL with a host; an empty value passes when the field is optional
    fn url(&mut self, field: &str, value: &str, required: bool) {
        if value.is_empty() {
            if required {
                self.reject(field, "must not be empty");
            }
            return;
        }

        if !is_absolute_url(value) {
            self.reject(field, format!("must be a valid absolute URL, got '{}'", value));
        }
    }

    fn timestamp(&mut self, field: &str, value: &str) -> Option<DateTime<Utc>> {
        let parsed = parse_timestamp(value);
        if parsed.is_none() {
            self.reject(field, format!("must be an ISO-8601 datetime, got '{}'", value));
        }
        parsed
    }
}

fn is_absolute_url(value: &str) -> bool {
    Url::parse(value)
        .map(|url| url.host_str().is_some_and(|host| !host.is_empty()))
        .unwrap_or(false)
}

/// Parses the ISO-8601 datetime forms issue metadata shows up in
///
/// RFC 3339 first, then a numeric offset without a colon (`+0000`), then no
/// offset at all, which is read as UTC.
fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Some(ts.with_timezone(&Utc));
    }

    if let Ok(ts) = DateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f%z") {
        return Some(ts.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

/// Validates a draft and produces the canonical record
pub fn validate(draft: &DraftRecord) -> Result<ProjectRecord, Vec<Violation>> {
    let mut check = Checker::default();

    if draft.issue_number == 0 {
        check.reject("issueNumber", "must be a positive integer");
    }

    check.text("title", &draft.title, Some(MAX_TITLE_CHARS));
    let slug = check.slug("slug", &draft.slug);
    let id = check.slug("id", &draft.id);
    if draft.id != draft.slug {
        check.reject("id", format!("must equal slug '{}'", draft.slug));
    }
    check.text("description", &draft.description, Some(MAX_DESCRIPTION_CHARS));

    let org = &draft.organization;
    check.text("organization.name", &org.name, None);
    check.text("organization.shortName", &org.short_name, Some(MAX_SHORT_NAME_CHARS));
    check.url("organization.url", &org.url, true);

    let state = check.member::<ProjectState>("status.state", &draft.status.state, ProjectState::EXPECTED);
    let usage = check.member::<Usage>("status.usage", &draft.status.usage, Usage::EXPECTED);

    for (i, tag) in draft.tags.iter().enumerate() {
        check.text(&format!("tags[{}]", i), tag, Some(MAX_TAG_CHARS));
    }

    let media = &draft.media;
    check.url("media.logo", &media.logo, false);
    for (i, image) in media.images.iter().enumerate() {
        let field = format!("media.images[{}]", i);
        check.url(&field, image, true);
        if !media.logo.is_empty() && image == &media.logo {
            check.reject(field, "must not repeat the logo URL");
        }
    }

    let links = &draft.links;
    check.url("links.homepage", &links.homepage, true);
    check.url("links.repository", &links.repository, false);
    check.url("links.documentation", &links.documentation, false);

    let created_at = check.timestamp("timestamps.createdAt", &draft.timestamps.created_at);
    let last_updated_at =
        check.timestamp("timestamps.lastUpdatedAt", &draft.timestamps.last_updated_at);

    match (id, slug, state, usage, created_at, last_updated_at) {
        (Some(id), Some(slug), Some(state), Some(usage), Some(created_at), Some(last_updated_at))
            if check.violations.is_empty() =>
        {
            Ok(ProjectRecord {
                id,
                issue_number: draft.issue_number,
                title: draft.title.clone(),
                slug,
                description: draft.description.clone(),
                organization: Organization {
                    name: org.name.clone(),
                    short_name: org.short_name.clone(),
                    url: org.url.clone(),
                },
                status: Status {
                    state,
                    usage,
                    notes: draft.status.notes.clone(),
                },
                tags: draft.tags.clone(),
                media: Media {
                    logo: media.logo.clone(),
                    images: media.images.clone(),
                },
                links: Links {
                    homepage: links.homepage.clone(),
                    repository: links.repository.clone(),
                    documentation: links.documentation.clone(),
                },
                timestamps: Timestamps {
                    created_at,
                    last_updated_at,
                },
            })
        }
        _ => Err(check.violations),
    }
}
