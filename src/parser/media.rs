//! Logo and screenshot URLs from the `Media` section
//!
//! A `**Logo**` marker names a single URL, an `**Images**` marker starts
//! the screenshot list. URLs are matched as `https?://` followed by any
//! run of non-whitespace, exactly as written.

use regex::Regex;
use std::sync::LazyLock;

use super::section::Section;

static URL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"https?://\S+").unwrap());
static LOGO_MARKER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^\*\*logo").unwrap());
static IMAGES_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\*\*images").unwrap());

fn first_url(line: &str) -> Option<&str> {
    URL_RE.find(line).map(|m| m.as_str())
}

/// Finds the logo URL on the marker line or, failing that, the line after it
pub fn extract_logo(section: Option<&Section>) -> String {
    let Some(section) = section else {
        return String::new();
    };
    let Some(idx) = section.lines.iter().position(|l| LOGO_MARKER.is_match(l)) else {
        return String::new();
    };

    first_url(&section.lines[idx])
        .or_else(|| section.lines.get(idx + 1).and_then(|next| first_url(next)))
        .map(str::to_string)
        .unwrap_or_default()
}

/// Collects screenshot URLs, skipping any that equal the logo
///
/// With an `**Images**` marker only URLs after it count; without one every
/// URL in the section is a candidate.
pub fn extract_images(section: Option<&Section>, logo: &str) -> Vec<String> {
    let Some(section) = section else {
        return Vec::new();
    };

    let candidates = match section.lines.iter().position(|l| IMAGES_MARKER.is_match(l)) {
        Some(idx) => &section.lines[idx + 1..],
        None => &section.lines[..],
    };

    candidates
        .iter()
        .flat_map(|line| URL_RE.find_iter(line))
        .map(|m| m.as_str())
        .filter(|url| !url.is_empty() && *url != logo)
        .map(str::to_string)
        .collect()
}
