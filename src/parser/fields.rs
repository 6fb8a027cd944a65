//! Field-level extractors operating on a single section
//!
//! Every extractor takes an optional [`Section`] and degrades to an empty
//! value when the section is missing, so the assembler can decide later
//! which empties are fatal.

use regex::Regex;
use std::sync::LazyLock;

use super::section::Section;

static NOTES_MARKER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^\*\*notes").unwrap());

/// Removes markdown bold markers and surrounding whitespace
pub(crate) fn strip_bold(text: &str) -> String {
    text.replace("**", "").trim().to_string()
}

/// Builds the `Key: value` matcher for a field label
///
/// Accepts `Key: v`, `**Key**: v`, `**Key:** v` and the same behind a list
/// bullet. The key is matched case-insensitively.
fn field_pattern(key: &str) -> Option<Regex> {
    let pattern = format!(
        r"(?i)^(?:[-*+]\s+)?\*{{0,2}}{}\*{{0,2}}\s*:(.*)$",
        regex::escape(key)
    );
    Regex::new(&pattern).ok()
}

/// Extracts the value of a `Key: value` line
///
/// When the key's line carries no value, the next line's text is used
/// instead. That line is taken as-is, even if it is another field.
pub fn extract_field(section: Option<&Section>, key: &str) -> String {
    let Some(section) = section else {
        return String::new();
    };
    let Some(pattern) = field_pattern(key) else {
        return String::new();
    };

    for (idx, line) in section.lines.iter().enumerate() {
        let Some(caps) = pattern.captures(line) else {
            continue;
        };

        let value = caps.get(1).map(|m| strip_bold(m.as_str())).unwrap_or_default();
        if !value.is_empty() {
            return value;
        }

        return section
            .lines
            .get(idx + 1)
            .map(|next| strip_bold(next))
            .unwrap_or_default();
    }

    String::new()
}

/// Splits a comma-separated section into labels (order and duplicates kept)
pub fn extract_tags(section: Option<&Section>) -> Vec<String> {
    let Some(section) = section else {
        return Vec::new();
    };

    section
        .raw_text
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Normalizes a description block into paragraphs separated by blank lines
pub fn extract_description(section: Option<&Section>) -> String {
    let Some(section) = section else {
        return String::new();
    };

    section
        .raw_text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Collects the free-text notes that follow a `**Notes:**` marker
///
/// Continuation lines are gathered until the next bold field marker.
pub fn extract_notes(section: Option<&Section>) -> String {
    let Some(section) = section else {
        return String::new();
    };
    let Some(start) = section.lines.iter().position(|l| NOTES_MARKER.is_match(l)) else {
        return String::new();
    };

    let mut fragments: Vec<String> = Vec::new();

    let first = section.lines[start]
        .split_once(':')
        .map(|(_, rest)| strip_bold(rest))
        .unwrap_or_default();
    if !first.is_empty() {
        fragments.push(first);
    }

    for line in &section.lines[start + 1..] {
        if line.starts_with("**") {
            break;
        }
        if !line.is_empty() {
            fragments.push(line.clone());
        }
    }

    fragments.join(" ").trim().to_string()
}
