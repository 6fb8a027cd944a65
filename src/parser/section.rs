//! Heading-delimited sections of an issue body
//!
//! Issue bodies follow a fixed template: a level-1 title followed by
//! `##`/`###` headings such as `Organization` or `Media`. A section runs
//! from its heading to the next heading (levels 1-3) or horizontal rule.
//! Deeper headings (`####` and below) are treated as body text.

use regex::Regex;
use std::sync::LazyLock;

static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#{1,3}\s+(.+)$").unwrap());
static TITLE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#\s+(.+)$").unwrap());
static RULE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:-{3,}|\*{3,}|_{3,})$").unwrap());

/// A named block of an issue body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Heading name the section was looked up by
    pub name: String,
    /// Section lines rejoined with newlines, then trimmed
    pub raw_text: String,
    /// Each section line, trimmed (blank lines kept as empty strings)
    pub lines: Vec<String>,
}

impl Section {
    fn from_lines(name: &str, lines: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            raw_text: lines.join("\n").trim().to_string(),
            lines: lines.iter().map(|l| l.trim().to_string()).collect(),
        }
    }
}

enum ScanState {
    BeforeSection,
    InSection,
}

/// Returns the heading text if the (trimmed) line is a level 1-3 heading
fn heading_text(line: &str) -> Option<&str> {
    HEADING_RE
        .captures(line)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim())
}

fn is_boundary(line: &str) -> bool {
    HEADING_RE.is_match(line) || RULE_RE.is_match(line)
}

/// Extracts the first section whose heading matches `name` (case-insensitive)
pub fn extract_section(document: &str, name: &str) -> Option<Section> {
    let target = name.trim().to_lowercase();
    let mut state = ScanState::BeforeSection;
    let mut collected: Vec<&str> = Vec::new();

    for line in document.lines() {
        let trimmed = line.trim();

        match state {
            ScanState::BeforeSection => {
                if heading_text(trimmed).is_some_and(|text| text.to_lowercase() == target) {
                    state = ScanState::InSection;
                }
            }
            ScanState::InSection => {
                if is_boundary(trimmed) {
                    break;
                }
                collected.push(line);
            }
        }
    }

    match state {
        ScanState::BeforeSection => None,
        ScanState::InSection => Some(Section::from_lines(name, &collected)),
    }
}

/// Extracts the text of the first level-1 heading
pub fn extract_title(document: &str) -> Option<String> {
    document.lines().find_map(|line| {
        TITLE_RE
            .captures(line.trim())
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().trim().to_string())
            .filter(|title| !title.is_empty())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = "# My Project

## Description

First paragraph.

Second paragraph.

## Organization
**Name:** Digital Democracy
---
Trailing text outside any section.

### Tags
Maps, Data
#### Not a boundary
More tags
";

    #[test]
    fn extracts_section_until_next_heading() {
        let section = extract_section(BODY, "Description").unwrap();

        assert_eq!(section.name, "Description");
        assert_eq!(section.raw_text, "First paragraph.\n\nSecond paragraph.");
        assert_eq!(
            section.lines,
            vec!["", "First paragraph.", "", "Second paragraph.", ""]
        );
    }

    #[test]
    fn horizontal_rule_ends_section() {
        let section = extract_section(BODY, "Organization").unwrap();
        assert_eq!(section.lines, vec!["**Name:** Digital Democracy"]);
    }

    #[test]
    fn deep_headings_are_section_text() {
        let section = extract_section(BODY, "Tags").unwrap();
        assert_eq!(section.raw_text, "Maps, Data\n#### Not a boundary\nMore tags");
    }

    #[test]
    fn heading_match_is_case_insensitive() {
        assert!(extract_section(BODY, "organization").is_some());
        assert!(extract_section(BODY, "  TAGS ").is_some());
    }

    #[test]
    fn missing_section_is_none() {
        assert_eq!(extract_section(BODY, "Media"), None);
        assert_eq!(extract_section(BODY, "Descr"), None);
    }

    #[test]
    fn first_matching_heading_wins() {
        let body = "## Links\nfirst\n## Links\nsecond\n";
        let section = extract_section(body, "Links").unwrap();
        assert_eq!(section.raw_text, "first");
    }

    #[test]
    fn section_at_end_of_document() {
        let body = "## Media\n**Logo:** https://example.org/logo.png";
        let section = extract_section(body, "Media").unwrap();
        assert_eq!(section.raw_text, "**Logo:** https://example.org/logo.png");
    }

    #[test]
    fn empty_section_has_empty_text() {
        let body = "## Organization\n\n## Tags\nA";
        let section = extract_section(body, "Organization").unwrap();
        assert_eq!(section.raw_text, "");
    }

    #[test]
    fn other_rule_styles_end_section() {
        let body = "## Tags\nA, B\n***\nC\n";
        assert_eq!(extract_section(body, "Tags").unwrap().raw_text, "A, B");

        let body = "## Tags\nA, B\n_____\nC\n";
        assert_eq!(extract_section(body, "Tags").unwrap().raw_text, "A, B");
    }

    #[test]
    fn title_is_first_level_one_heading() {
        assert_eq!(extract_title(BODY), Some("My Project".to_string()));
        assert_eq!(extract_title("## Only Sub\n# Real Title\n# Second"), Some("Real Title".to_string()));
    }

    #[test]
    fn title_requires_single_hash() {
        assert_eq!(extract_title("## Description\ntext"), None);
        assert_eq!(extract_title("#NoSpace"), None);
        assert_eq!(extract_title(""), None);
    }

    #[test]
    fn crlf_line_endings_are_handled() {
        let body = "# Title\r\n## Tags\r\nA, B\r\n## Media\r\n";
        assert_eq!(extract_title(body), Some("Title".to_string()));
        assert_eq!(extract_section(body, "Tags").unwrap().lines, vec!["A, B"]);
    }
}
