//! Draft record assembly
//!
//! Runs the section and field extractors over an issue body and checks that
//! the fields every published project needs are present. Everything else is
//! left to the schema gate.

use tracing::debug;

use crate::domain::{
    slugify, DraftLinks, DraftMedia, DraftOrganization, DraftRecord, DraftStatus,
    DraftTimestamps,
};

use super::fields::{extract_description, extract_field, extract_notes, extract_tags};
use super::media::{extract_images, extract_logo};
use super::pipeline::{IssueMeta, ParseError};
use super::section::{extract_section, extract_title};

pub const SECTION_DESCRIPTION: &str = "Description";
pub const SECTION_ORGANIZATION: &str = "Organization";
pub const SECTION_STATUS: &str = "Project Status";
pub const SECTION_TAGS: &str = "Tags";
pub const SECTION_MEDIA: &str = "Media";
pub const SECTION_LINKS: &str = "Links";

/// Extracts a draft record from an issue body
///
/// Fails with [`ParseError::MissingTitle`] before any section is read when
/// the body has no level-1 heading.
pub fn assemble(document: &str, meta: &IssueMeta) -> Result<DraftRecord, ParseError> {
    let title = extract_title(document).ok_or(ParseError::MissingTitle)?;
    let slug = slugify(&title);
    debug!(issue = meta.number, %title, %slug, "title extracted");

    let description = extract_section(document, SECTION_DESCRIPTION);
    let organization = extract_section(document, SECTION_ORGANIZATION);
    let status = extract_section(document, SECTION_STATUS);
    let tags = extract_section(document, SECTION_TAGS);
    let media = extract_section(document, SECTION_MEDIA);
    let links = extract_section(document, SECTION_LINKS);

    debug!(
        issue = meta.number,
        description = description.is_some(),
        organization = organization.is_some(),
        status = status.is_some(),
        tags = tags.is_some(),
        media = media.is_some(),
        links = links.is_some(),
        "sections extracted"
    );

    let logo = extract_logo(media.as_ref());
    let images = extract_images(media.as_ref(), &logo);

    let draft = DraftRecord {
        id: slug.clone(),
        issue_number: meta.number,
        title,
        slug,
        description: extract_description(description.as_ref()),
        organization: DraftOrganization {
            name: extract_field(organization.as_ref(), "Name"),
            short_name: extract_field(organization.as_ref(), "Short Name"),
            url: extract_field(organization.as_ref(), "URL"),
        },
        status: DraftStatus {
            state: extract_field(status.as_ref(), "State"),
            usage: extract_field(status.as_ref(), "Usage"),
            notes: extract_notes(status.as_ref()),
        },
        tags: extract_tags(tags.as_ref()),
        media: DraftMedia { logo, images },
        links: DraftLinks {
            homepage: extract_field(links.as_ref(), "Homepage"),
            repository: extract_field(links.as_ref(), "Repository"),
            documentation: extract_field(links.as_ref(), "Documentation"),
        },
        timestamps: DraftTimestamps {
            created_at: meta.created_at.clone(),
            last_updated_at: meta.updated_at.clone(),
        },
    };

    check_required(&draft)?;
    Ok(draft)
}

/// Reports the first required field that came out empty
///
/// Fields are checked in a fixed order so the same body always yields the
/// same diagnostic.
pub fn check_required(draft: &DraftRecord) -> Result<(), ParseError> {
    let required: [(&'static str, &str); 7] = [
        ("title", draft.title.as_str()),
        ("description", draft.description.as_str()),
        ("organization.name", draft.organization.name.as_str()),
        ("organization.shortName", draft.organization.short_name.as_str()),
        ("organization.url", draft.organization.url.as_str()),
        ("status.state", draft.status.state.as_str()),
        ("links.homepage", draft.links.homepage.as_str()),
    ];

    match required.iter().find(|(_, value)| value.trim().is_empty()) {
        Some((field, _)) => Err(ParseError::MissingRequiredField(*field)),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta() -> IssueMeta {
        IssueMeta::new(42, "2024-01-15T10:30:00Z", "2024-03-01T12:00:00Z")
    }

    const COMPLETE: &str = "# Mapeo Desktop

## Description
Offline mapping for territory monitoring.

## Organization
**Name:** Digital Democracy
**Short Name:** digidem
**URL:** https://www.digital-democracy.org

## Project Status
**State:** active
**Usage:** used
**Notes:** Superseded by CoMapeo
for most partners.

## Tags
Mapping, Offline

## Media
**Logo:** https://example.org/logo.png
**Images:**
https://example.org/logo.png
https://example.org/screen.png

## Links
**Homepage:** https://mapeo.app
**Repository:** https://github.com/digidem/mapeo-desktop
";

    #[test]
    fn assembles_complete_body() {
        let draft = assemble(COMPLETE, &meta()).unwrap();

        assert_eq!(draft.title, "Mapeo Desktop");
        assert_eq!(draft.slug, "mapeo-desktop");
        assert_eq!(draft.id, draft.slug);
        assert_eq!(draft.issue_number, 42);
        assert_eq!(draft.description, "Offline mapping for territory monitoring.");
        assert_eq!(draft.organization.short_name, "digidem");
        assert_eq!(draft.status.usage, "used");
        assert_eq!(draft.status.notes, "Superseded by CoMapeo for most partners.");
        assert_eq!(draft.tags, vec!["Mapping", "Offline"]);
        assert_eq!(draft.media.logo, "https://example.org/logo.png");
        assert_eq!(draft.media.images, vec!["https://example.org/screen.png"]);
        assert_eq!(draft.links.documentation, "");
        assert_eq!(draft.timestamps.created_at, "2024-01-15T10:30:00Z");
    }

    #[test]
    fn missing_title_fails_first() {
        let body = COMPLETE.replacen("# Mapeo Desktop", "Mapeo Desktop", 1);
        assert_eq!(assemble(&body, &meta()), Err(ParseError::MissingTitle));
    }

    #[test]
    fn empty_organization_names_first_missing_field() {
        let body = "# Tool\n\n## Description\nText\n\n## Organization\n\n## Links\n**Homepage:** https://x.org\n";
        assert_eq!(
            assemble(body, &meta()),
            Err(ParseError::MissingRequiredField("organization.name"))
        );
    }

    #[test]
    fn missing_description_reported_before_organization() {
        let body = "# Tool\n\n## Organization\n\n";
        assert_eq!(
            assemble(body, &meta()),
            Err(ParseError::MissingRequiredField("description"))
        );
    }

    #[test]
    fn missing_homepage_is_reported() {
        let body = COMPLETE.replace("**Homepage:** https://mapeo.app\n", "");
        assert_eq!(
            assemble(&body, &meta()),
            Err(ParseError::MissingRequiredField("links.homepage"))
        );
    }

    #[test]
    fn missing_usage_is_not_a_required_field() {
        let body = COMPLETE.replace("**Usage:** used\n", "");
        let draft = assemble(&body, &meta()).unwrap();
        assert_eq!(draft.status.usage, "");
    }

    #[test]
    fn check_required_accepts_complete_draft() {
        let draft = assemble(COMPLETE, &meta()).unwrap();
        assert_eq!(check_required(&draft), Ok(()));

        let mut blank_state = draft.clone();
        blank_state.status.state = "   ".to_string();
        assert_eq!(
            check_required(&blank_state),
            Err(ParseError::MissingRequiredField("status.state"))
        );
    }
}
