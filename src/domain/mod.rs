//! Domain models for the project showcase
//!
//! Contains the record types, slug derivation and the schema gate without
//! any I/O concerns.

mod slug;
mod record;
mod validate;

pub use slug::{slugify, Slug, SlugError, FALLBACK_SLUG};
pub use record::{
    DraftLinks, DraftMedia, DraftOrganization, DraftRecord, DraftStatus, DraftTimestamps,
    EnumError, Links, Media, Organization, ProjectRecord, ProjectState, Status, Timestamps, Usage,
};
pub use validate::{
    validate, Violation, MAX_DESCRIPTION_CHARS, MAX_SHORT_NAME_CHARS, MAX_TAG_CHARS,
    MAX_TITLE_CHARS,
};
