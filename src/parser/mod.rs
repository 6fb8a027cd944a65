//! # Issue Body Parser
//!
//! Turns the markdown body of a project-submission issue into a
//! [`ProjectRecord`](crate::domain::ProjectRecord).
//!
//! ## Expected Layout
//!
//! ```text
//! # CoMapeo Config Spreadsheet Plugin        <- title (level-1 heading)
//!
//! ## Description                             <- paragraphs
//! ## Organization                            <- **Name:** / **Short Name:** / **URL:**
//! ## Project Status                          <- **State:** / **Usage:** / **Notes:**
//! ## Tags                                    <- comma separated
//! ## Media                                   <- **Logo:** / **Images:**
//! ## Links                                   <- **Homepage:** / **Repository:** / **Documentation:**
//! ```
//!
//! Sections are found by a line scanner, not a markdown parser. Only the
//! heading vocabulary above is understood.
//!
//! ## Entry Point
//!
//! Call [`parse_issue_body()`] with the body and its [`IssueMeta`].

mod section;
mod fields;
mod media;
mod assemble;
mod pipeline;

pub use section::{extract_section, extract_title, Section};
pub use fields::{extract_description, extract_field, extract_notes, extract_tags};
pub use media::{extract_images, extract_logo};
pub use assemble::{assemble, check_required};
pub use pipeline::{parse_issue_body, IssueMeta, ParseError};
