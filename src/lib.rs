//! Project Showcase - turns project-submission issues into a static catalog
//!
//! Each project is proposed as an issue whose markdown body follows a fixed
//! template. The parser extracts a typed [`ProjectRecord`] from the body,
//! the schema gate validates it, and the batch builder writes every accepted
//! record to the `{ "projects": [...] }` file the front end serves.

pub mod domain;
pub mod parser;
pub mod batch;
pub mod storage;
pub mod cli;

pub use domain::{ProjectRecord, ProjectState, Slug, Usage, Violation};
pub use parser::{parse_issue_body, IssueMeta, ParseError};
