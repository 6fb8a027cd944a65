//! # Storage Layer
//!
//! File formats the showcase builder reads and writes.
//!
//! | Data | Format | Default Location |
//! |------|--------|------------------|
//! | Issue dump | JSON array (tracker API payload) | `issues.json` |
//! | Catalog | JSON `{ "projects": [...] }` | `public/projects.json` |
//! | Config | TOML | `showcase.toml` |
//!
//! ## Key Types
//!
//! - [`Issue`] - One fetched issue with its body and metadata
//! - [`CatalogStore`] - Atomic writer for the published catalog
//! - [`Config`] - Build configuration

mod issues;
mod catalog;
mod config;

pub use issues::{load_issues, Issue, Label};
pub use catalog::{render_catalog, CatalogStore};
pub use config::{BuildConfig, Config, ConfigError, CONFIG_FILE};
