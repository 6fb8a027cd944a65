//! # Command-Line Interface
//!
//! Thin wrapper around the library: reads files, calls the parser or the
//! batch builder, prints results.
//!
//! ## Commands
//!
//! | Command | Purpose |
//! |---------|---------|
//! | `parse <FILE> -n <NUMBER>` | Print the record for one issue body |
//! | `build` | Parse an issue dump and write the catalog |
//!
//! ## Output Formats
//!
//! All commands support `--format` flag:
//! - `text` (default) - Human-readable output, pretty JSON for records
//! - `json` - Machine-parseable JSON
//!
//! ## Verbose Mode
//!
//! Use `--verbose` (or `-v`) for debug output on stderr:
//! ```bash
//! showcase --verbose build
//! ```
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod output;
mod parse_cmd;
mod build_cmd;

pub use app::{Cli, Commands, run};
pub use output::{Output, OutputFormat};
