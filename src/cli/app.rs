//! Main CLI application structure

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use super::output::{Output, OutputFormat};
use super::{build_cmd, parse_cmd};

#[derive(Parser)]
#[command(name = "showcase")]
#[command(author, version, about = "Build the project showcase catalog from submission issues")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Path to the configuration file (defaults to ./showcase.toml)
    #[arg(long, global = true, env = "SHOWCASE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a single issue body and print the project record
    Parse {
        /// File containing the issue body (markdown)
        file: PathBuf,

        /// Issue number
        #[arg(long, short = 'n', value_parser = clap::value_parser!(u64).range(1..))]
        issue_number: u64,

        /// Creation time (ISO-8601, defaults to now)
        #[arg(long)]
        created_at: Option<String>,

        /// Last update time (ISO-8601, defaults to now)
        #[arg(long)]
        updated_at: Option<String>,
    },

    /// Build the catalog from an issue dump
    Build {
        /// Issue dump (JSON array from the tracker API)
        #[arg(long, short)]
        input: Option<PathBuf>,

        /// Catalog file to write
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Only parse issues carrying this label
        #[arg(long)]
        label: Option<String>,

        /// Parse issues one at a time instead of on a thread pool
        #[arg(long)]
        sequential: bool,

        /// Exit with an error if any issue was rejected
        #[arg(long)]
        fail_on_error: bool,
    },
}

/// Installs the stderr log subscriber; `RUST_LOG` overrides the default level
fn init_logging(verbose: bool) {
    let default_level = if verbose { "project_showcase=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let output = Output::new(cli.format, cli.verbose);

    output.verbose("showcase starting");

    match cli.command {
        Commands::Parse {
            file,
            issue_number,
            created_at,
            updated_at,
        } => {
            output.verbose_ctx("parse", &format!("Parsing {} as issue #{}", file.display(), issue_number));
            parse_cmd::run(&output, &file, issue_number, created_at, updated_at)?
        }

        Commands::Build {
            input,
            output: catalog,
            label,
            sequential,
            fail_on_error,
        } => {
            let args = build_cmd::BuildArgs {
                config: cli.config,
                input,
                output: catalog,
                label,
                sequential,
                fail_on_error,
            };
            build_cmd::run(&output, args)?
        }
    }

    output.verbose("Command completed successfully");
    Ok(())
}
