//! `showcase build` - issue dump to published catalog

use std::path::PathBuf;

use anyhow::Result;

use super::output::Output;
use crate::batch::{build_catalog, BuildOptions, BuildReport};
use crate::storage::{load_issues, CatalogStore, Config};

/// Command-line arguments for a build; flags win over the config file
pub struct BuildArgs {
    pub config: Option<PathBuf>,
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub label: Option<String>,
    pub sequential: bool,
    pub fail_on_error: bool,
}

pub fn run(output: &Output, args: BuildArgs) -> Result<()> {
    let config = Config::load(args.config.as_deref())?;
    let mut build = config.build;

    if let Some(input) = args.input {
        build.input = input;
    }
    if let Some(catalog) = args.output {
        build.output = catalog;
    }
    if args.label.is_some() {
        build.label = args.label;
    }
    if args.sequential {
        build.parallel = false;
    }

    output.verbose_ctx(
        "build",
        &format!(
            "input={}, output={}, label={:?}, parallel={}",
            build.input.display(),
            build.output.display(),
            build.label,
            build.parallel
        ),
    );

    let issues = load_issues(&build.input)?;
    output.verbose_ctx("build", &format!("Loaded {} issues", issues.len()));

    let report = build_catalog(&issues, &BuildOptions::from(&build));

    let store = CatalogStore::new(&build.output);
    store.write(&report.projects)?;

    print_summary(output, &report, &store)?;

    if args.fail_on_error && report.rejected() > 0 {
        anyhow::bail!("{} of {} issues rejected", report.rejected(), report.attempted);
    }

    Ok(())
}

fn print_summary(output: &Output, report: &BuildReport, store: &CatalogStore) -> Result<()> {
    if output.is_json() {
        let failures: Vec<_> = report
            .failures
            .iter()
            .map(|f| {
                serde_json::json!({
                    "issue": f.issue_number,
                    "reason": f.error.to_string(),
                    "fields": f.error.fields(),
                })
            })
            .collect();

        output.data(&serde_json::json!({
            "output": store.path().display().to_string(),
            "attempted": report.attempted,
            "accepted": report.accepted(),
            "rejected": report.rejected(),
            "skipped": report.skipped,
            "failures": failures,
        }))?;
        return Ok(());
    }

    output.success(&format!("Wrote {}", store.path().display()));
    println!("  attempted: {}", report.attempted);
    println!("  accepted:  {}", report.accepted());
    println!("  rejected:  {}", report.rejected());
    if report.skipped > 0 {
        println!("  skipped:   {}", report.skipped);
    }

    if !report.failures.is_empty() {
        println!();
        println!("Rejected issues:");
        for failure in &report.failures {
            println!("  #{:<6} {}", failure.issue_number, failure.error);
        }
    }

    Ok(())
}
