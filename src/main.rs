//! Project Showcase - catalog builder for project-submission issues

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = project_showcase::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
