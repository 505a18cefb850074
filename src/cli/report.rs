//! User-facing output for CLI command outcomes.

use colored::Colorize;

use super::run::CommandOutcome;
use crate::driver::RunResult;
use crate::reporter;

pub fn print(outcome: &CommandOutcome, verbose: bool) {
    match outcome {
        CommandOutcome::Transform(result) => print_transform(result, verbose),
        CommandOutcome::Init { path } => {
            println!(
                "{} Created {}",
                reporter::SUCCESS_MARK.green(),
                path.display()
            );
        }
    }
}

fn print_transform(result: &RunResult, verbose: bool) {
    if !result.diagnostics.is_empty() {
        reporter::print_report(&result.diagnostics);
    }

    if !result.applied {
        reporter::print_dry_run_entries(&result.entries);
    } else if verbose {
        reporter::print_entries(&result.entries);
    }

    for path in &result.written_resources {
        println!("{} Wrote {}", reporter::SUCCESS_MARK.green(), path.display());
    }

    if result.diagnostics.is_empty() {
        reporter::print_summary(
            result.source_files_checked,
            result.files_rewritten,
            result.entries.len(),
            result.applied,
        );
    }
}
