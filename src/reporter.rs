//! Report formatting and printing utilities.
//!
//! This module is separate from the core library logic so the rewrite
//! engine can be used as a library without printing side effects.

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use crate::diagnostics::{Diagnostic, Severity};
use crate::engine::ExtractedEntry;

/// Success mark for consistent output formatting
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓
/// Failure mark for consistent output formatting
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print diagnostics in a cargo-style format.
///
/// Diagnostics are sorted and displayed with:
/// - Severity and message
/// - Clickable file location (path:line:col)
/// - Source code context with caret indicator
/// - Summary of total errors/warnings
pub fn print_report(diagnostics: &[Diagnostic]) {
    let mut sorted = diagnostics.to_vec();
    sorted.sort();

    // Calculate max line number width for alignment
    let max_line_width = sorted
        .iter()
        .filter_map(|d| d.line)
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(1);

    for diagnostic in &sorted {
        let severity_str = match diagnostic.severity {
            Severity::Error => "error".bold().red(),
            Severity::Warning => "warning".bold().yellow(),
        };

        println!(
            "{}: {}  {}",
            severity_str,
            diagnostic.message,
            diagnostic.construct.to_string().dimmed().cyan()
        );

        // Clickable location: --> path:line:col
        match (diagnostic.line, diagnostic.col) {
            (Some(line), Some(col)) => {
                println!(
                    "  {} {}:{}:{}",
                    "-->".blue(),
                    diagnostic.file_path,
                    line,
                    col
                );
            }
            _ => println!("  {} {}", "-->".blue(), diagnostic.file_path),
        }

        if let (Some(line), Some(col), Some(source_line)) =
            (diagnostic.line, diagnostic.col, diagnostic.source_line.as_deref())
        {
            let caret_char = match diagnostic.severity {
                Severity::Error => "^".red(),
                Severity::Warning => "^".yellow(),
            };

            println!("{:>width$} {}", "", "|".blue(), width = max_line_width);
            println!(
                "{:>width$} {} {}",
                line.to_string().blue(),
                "|".blue(),
                source_line,
                width = max_line_width
            );
            // Caret pointing to the column (col is 1-based). Use unicode
            // display width for correct positioning with CJK text.
            let prefix = if col > 1 {
                source_line.chars().take(col - 1).collect::<String>()
            } else {
                String::new()
            };
            let caret_padding = UnicodeWidthStr::width(prefix.as_str());
            println!(
                "{:>width$} {} {:>padding$}{}",
                "",
                "|".blue(),
                "",
                caret_char,
                width = max_line_width,
                padding = caret_padding
            );
        }

        println!(); // Empty line between diagnostics
    }

    let total_errors = sorted
        .iter()
        .filter(|d| d.severity == Severity::Error)
        .count();
    let total_warnings = sorted.len() - total_errors;
    let total_problems = total_errors + total_warnings;

    if total_problems > 0 {
        println!(
            "\n{} {} problems ({} {}, {} {})",
            FAILURE_MARK.red(),
            total_problems,
            total_errors,
            if total_errors == 1 { "error" } else { "errors" }.red(),
            total_warnings,
            if total_warnings == 1 {
                "warning"
            } else {
                "warnings"
            }
            .yellow()
        );
    }
}

/// Print the run summary for a clean run.
///
/// Displays the number of files checked and rewritten to give the user
/// confidence that the run actually covered the expected scope.
pub fn print_summary(
    source_files: usize,
    files_rewritten: usize,
    entries_extracted: usize,
    applied: bool,
) {
    let verb = if applied { "Rewrote" } else { "Would rewrite" };
    println!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Checked {} source {}. {} {} {} ({} {} extracted)",
            source_files,
            if source_files == 1 { "file" } else { "files" },
            verb,
            files_rewritten,
            if files_rewritten == 1 { "file" } else { "files" },
            entries_extracted,
            if entries_extracted == 1 {
                "entry"
            } else {
                "entries"
            }
        )
        .green()
    );
}

/// Print the extracted entries of a dry run so the user can inspect the
/// keys before applying.
pub fn print_dry_run_entries(entries: &[ExtractedEntry]) {
    if entries.is_empty() {
        return;
    }
    println!("{}", "Entries that would be extracted:".bold());
    for entry in entries {
        println!("  {}={}", entry.key.cyan(), entry.value);
    }
    println!(
        "\n{} {}",
        "hint:".bold().cyan(),
        "re-run with --apply to rewrite sources and write the bundle"
    );
}

/// Print the extracted entries of an applied run. Verbose-only: the
/// `.properties` files already carry this content.
pub fn print_entries(entries: &[ExtractedEntry]) {
    if entries.is_empty() {
        return;
    }
    println!("{}", "Extracted entries:".bold());
    for entry in entries {
        println!("  {}={}", entry.key.cyan(), entry.value);
    }
}

/// Print a warning about files the scanner skipped.
pub fn print_scan_warning(skipped_count: usize) {
    eprintln!(
        "{} {} path(s) could not be read during scanning",
        "warning:".bold().yellow(),
        skipped_count
    );
}
