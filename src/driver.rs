//! Per-file drive of the rewrite engine and run-wide aggregation.
//!
//! Each file goes through read → parse → transform → splice → write.
//! Files are processed in parallel, one `RunContext` per file, and the
//! results are collected in deterministic input order before the
//! sequential aggregation step. I/O failures abort the whole run; a
//! file that does not parse is skipped with a diagnostic.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use rayon::prelude::*;

use crate::config::Config;
use crate::diagnostics::Diagnostic;
use crate::engine::{transform, ExtractedEntry, RunContext};
use crate::parser::parse_java;
use crate::scanner::scan_files;
use crate::{emit, reporter};

/// Outcome of processing one source file.
struct FileOutcome {
    entries: Vec<ExtractedEntry>,
    diagnostics: Vec<Diagnostic>,
    /// Number of substitutions made in this file's tree.
    substitutions: usize,
}

/// Aggregated outcome of a whole run.
pub struct RunResult {
    pub source_files_checked: usize,
    pub files_rewritten: usize,
    pub entries: Vec<ExtractedEntry>,
    pub diagnostics: Vec<Diagnostic>,
    pub written_resources: Vec<PathBuf>,
    /// False for a dry run: nothing was written.
    pub applied: bool,
}

impl RunResult {
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == crate::diagnostics::Severity::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics.len() - self.error_count()
    }
}

/// Run the rewriter over every Java file under `project_dir`.
///
/// With `apply` false this is a dry run: sources and resource files are
/// left untouched while entries and diagnostics are still collected.
pub fn run_transform(
    project_dir: &Path,
    config: &Config,
    apply: bool,
    verbose: bool,
) -> Result<RunResult> {
    let bundle_name = config.resolve_bundle_name(project_dir);
    let base_dir = project_dir.to_string_lossy();

    let scan = scan_files(&base_dir, &config.includes, &config.ignores, verbose);
    if verbose && scan.skipped_count > 0 {
        reporter::print_scan_warning(scan.skipped_count);
    }

    let files: Vec<String> = scan.files.into_iter().collect();

    let outcomes: Vec<FileOutcome> = files
        .par_iter()
        .map(|path| process_file(path, config, &bundle_name, apply))
        .collect::<Result<Vec<_>>>()?;

    let mut entries = Vec::new();
    let mut diagnostics = Vec::new();
    let mut files_rewritten = 0;
    for outcome in outcomes {
        if outcome.substitutions > 0 {
            files_rewritten += 1;
        }
        entries.extend(outcome.entries);
        diagnostics.extend(outcome.diagnostics);
    }

    let mut written_resources = Vec::new();
    if apply && !entries.is_empty() {
        let resources_dir = project_dir.join(&config.resources_root);
        written_resources = emit::write_bundle(
            &resources_dir,
            &bundle_name,
            &config.region,
            &entries,
        )?;
    }

    Ok(RunResult {
        source_files_checked: files.len(),
        files_rewritten,
        entries,
        diagnostics,
        written_resources,
        applied: apply,
    })
}

fn process_file(
    path: &str,
    config: &Config,
    bundle_name: &str,
    apply: bool,
) -> Result<FileOutcome> {
    let source =
        fs::read_to_string(path).with_context(|| format!("Failed to read source file: {}", path))?;

    let mut tree = match parse_java(&source) {
        Ok(tree) => tree,
        Err(err) => {
            return Ok(FileOutcome {
                entries: Vec::new(),
                diagnostics: vec![Diagnostic::parse_error(path, &err.to_string())],
                substitutions: 0,
            });
        }
    };

    let mut ctx = RunContext::new(
        &config.template,
        bundle_name,
        path,
        config.static_fields.into(),
    );
    transform(&mut tree, &mut ctx);

    let substitutions = tree.edit_count();
    if apply && substitutions > 0 {
        fs::write(path, tree.render())
            .with_context(|| format!("Failed to write rewritten source: {}", path))?;
    }

    let (entries, diagnostics) = ctx.into_parts();
    Ok(FileOutcome {
        entries,
        diagnostics,
        substitutions,
    })
}
