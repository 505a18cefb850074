//! Resource bundle emission.
//!
//! The run-wide aggregate is written as newline-terminated `key=value`
//! lines. Values go out verbatim: `=`, `:` and control characters are
//! not escaped, which is a known limitation of the format.

use std::{fs, path::Path};

use anyhow::{Context, Result};

use crate::engine::ExtractedEntry;

pub fn properties_text(entries: &[ExtractedEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        out.push_str(&entry.key);
        out.push('=');
        out.push_str(&entry.value);
        out.push('\n');
    }
    out
}

/// Write the bundle as two sibling files of identical content: the base
/// `{bundle}.properties` and the region-qualified
/// `{bundle}_{region}.properties`, both UTF-8.
///
/// Returns the paths written.
pub fn write_bundle(
    resources_dir: &Path,
    bundle_name: &str,
    region: &str,
    entries: &[ExtractedEntry],
) -> Result<Vec<std::path::PathBuf>> {
    let text = properties_text(entries);
    fs::create_dir_all(resources_dir).with_context(|| {
        format!(
            "Failed to create resources directory: {}",
            resources_dir.display()
        )
    })?;

    let base = resources_dir.join(format!("{}.properties", bundle_name));
    let regional = resources_dir.join(format!("{}_{}.properties", bundle_name, region));
    for path in [&base, &regional] {
        fs::write(path, &text)
            .with_context(|| format!("Failed to write resource file: {}", path.display()))?;
    }
    Ok(vec![base, regional])
}
