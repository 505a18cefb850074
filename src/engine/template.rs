//! Replacement-expression template rendering.
//!
//! The template carries three placeholder tokens: `${value}` (the
//! generated key), `${propertyBundleName}` and `${classSimpleName}`.
//! Substitution happens in that fixed order; the tokens are literal, so
//! a substitution's output is never re-scanned. Unknown `${...}` tokens
//! pass through verbatim.

use std::sync::LazyLock;

use regex::Regex;

/// Segment separators of a file identifier: path separators and dots.
static SEPARATORS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\\/.]+").unwrap());

/// Token marking the file extension when scanning for the simple name.
const EXTENSION_MARKER: &str = "java";

const FALLBACK_SIMPLE_NAME: &str = "Object";

pub fn render(template: &str, key: &str, bundle_name: &str, file_identifier: &str) -> String {
    let result = template.replace("${value}", key);
    let result = result.replace("${propertyBundleName}", bundle_name);
    result.replace("${classSimpleName}", &class_simple_name(file_identifier))
}

/// Derive the simple class name from a file identifier.
///
/// The identifier is split on path/dot separators; scanning from the
/// end, the first segment equal (case-insensitively) to `java` marks
/// the extension, and the nearest non-blank segment before it is the
/// simple name. `"Object"` when nothing qualifies.
fn class_simple_name(file_identifier: &str) -> String {
    let segments: Vec<&str> = SEPARATORS.split(file_identifier).collect();
    let mut seen_marker = false;
    for segment in segments.iter().rev() {
        if !seen_marker {
            if segment.eq_ignore_ascii_case(EXTENSION_MARKER) {
                seen_marker = true;
            }
        } else if !segment.trim().is_empty() {
            return segment.to_string();
        }
    }
    FALLBACK_SIMPLE_NAME.to_string()
}
