//! Per-file rewrite context: scope-derived key assignment, the
//! deduplicating key registry, and the diagnostic sink.

use crate::diagnostics::Diagnostic;

/// One generated key and the literal value it stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedEntry {
    pub key: String,
    pub value: String,
}

/// How a CJK literal in a static field initializer is handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StaticFieldMode {
    /// Retype the field to `java.util.function.Supplier<String>`, rename
    /// it with a `_SUPPLIER` suffix and wrap the lookup in a lazy
    /// closure. The value is registered.
    #[default]
    Wrap,
    /// Emit a diagnostic only; the field is left untouched and nothing
    /// is registered.
    Warn,
}

/// Mutable state threaded through the traversal of one file.
///
/// Exclusively owned by one traversal; the driver drains `entries` into
/// the run-wide aggregate when the file completes.
#[derive(Debug)]
pub struct RunContext {
    pub template: String,
    pub bundle_name: String,
    /// File path, used to derive the `${classSimpleName}` fallback and
    /// for diagnostics.
    pub file_identifier: String,
    pub static_fields: StaticFieldMode,
    /// Dotted key prefix of the innermost type declaration walked so
    /// far. Not a stack: leaving a nested type's subtree does not
    /// restore the enclosing type's prefix.
    scope_prefix: Option<String>,
    sequence: u32,
    entries: Vec<ExtractedEntry>,
    pub diagnostics: Vec<Diagnostic>,
}

impl RunContext {
    pub fn new(
        template: &str,
        bundle_name: &str,
        file_identifier: &str,
        static_fields: StaticFieldMode,
    ) -> Self {
        Self {
            template: template.to_string(),
            bundle_name: bundle_name.to_string(),
            file_identifier: file_identifier.to_string(),
            static_fields,
            scope_prefix: None,
            sequence: 0,
            entries: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Called when the walk enters a type declaration: the prefix
    /// becomes `bundle.<fqn>` (or `bundle.default` when no fully
    /// qualified name is available) and the counter restarts.
    pub fn enter_type_scope(&mut self, qualified_name: Option<&str>) {
        let prefix = match qualified_name {
            Some(fqn) => format!("{}.{}", self.bundle_name, fqn),
            None => format!("{}.default", self.bundle_name),
        };
        self.scope_prefix = Some(prefix);
        self.sequence = 0;
    }

    /// Register `value` and return its key.
    ///
    /// A value already present in the registry reuses its key; the
    /// counter is only consumed for a new value, so keys within one
    /// scope are gap-free, starting at 1.
    pub fn assign_or_reuse(&mut self, value: &str) -> String {
        for entry in &self.entries {
            if entry.value == value {
                return entry.key.clone();
            }
        }
        self.sequence += 1;
        let prefix = self
            .scope_prefix
            .clone()
            .unwrap_or_else(|| format!("{}.default", self.bundle_name));
        let key = format!("{}.{}", prefix, self.sequence);
        self.entries.push(ExtractedEntry {
            key: key.clone(),
            value: value.to_string(),
        });
        key
    }

    pub fn entries(&self) -> &[ExtractedEntry] {
        &self.entries
    }

    pub fn into_parts(self) -> (Vec<ExtractedEntry>, Vec<Diagnostic>) {
        (self.entries, self.diagnostics)
    }
}
