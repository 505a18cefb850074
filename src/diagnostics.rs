use std::{cmp::Ordering, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// Construct category a diagnostic is about.
///
/// Each variant corresponds to a row of the classifier policy table
/// that cannot be rewritten safely, plus parse failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Construct {
    StaticField,
    InterfaceConstant,
    EnumConstantArgument,
    AnnotationValue,
    DetachedLiteral,
    Unrecognized,
    ParseError,
}

impl fmt::Display for Construct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Construct::StaticField => write!(f, "static-field"),
            Construct::InterfaceConstant => write!(f, "interface-constant"),
            Construct::EnumConstantArgument => write!(f, "enum-constant-argument"),
            Construct::AnnotationValue => write!(f, "annotation-value"),
            Construct::DetachedLiteral => write!(f, "detached-literal"),
            Construct::Unrecognized => write!(f, "unrecognized-construct"),
            Construct::ParseError => write!(f, "parse-error"),
        }
    }
}

/// Structured diagnostic record collected during a run.
///
/// The core never prints; the driver hands the collected records to the
/// reporter, which decides how to surface them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub file_path: String,
    pub line: Option<usize>,
    pub col: Option<usize>,
    pub message: String,
    pub severity: Severity,
    pub construct: Construct,
    pub source_line: Option<String>,
}

impl Diagnostic {
    pub fn static_field(
        file_path: &str,
        line: usize,
        col: usize,
        value: &str,
        source_line: Option<String>,
    ) -> Self {
        Self {
            file_path: file_path.to_string(),
            line: Some(line),
            col: Some(col),
            message: format!(
                "static field rewritten to a Supplier, manual follow-up needed: \"{}\"",
                value
            ),
            severity: Severity::Warning,
            construct: Construct::StaticField,
            source_line,
        }
    }

    pub fn static_field_skipped(
        file_path: &str,
        line: usize,
        col: usize,
        value: &str,
        source_line: Option<String>,
    ) -> Self {
        Self {
            file_path: file_path.to_string(),
            line: Some(line),
            col: Some(col),
            message: format!("static field needs manual handling: \"{}\"", value),
            severity: Severity::Warning,
            construct: Construct::StaticField,
            source_line,
        }
    }

    pub fn interface_constant(
        file_path: &str,
        line: usize,
        col: usize,
        value: &str,
        source_line: Option<String>,
    ) -> Self {
        Self {
            file_path: file_path.to_string(),
            line: Some(line),
            col: Some(col),
            message: format!("interface constant needs manual handling: \"{}\"", value),
            severity: Severity::Warning,
            construct: Construct::InterfaceConstant,
            source_line,
        }
    }

    pub fn enum_constant_argument(
        file_path: &str,
        line: usize,
        col: usize,
        value: &str,
        source_line: Option<String>,
    ) -> Self {
        Self {
            file_path: file_path.to_string(),
            line: Some(line),
            col: Some(col),
            message: format!(
                "enum constant argument must stay a compile-time constant: \"{}\"",
                value
            ),
            severity: Severity::Warning,
            construct: Construct::EnumConstantArgument,
            source_line,
        }
    }

    pub fn annotation_value(
        file_path: &str,
        line: usize,
        col: usize,
        value: &str,
        source_line: Option<String>,
    ) -> Self {
        Self {
            file_path: file_path.to_string(),
            line: Some(line),
            col: Some(col),
            message: format!(
                "annotation value must stay a compile-time constant: \"{}\"",
                value
            ),
            severity: Severity::Warning,
            construct: Construct::AnnotationValue,
            source_line,
        }
    }

    pub fn detached_literal(file_path: &str, value: &str) -> Self {
        Self {
            file_path: file_path.to_string(),
            line: None,
            col: None,
            message: format!("literal has no parent node: \"{}\"", value),
            severity: Severity::Warning,
            construct: Construct::DetachedLiteral,
            source_line: None,
        }
    }

    pub fn unrecognized(
        file_path: &str,
        line: usize,
        col: usize,
        construct_name: &str,
        value: &str,
        source_line: Option<String>,
    ) -> Self {
        Self {
            file_path: file_path.to_string(),
            line: Some(line),
            col: Some(col),
            message: format!("unhandled construct {}: \"{}\"", construct_name, value),
            severity: Severity::Warning,
            construct: Construct::Unrecognized,
            source_line,
        }
    }

    pub fn parse_error(file_path: &str, error: &str) -> Self {
        Self {
            file_path: file_path.to_string(),
            line: Some(1),
            col: Some(1),
            message: format!("Failed to parse: {}", error),
            severity: Severity::Error,
            construct: Construct::ParseError,
            source_line: None,
        }
    }
}

impl Ord for Diagnostic {
    fn cmp(&self, other: &Self) -> Ordering {
        // Sort by file, then position, then message for deterministic
        // output across parallel runs.
        self.file_path
            .cmp(&other.file_path)
            .then_with(|| self.line.cmp(&other.line))
            .then_with(|| self.col.cmp(&other.col))
            .then_with(|| self.message.cmp(&other.message))
    }
}

impl PartialOrd for Diagnostic {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_is_by_file_then_position() {
        let a = Diagnostic::annotation_value("a/B.java", 3, 1, "值", None);
        let b = Diagnostic::annotation_value("a/B.java", 10, 1, "值", None);
        let c = Diagnostic::annotation_value("z/C.java", 1, 1, "值", None);

        let mut list = vec![c.clone(), b.clone(), a.clone()];
        list.sort();
        assert_eq!(list, vec![a, b, c]);
    }

    #[test]
    fn test_construct_display() {
        assert_eq!(Construct::StaticField.to_string(), "static-field");
        assert_eq!(
            Construct::EnumConstantArgument.to_string(),
            "enum-constant-argument"
        );
    }
}
