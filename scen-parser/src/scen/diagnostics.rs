//! Structured diagnostics for parse recovery decisions
//!
//! The parser never raises an error for malformed input data; every recovery
//! decision is recorded as a [`Diagnostic`] instead. Hosts decide what to do
//! with them: print, collect, count, or ignore. A heavily-defaulted record
//! plus many diagnostics is the worst possible outcome of a parse.

use serde::Serialize;
use std::fmt;

/// Diagnostic severity levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    /// A clause or section was lost.
    Error,
    /// A clause was understood but its value was rejected or suspicious.
    Warning,
    /// An unusual but tolerated value (e.g. `day = 30`).
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// Stable code identifying the kind of recovery that was taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DiagnosticCode {
    /// A token that cannot appear where it was found.
    InvalidToken,
    /// An identifier with no entry in the active keyword table.
    UnknownKeyword,
    /// `=` expected but something else was next.
    MissingEquals,
    /// `{` expected but something else was next.
    MissingOpenBrace,
    /// Input ended inside a section body.
    MissingClosingBrace,
    /// A well-formed value with no entry in a lookup table.
    UnknownValue,
    /// A section arrived without a clause it cannot be used without
    /// (e.g. a `country` block with no `tag`).
    MissingRequiredClause,
    /// A country tag outside the known or active tag sets.
    UnknownTag,
    /// A numeric value outside the field's valid domain (still stored).
    ValueOutOfRange,
    /// Tolerated oddity worth a note.
    UnusualValue,
    /// An `include` file that could not be found.
    MissingInclude,
    /// `include` nesting deeper than the configured limit.
    IncludeDepth,
}

impl DiagnosticCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosticCode::InvalidToken => "invalid-token",
            DiagnosticCode::UnknownKeyword => "unknown-keyword",
            DiagnosticCode::MissingEquals => "missing-equals",
            DiagnosticCode::MissingOpenBrace => "missing-open-brace",
            DiagnosticCode::MissingClosingBrace => "missing-closing-brace",
            DiagnosticCode::UnknownValue => "unknown-value",
            DiagnosticCode::MissingRequiredClause => "missing-required-clause",
            DiagnosticCode::UnknownTag => "unknown-tag",
            DiagnosticCode::ValueOutOfRange => "value-out-of-range",
            DiagnosticCode::UnusualValue => "unusual-value",
            DiagnosticCode::MissingInclude => "missing-include",
            DiagnosticCode::IncludeDepth => "include-depth",
        }
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One recovery decision, with the file and line it happened on.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub code: DiagnosticCode,
    pub message: String,
    pub file: String,
    pub line: u32,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] {}:{}: {}",
            self.severity, self.code, self.file, self.line, self.message
        )
    }
}

/// Ordered collection of every diagnostic emitted during one parse.
#[derive(Debug, Default, Clone, Serialize)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Diagnostics::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.items.push(diagnostic);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.items.iter()
    }

    /// Number of diagnostics at [`Severity::Error`].
    pub fn error_count(&self) -> usize {
        self.items
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count()
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.items
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for item in &self.items {
            writeln!(f, "{}", item)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_format() {
        let d = Diagnostic {
            severity: Severity::Warning,
            code: DiagnosticCode::UnknownKeyword,
            message: "unknown keyword `weathers`".to_string(),
            file: "1936.eu".to_string(),
            line: 42,
        };
        assert_eq!(
            d.to_string(),
            "warning [unknown-keyword] 1936.eu:42: unknown keyword `weathers`"
        );
    }

    #[test]
    fn test_error_count() {
        let mut diags = Diagnostics::new();
        diags.push(Diagnostic {
            severity: Severity::Error,
            code: DiagnosticCode::InvalidToken,
            message: "x".to_string(),
            file: "f".to_string(),
            line: 1,
        });
        diags.push(Diagnostic {
            severity: Severity::Info,
            code: DiagnosticCode::UnusualValue,
            message: "y".to_string(),
            file: "f".to_string(),
            line: 2,
        });
        assert_eq!(diags.error_count(), 1);
        assert_eq!(diags.len(), 2);
    }
}
