//! Diagnostic types for scanner error reporting.

use crate::span::Span;
use serde::{Deserialize, Serialize};

/// Severity level of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticSeverity {
    Error,
    Warning,
    Info,
}

/// A diagnostic message with source location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Severity of the diagnostic
    pub severity: DiagnosticSeverity,
    /// Diagnostic code (e.g., "L001")
    pub code: String,
    /// Human-readable message
    pub message: String,
    /// Source file path
    pub file: String,
    /// Source span
    pub span: Span,
    /// Optional help text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
}

impl Diagnostic {
    pub fn error(code: impl Into<String>, message: impl Into<String>) -> DiagnosticBuilder {
        DiagnosticBuilder::new(DiagnosticSeverity::Error, code.into(), message.into())
    }

    pub fn warning(code: impl Into<String>, message: impl Into<String>) -> DiagnosticBuilder {
        DiagnosticBuilder::new(DiagnosticSeverity::Warning, code.into(), message.into())
    }
}

/// Builder for constructing diagnostics.
pub struct DiagnosticBuilder {
    severity: DiagnosticSeverity,
    code: String,
    message: String,
    file: Option<String>,
    span: Option<Span>,
    help: Option<String>,
}

impl DiagnosticBuilder {
    pub fn new(severity: DiagnosticSeverity, code: String, message: String) -> Self {
        Self {
            severity,
            code,
            message,
            file: None,
            span: None,
            help: None,
        }
    }

    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn build(self) -> Diagnostic {
        Diagnostic {
            severity: self.severity,
            code: self.code,
            message: self.message,
            file: self.file.unwrap_or_default(),
            span: self.span.unwrap_or_default(),
            help: self.help,
        }
    }
}

/// Collection of diagnostics.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Diagnostics {
    diagnostics: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self {
            diagnostics: Vec::new(),
        }
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == DiagnosticSeverity::Error)
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == DiagnosticSeverity::Error)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.diagnostics.into_iter()
    }
}

/// JSON output envelope for diagnostics.
#[derive(Debug, Serialize, Deserialize)]
pub struct DiagnosticsOutput {
    pub status: String,
    pub errors: Vec<Diagnostic>,
    pub total_errors: usize,
}

impl DiagnosticsOutput {
    pub fn from_diagnostics(diagnostics: &Diagnostics) -> Self {
        let errors: Vec<_> = diagnostics.errors().cloned().collect();
        Self {
            status: if errors.is_empty() { "ok" } else { "error" }.to_string(),
            total_errors: errors.len(),
            errors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_fills_defaults() {
        let diag = Diagnostic::error("L001", "unexpected character").build();
        assert_eq!(diag.severity, DiagnosticSeverity::Error);
        assert_eq!(diag.code, "L001");
        assert!(diag.file.is_empty());
        assert!(diag.help.is_none());
    }

    #[test]
    fn has_errors_ignores_warnings() {
        let mut diags = Diagnostics::new();
        diags.push(Diagnostic::warning("L002", "suspicious literal").build());
        assert!(!diags.has_errors());
        diags.push(Diagnostic::error("L001", "unexpected character").build());
        assert!(diags.has_errors());
        assert_eq!(diags.errors().count(), 1);
        assert_eq!(diags.len(), 2);
    }

    #[test]
    fn output_envelope_status() {
        let mut diags = Diagnostics::new();
        assert_eq!(DiagnosticsOutput::from_diagnostics(&diags).status, "ok");
        diags.push(Diagnostic::error("L001", "bad input").build());
        let out = DiagnosticsOutput::from_diagnostics(&diags);
        assert_eq!(out.status, "error");
        assert_eq!(out.total_errors, 1);
    }

    #[test]
    fn output_envelope_serializes() {
        let mut diags = Diagnostics::new();
        diags.push(
            Diagnostic::error("L001", "unrecognized character `$`")
                .with_file("model.modl")
                .build(),
        );
        let out = DiagnosticsOutput::from_diagnostics(&diags);
        let json = serde_json::to_value(&out).unwrap();
        assert_eq!(json["status"], "error");
        assert_eq!(json["errors"][0]["code"], "L001");
        assert_eq!(json["errors"][0]["severity"], "error");
        // unset help is omitted entirely
        assert!(json["errors"][0].get("help").is_none());
    }
}
