//! Diagnostic module - Error reporting infrastructure.
//!
//! A [`Diagnostic`] is an error message with a location and an optional
//! code, label and help lines. [`Diagnostic::render`] formats it against the
//! [`SourceFile`] it came from:
//!
//! ```text
//! error[E1001]: unexpected character '@'
//!  --> main.js:1:9
//!   1 | let x = @;
//!     |         ^
//!   = help: remove the character or place it inside a string literal
//! ```

mod codes;
mod snippet;

pub use codes::DiagnosticCode;
pub use snippet::SourceSnippet;

use std::fmt;

use crate::span::{SourceFile, Span};

/// An error diagnostic with a location
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Label printed next to the carets
    pub label: Option<String>,
    /// Help suggestions for fixing the issue
    pub helps: Vec<String>,
}

impl Diagnostic {
    /// Create an error diagnostic
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self {
            message: message.into(),
            span,
            code: None,
            label: None,
            helps: Vec::new(),
        }
    }

    /// Set the diagnostic code
    pub fn with_code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Set the label shown under the highlighted range
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Add a help suggestion
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    /// Build the snippet for this diagnostic's span, if the line exists
    ///
    /// Multi-line spans are clipped to the first line.
    pub fn snippet(&self, file: &SourceFile) -> Option<SourceSnippet> {
        let (line, column) = file.offset_to_line_col(self.span.start);
        let text = file.line_at(line)?;
        let span_chars = file
            .content()
            .get(self.span.range())
            .map_or(1, |lexeme| lexeme.lines().next().unwrap_or("").chars().count());
        let line_chars = text.chars().count();
        let end_column = (column + span_chars).min(line_chars + 1).max(column + 1);

        let snippet = SourceSnippet::new(text, line, column, end_column);
        Some(match &self.label {
            Some(label) => snippet.with_label(label.clone()),
            None => snippet,
        })
    }

    /// Render the diagnostic with a header, location and source snippet
    pub fn render(&self, file: &SourceFile) -> String {
        let mut out = match self.code {
            Some(code) => format!("error[{}]: {}\n", code, self.message),
            None => format!("error: {}\n", self.message),
        };

        let (line, column) = file.offset_to_line_col(self.span.start);
        out.push_str(&format!(" --> {}:{}:{}\n", file.name(), line, column));

        if let Some(snippet) = self.snippet(file) {
            out.push_str(&snippet.format());
            out.push('\n');
        }
        for help in &self.helps {
            out.push_str(&format!("  = help: {}\n", help));
        }

        out
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "error[{}]: {} at {}", code, self.message, self.span),
            None => write!(f, "error: {} at {}", self.message, self.span),
        }
    }
}
