//! Scan errors.
//!
//! With default options the only failure is [`ScanError::UnexpectedCharacter`].
//! The two unterminated-literal variants are produced only when
//! [`ScanOptions::strict_literals`](crate::ScanOptions::strict_literals) is set.

use lexis_util::{Diagnostic, DiagnosticCode, SourceFile, Span};
use thiserror::Error;

/// Error that aborts a scan.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScanError {
    /// A character outside every recognized class.
    #[error("unexpected character {ch:?} at position {position}")]
    UnexpectedCharacter {
        /// The offending character.
        ch: char,
        /// Character index of the character.
        position: usize,
        /// Byte offset of the character.
        offset: usize,
        /// Line of the character (1-based).
        line: u32,
        /// Column of the character (1-based).
        column: u32,
    },

    /// A string literal reaching end of input without its closing quote.
    #[error("unterminated string literal starting at position {position}")]
    UnterminatedString {
        /// The opening quote character.
        quote: char,
        /// Character index of the opening quote.
        position: usize,
        /// Span from the opening quote to end of input.
        span: Span,
    },

    /// A block comment reaching end of input without `*/`.
    #[error("unterminated block comment starting at position {position}")]
    UnterminatedComment {
        /// Character index of the opening `/*`.
        position: usize,
        /// Span from the opening `/*` to end of input.
        span: Span,
    },
}

impl ScanError {
    /// Character index at which the error starts.
    ///
    /// Counts characters, not bytes, so it differs from `span().start` once
    /// non-ASCII text precedes the error.
    pub fn position(&self) -> usize {
        match self {
            ScanError::UnexpectedCharacter { position, .. }
            | ScanError::UnterminatedString { position, .. }
            | ScanError::UnterminatedComment { position, .. } => *position,
        }
    }

    /// Source span covered by the error.
    pub fn span(&self) -> Span {
        match self {
            ScanError::UnexpectedCharacter {
                ch,
                offset,
                line,
                column,
                ..
            } => Span::new(*offset, offset + ch.len_utf8(), *line, *column),
            ScanError::UnterminatedString { span, .. }
            | ScanError::UnterminatedComment { span, .. } => *span,
        }
    }

    /// Diagnostic code for this error.
    pub fn code(&self) -> DiagnosticCode {
        match self {
            ScanError::UnexpectedCharacter { .. } => DiagnosticCode::E_UNEXPECTED_CHAR,
            ScanError::UnterminatedString { .. } => DiagnosticCode::E_UNTERMINATED_STRING,
            ScanError::UnterminatedComment { .. } => DiagnosticCode::E_UNTERMINATED_COMMENT,
        }
    }

    /// Converts the error into a renderable diagnostic.
    ///
    /// ```
    /// use lexis_lex::scan;
    /// use lexis_util::SourceFile;
    ///
    /// let source = "let a = #;";
    /// let err = scan(source).unwrap_err();
    /// let file = SourceFile::new("input", source);
    /// assert!(err.to_diagnostic().render(&file).contains("input:1:9"));
    /// ```
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = match self {
            ScanError::UnexpectedCharacter { ch, .. } => {
                Diagnostic::error(format!("unexpected character {:?}", ch), self.span())
                    .with_label("not part of any token")
                    .with_help("remove the character or place it inside a string literal")
            },
            ScanError::UnterminatedString { quote, .. } => {
                Diagnostic::error("unterminated string literal", self.span())
                    .with_label("string starts here")
                    .with_help(format!("add a closing {} quote", quote))
            },
            ScanError::UnterminatedComment { .. } => {
                Diagnostic::error("unterminated block comment", self.span())
                    .with_label("comment starts here")
                    .with_help("close the comment with `*/`")
            },
        };
        diag.with_code(self.code())
    }

    /// Renders the error against the source it came from.
    pub fn render(&self, file: &SourceFile) -> String {
        self.to_diagnostic().render(file)
    }
}

/// Result type alias for scanning.
pub type ScanResult<T> = std::result::Result<T, ScanError>;
