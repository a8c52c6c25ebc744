//! Token definitions.
//!
//! A [`Token`] pairs a [`TokenKind`] with the exact lexeme it was built from.
//! Text is never processed: numbers keep their digits, strings keep their
//! backslashes.

use std::fmt;

use lexis_util::Span;
use serde::{Deserialize, Serialize};

/// Classification of a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    /// A maximal run of decimal digits.
    Number,
    /// A letter/underscore run that is not a keyword.
    Identifier,
    /// A letter/underscore run from the keyword set.
    Keyword,
    /// The contents of a quoted literal, quotes excluded.
    String,
    /// One operator, one or two characters long.
    Operator,
    /// One of `( ) { } [ ] , . ;`.
    Punctuation,
}

impl TokenKind {
    /// Lowercase name of the kind, as used in output.
    pub const fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Number => "number",
            TokenKind::Identifier => "identifier",
            TokenKind::Keyword => "keyword",
            TokenKind::String => "string",
            TokenKind::Operator => "operator",
            TokenKind::Punctuation => "punctuation",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified lexeme borrowed from the scanned input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Token<'src> {
    /// Token classification.
    pub kind: TokenKind,
    /// Exact source text of the lexeme.
    pub text: &'src str,
    /// Location of the lexeme; string spans include the quotes.
    pub span: Span,
}

impl<'src> Token<'src> {
    /// Creates a new token.
    pub fn new(kind: TokenKind, text: &'src str, span: Span) -> Self {
        Self { kind, text, span }
    }

    /// Returns true if the token has the given kind and text.
    ///
    /// ```
    /// use lexis_lex::{scan, TokenKind};
    ///
    /// let tokens = scan("let").unwrap();
    /// assert!(tokens[0].is(TokenKind::Keyword, "let"));
    /// ```
    pub fn is(&self, kind: TokenKind, text: &str) -> bool {
        self.kind == kind && self.text == text
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.kind, self.text)
    }
}
