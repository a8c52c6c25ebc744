//! Core scanner implementation.
//!
//! This module contains the Scanner struct and the dispatch loop that
//! classifies the character at the cursor and hands off to a reader.

use tracing::{debug, trace};

use crate::chars::{
    is_digit, is_identifier_start, is_operator_lead, is_punctuation, is_quote, is_whitespace,
};
use crate::cursor::{Cursor, Mark};
use crate::error::{ScanError, ScanResult};
use crate::options::ScanOptions;
use crate::token::{Token, TokenKind};

/// Scanner for one input text.
///
/// A scanner is built for a single input, run once, and then discarded.
///
/// # Example
///
/// ```
/// use lexis_lex::{Scanner, TokenKind};
///
/// let tokens = Scanner::new("x == 10").scan().unwrap();
/// assert_eq!(tokens.len(), 3);
/// assert!(tokens[1].is(TokenKind::Operator, "=="));
/// ```
pub struct Scanner<'src> {
    /// Character cursor for source traversal.
    pub(super) cursor: Cursor<'src>,

    /// Behavior switches for this scan.
    pub(super) options: ScanOptions,

    /// Tokens emitted so far, in source order.
    pub(super) tokens: Vec<Token<'src>>,

    /// Location where the current lexeme started.
    pub(super) token_start: Mark,
}

impl<'src> Scanner<'src> {
    /// Creates a scanner with default options.
    pub fn new(input: &'src str) -> Self {
        Self::with_options(input, ScanOptions::default())
    }

    /// Creates a scanner with the given options.
    pub fn with_options(input: &'src str, options: ScanOptions) -> Self {
        let cursor = Cursor::new(input);
        let token_start = cursor.mark();
        Self {
            cursor,
            options,
            tokens: Vec::new(),
            token_start,
        }
    }

    /// Scans the whole input and returns the token sequence.
    pub fn scan(mut self) -> ScanResult<Vec<Token<'src>>> {
        self.run()?;
        Ok(self.tokens)
    }

    /// Runs the dispatch loop until the input is exhausted or an error occurs.
    ///
    /// On error, the tokens emitted before the failure stay available through
    /// [`Scanner::tokens`].
    pub fn run(&mut self) -> ScanResult<()> {
        debug!(bytes = self.cursor.remaining().len(), "scan started");

        while let Some(c) = self.cursor.current_char() {
            self.token_start = self.cursor.mark();

            if is_whitespace(c) {
                self.cursor.advance();
            } else if is_digit(c) {
                self.read_number();
            } else if is_identifier_start(c) {
                self.read_identifier();
            } else if c == '/' && self.cursor.peek_char() == Some('/') {
                self.skip_line_comment();
            } else if c == '/' && self.cursor.peek_char() == Some('*') {
                self.skip_block_comment()?;
            } else if is_quote(c) {
                self.read_string(c)?;
            } else if is_operator_lead(c) {
                self.read_operator(c);
            } else if is_punctuation(c) {
                self.cursor.advance();
                self.emit(TokenKind::Punctuation);
            } else {
                let err = ScanError::UnexpectedCharacter {
                    ch: c,
                    position: self.token_start.index,
                    offset: self.token_start.offset,
                    line: self.token_start.line,
                    column: self.token_start.column,
                };
                debug!(error = %err, tokens = self.tokens.len(), "scan failed");
                return Err(err);
            }
        }

        debug!(tokens = self.tokens.len(), "scan finished");
        Ok(())
    }

    /// Tokens emitted so far.
    pub fn tokens(&self) -> &[Token<'src>] {
        &self.tokens
    }

    /// Number of characters consumed so far.
    pub fn position(&self) -> usize {
        self.cursor.index()
    }

    /// Options this scanner was built with.
    pub fn options(&self) -> ScanOptions {
        self.options
    }

    /// Emits a token whose text runs from the lexeme start to the cursor.
    pub(super) fn emit(&mut self, kind: TokenKind) {
        let text = self.cursor.slice_from(self.token_start.offset);
        self.emit_text(kind, text);
    }

    /// Emits a token with explicit text, spanning from the lexeme start to
    /// the cursor.
    pub(super) fn emit_text(&mut self, kind: TokenKind, text: &'src str) {
        let span = self.cursor.span_from(self.token_start);
        trace!(%kind, text, start = span.start, "token");
        self.tokens.push(Token::new(kind, text, span));
    }
}
