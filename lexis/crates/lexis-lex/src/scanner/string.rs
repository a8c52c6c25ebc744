//! String literal scanning.
//!
//! A string runs from its opening quote to the next occurrence of the same
//! quote. Backslashes are ordinary characters, so `"a\"` is the string `a\`.
//! Without a closing quote the literal takes the rest of the input.

use super::Scanner;
use crate::error::{ScanError, ScanResult};
use crate::token::TokenKind;

impl<'src> Scanner<'src> {
    /// Reads a string literal opened by `quote` at the cursor.
    ///
    /// The token text excludes both quotes; the span includes them.
    pub(super) fn read_string(&mut self, quote: char) -> ScanResult<()> {
        self.cursor.advance();
        let content_start = self.cursor.offset();

        self.cursor.advance_while(|c| c != quote);
        let content_end = self.cursor.offset();

        if self.cursor.is_at_end() && self.options.strict_literals {
            return Err(ScanError::UnterminatedString {
                quote,
                position: self.token_start.index,
                span: self.cursor.span_from(self.token_start),
            });
        }

        // closing quote; a no-op when the literal is unterminated
        self.cursor.advance();

        let text = self.cursor.slice(content_start, content_end);
        self.emit_text(TokenKind::String, text);
        Ok(())
    }
}
