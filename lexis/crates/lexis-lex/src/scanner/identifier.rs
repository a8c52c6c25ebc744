//! Identifier and keyword scanning.

use super::Scanner;
use crate::chars::{is_identifier_continue, is_keyword};
use crate::token::TokenKind;

impl<'src> Scanner<'src> {
    /// Reads a run of letters and underscores, then classifies it.
    ///
    /// The run is a keyword only when it matches a reserved word exactly.
    pub(super) fn read_identifier(&mut self) {
        self.cursor.advance_while(is_identifier_continue);

        let text = self.cursor.slice_from(self.token_start.offset);
        let kind = if is_keyword(text) {
            TokenKind::Keyword
        } else {
            TokenKind::Identifier
        };
        self.emit_text(kind, text);
    }
}
