//! Operator scanning.
//!
//! Only `==`, `!=`, `<=` and `>=` are two characters long. Every other lead
//! yields a one-character operator even when repeated, so `&&` is two `&`
//! tokens. [`ScanOptions::compound_logical_operators`](crate::ScanOptions)
//! additionally joins `&&` and `||`.

use super::Scanner;
use crate::chars::takes_trailing_equals;
use crate::token::TokenKind;

impl<'src> Scanner<'src> {
    /// Reads an operator whose lead character is at the cursor.
    pub(super) fn read_operator(&mut self, lead: char) {
        self.cursor.advance();

        let next = self.cursor.current_char();
        let joins_equals = takes_trailing_equals(lead) && next == Some('=');
        let joins_logical = self.options.compound_logical_operators
            && matches!(lead, '&' | '|')
            && next == Some(lead);

        if joins_equals || joins_logical {
            self.cursor.advance();
        }

        self.emit(TokenKind::Operator);
    }
}
