//! Number literal scanning.
//!
//! Numbers are maximal runs of decimal digits. There is no sign, decimal
//! point, exponent or radix prefix: `3.14` is three tokens.

use super::Scanner;
use crate::chars::is_digit;
use crate::token::TokenKind;

impl<'src> Scanner<'src> {
    /// Reads a run of decimal digits starting at the cursor.
    pub(super) fn read_number(&mut self) {
        self.cursor.advance_while(is_digit);
        self.emit(TokenKind::Number);
    }
}
