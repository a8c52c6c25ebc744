//! Character cursor for traversing source text.
//!
//! The cursor keeps a byte offset into the source for slicing, plus the
//! character index and line/column of that offset. It always moves by whole UTF-8 characters and saturates at
//! the end of the input: advancing past the end is a no-op, which is what the
//! scanner relies on when a closing delimiter is missing.

use lexis_util::Span;

/// A cursor over source text.
///
/// # Example
///
/// ```
/// use lexis_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("let x");
/// assert_eq!(cursor.current_char(), Some('l'));
/// cursor.advance();
/// assert_eq!(cursor.current_char(), Some('e'));
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    source: &'a str,
    offset: usize,
    index: usize,
    line: u32,
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            offset: 0,
            index: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the character at the cursor, or `None` at end of input.
    #[inline]
    pub fn current_char(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Returns the character after the current one, or `None`.
    #[inline]
    pub fn peek_char(&self) -> Option<char> {
        let mut chars = self.remaining().chars();
        chars.next();
        chars.next()
    }

    /// Returns true if the remaining input starts with `prefix`.
    #[inline]
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.remaining().starts_with(prefix)
    }

    /// Advances past the current character.
    ///
    /// Updates line and column tracking. Does nothing at end of input.
    #[inline]
    pub fn advance(&mut self) {
        let Some(c) = self.current_char() else {
            return;
        };
        self.offset += c.len_utf8();
        self.index += 1;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }

    /// Advances by up to `count` characters, stopping at end of input.
    pub fn advance_n(&mut self, count: usize) {
        for _ in 0..count {
            self.advance();
        }
    }

    /// Advances while `predicate` holds for the current character.
    pub fn advance_while(&mut self, mut predicate: impl FnMut(char) -> bool) {
        while let Some(c) = self.current_char() {
            if !predicate(c) {
                break;
            }
            self.advance();
        }
    }

    /// Returns true if the cursor is at the end of the source.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.offset >= self.source.len()
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Number of characters consumed so far.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Current line number (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Current column number (1-based, in characters).
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Source text between two byte offsets.
    #[inline]
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.source[start..end]
    }

    /// Source text from `start` up to the cursor.
    #[inline]
    pub fn slice_from(&self, start: usize) -> &'a str {
        self.slice(start, self.offset)
    }

    /// Source text from the cursor to the end.
    #[inline]
    pub fn remaining(&self) -> &'a str {
        &self.source[self.offset..]
    }

    /// Captures the cursor location as a mark for building spans.
    #[inline]
    pub fn mark(&self) -> Mark {
        Mark {
            offset: self.offset,
            index: self.index,
            line: self.line,
            column: self.column,
        }
    }

    /// Span from `mark` up to the cursor.
    #[inline]
    pub fn span_from(&self, mark: Mark) -> Span {
        Span::new(mark.offset, self.offset, mark.line, mark.column)
    }
}

/// A saved cursor location.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Mark {
    /// Byte offset in source.
    pub offset: usize,
    /// Character index in source.
    pub index: usize,
    /// Line number (1-based).
    pub line: u32,
    /// Column number (1-based).
    pub column: u32,
}
