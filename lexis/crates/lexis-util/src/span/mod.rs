//! Span module - Source location tracking.
//!
//! A [`Span`] records where a lexeme or an error sits in the input: a byte
//! range plus the 1-based line and column of its first character. The
//! [`SourceFile`] type goes the other way and recovers lines from offsets
//! when a diagnostic needs to show source context.
//!
//! # Examples
//!
//! ```
//! use lexis_util::span::Span;
//!
//! let span = Span::new(4, 5, 1, 5);
//! assert_eq!(span.len(), 1);
//! ```

mod source_file;

pub use source_file::SourceFile;

use serde::{Deserialize, Serialize};

/// Source location span
///
/// Offsets are byte offsets into the scanned text. `line` and `column` are
/// 1-based, with the column counted in characters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    /// Start byte offset (inclusive)
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based)
    pub column: u32,
}

impl Span {
    /// Dummy span for tests and synthesized diagnostics
    ///
    /// ```
    /// use lexis_util::span::Span;
    ///
    /// assert!(Span::DUMMY.is_empty());
    /// ```
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
    };

    /// Create a new span
    #[inline]
    pub const fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Length of the span in bytes
    #[inline]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if this span is empty (start == end)
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// The byte range covered by this span
    #[inline]
    pub fn range(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
