//! Source file with precomputed line starts.
//!
//! Used by diagnostics to turn a byte offset into a line/column pair and to
//! fetch the text of the offending line.

use std::sync::Arc;

/// A named source text with its line table
///
/// # Examples
///
/// ```
/// use lexis_util::span::SourceFile;
///
/// let file = SourceFile::new("main.js", "let x;\nlet y;");
/// assert_eq!(file.name(), "main.js");
/// assert_eq!(file.line_at(2), Some("let y;"));
/// ```
#[derive(Clone)]
pub struct SourceFile {
    name: String,
    content: Arc<str>,
    line_starts: Arc<[usize]>,
}

impl SourceFile {
    /// Create a new source file
    pub fn new(name: impl Into<String>, content: impl Into<Arc<str>>) -> Self {
        let content = content.into();
        let line_starts = Self::line_starts(&content);
        Self {
            name: name.into(),
            content,
            line_starts,
        }
    }

    fn line_starts(content: &str) -> Arc<[usize]> {
        let mut line_starts = vec![0];
        line_starts.extend(
            content
                .char_indices()
                .filter(|&(_, ch)| ch == '\n')
                .map(|(i, _)| i + 1),
        );
        line_starts.into()
    }

    /// Get the file name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the file content
    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Convert a byte offset to 1-based (line, column) coordinates
    ///
    /// The column is counted in characters. Offsets past the end of the
    /// content clamp to the end.
    ///
    /// ```
    /// use lexis_util::span::SourceFile;
    ///
    /// let file = SourceFile::new("main.js", "let x;\nlet y;");
    /// assert_eq!(file.offset_to_line_col(0), (1, 1));
    /// assert_eq!(file.offset_to_line_col(11), (2, 5));
    /// ```
    pub fn offset_to_line_col(&self, offset: usize) -> (usize, usize) {
        let offset = offset.min(self.content.len());
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(insert_point) => insert_point.saturating_sub(1),
        };
        let line_start = self.line_starts[line];
        let column = self
            .content
            .get(line_start..offset)
            .map_or(offset - line_start, |prefix| prefix.chars().count());
        (line + 1, column + 1)
    }

    /// Get the text of a 1-based line, without its line terminator
    pub fn line_at(&self, line: usize) -> Option<&str> {
        let index = line.checked_sub(1)?;
        let start = *self.line_starts.get(index)?;
        let end = self
            .line_starts
            .get(index + 1)
            .map_or(self.content.len(), |&next| next - 1);
        self.content
            .get(start..end)
            .map(|text| text.strip_suffix('\r').unwrap_or(text))
    }
}

impl std::fmt::Debug for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFile")
            .field("name", &self.name)
            .field("len", &self.content.len())
            .field("lines", &self.line_starts.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_to_line_col() {
        let file = SourceFile::new("a", "ab\ncd\nef");
        assert_eq!(file.offset_to_line_col(0), (1, 1));
        assert_eq!(file.offset_to_line_col(1), (1, 2));
        assert_eq!(file.offset_to_line_col(3), (2, 1));
        assert_eq!(file.offset_to_line_col(7), (3, 2));
    }

    #[test]
    fn test_offset_past_end_clamps() {
        let file = SourceFile::new("a", "ab");
        assert_eq!(file.offset_to_line_col(100), (1, 3));
    }

    #[test]
    fn test_column_counts_characters() {
        let file = SourceFile::new("a", "\"é\" @");
        // 'é' is two bytes; '@' sits at byte 5 but column 5
        assert_eq!(file.offset_to_line_col(5), (1, 5));
    }

    #[test]
    fn test_line_at() {
        let file = SourceFile::new("a", "first\r\nsecond\nthird");
        assert_eq!(file.line_at(1), Some("first"));
        assert_eq!(file.line_at(2), Some("second"));
        assert_eq!(file.line_at(3), Some("third"));
        assert_eq!(file.line_at(0), None);
        assert_eq!(file.line_at(4), None);
    }
}
