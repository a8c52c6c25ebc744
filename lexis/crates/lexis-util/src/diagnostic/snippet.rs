//! Source snippets shown under a diagnostic.

/// A source line with a highlighted column range
///
/// # Examples
///
/// ```
/// use lexis_util::diagnostic::SourceSnippet;
///
/// let snippet = SourceSnippet::new("let x = @;", 1, 9, 10).with_label("here");
/// assert_eq!(snippet.format(), "  1 | let x = @;\n    |         ^ here");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceSnippet {
    /// The source line content
    pub line: String,
    /// Line number (1-based)
    pub line_number: usize,
    /// Column where the highlight starts (1-based)
    pub start_column: usize,
    /// Column where the highlight ends (1-based, exclusive)
    pub end_column: usize,
    /// Optional label printed after the carets
    pub label: Option<String>,
}

impl SourceSnippet {
    /// Create a new source snippet
    pub fn new(
        line: impl Into<String>,
        line_number: usize,
        start_column: usize,
        end_column: usize,
    ) -> Self {
        Self {
            line: line.into(),
            line_number,
            start_column,
            end_column,
            label: None,
        }
    }

    /// Set the label for this snippet
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Format the snippet as a gutter line plus a caret line
    pub fn format(&self) -> String {
        let width = self.line_number.to_string().len().max(3);
        let underline_start = self.start_column.saturating_sub(1);
        let underline_len = self.end_column.saturating_sub(self.start_column).max(1);

        let mut result = format!("{:>width$} | {}\n", self.line_number, self.line);
        result.push_str(&format!("{:>width$} | ", ""));
        result.push_str(&" ".repeat(underline_start));
        result.push_str(&"^".repeat(underline_len));

        if let Some(label) = &self.label {
            result.push(' ');
            result.push_str(label);
        }

        result
    }
}
