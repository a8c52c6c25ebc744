//! Comment skipping.
//!
//! Comments never produce tokens. A line comment ends after its newline. A
//! block comment ends after the first `*/` found from its opening `/`, so
//! `/*/` is already a complete comment. Unterminated block comments swallow
//! the rest of the input unless strict literals are enabled.

use super::Scanner;
use crate::error::{ScanError, ScanResult};

impl<'src> Scanner<'src> {
    /// Skips a `//` comment and the newline that ends it.
    pub(super) fn skip_line_comment(&mut self) {
        self.cursor.advance_while(|c| c != '\n');
        self.cursor.advance();
    }

    /// Skips a `/* */` comment. Block comments do not nest.
    pub(super) fn skip_block_comment(&mut self) -> ScanResult<()> {
        while !self.cursor.is_at_end() && !self.cursor.starts_with("*/") {
            self.cursor.advance();
        }

        if self.cursor.is_at_end() && self.options.strict_literals {
            return Err(ScanError::UnterminatedComment {
                position: self.token_start.index,
                span: self.cursor.span_from(self.token_start),
            });
        }

        self.cursor.advance_n(2);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{scan, scan_with_options, ScanError, ScanOptions, TokenKind};

    fn texts(source: &str) -> Vec<String> {
        scan(source)
            .unwrap()
            .into_iter()
            .map(|t| t.text.to_string())
            .collect()
    }

    #[test]
    fn test_line_comment() {
        assert_eq!(texts("// note\nlet y"), vec!["let", "y"]);
    }

    #[test]
    fn test_line_comment_at_eof() {
        assert!(texts("// trailing").is_empty());
        assert_eq!(texts("a // trailing"), vec!["a"]);
    }

    #[test]
    fn test_block_comment() {
        assert_eq!(texts("a /* b */ c"), vec!["a", "c"]);
    }

    #[test]
    fn test_block_comment_multiline() {
        let tokens = scan("/* one\ntwo */ x").unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].span.line, 2);
    }

    #[test]
    fn test_block_comment_does_not_nest() {
        assert_eq!(texts("/* a /* b */ c */"), vec!["c", "*", "/"]);
    }

    #[test]
    fn test_slash_star_slash_closes() {
        assert_eq!(texts("/*/ x"), vec!["x"]);
    }

    #[test]
    fn test_unterminated_block_comment_is_discarded() {
        assert_eq!(texts("a /* never closed"), vec!["a"]);
    }

    #[test]
    fn test_lone_slash_is_operator() {
        let tokens = scan("a / b /").unwrap();
        assert_eq!(tokens.len(), 4);
        assert!(tokens[1].is(TokenKind::Operator, "/"));
        assert!(tokens[3].is(TokenKind::Operator, "/"));
    }

    #[test]
    fn test_comment_markers_inside_strings() {
        let tokens = scan("'// not a comment' \"/* nor */\"").unwrap();
        assert!(tokens[0].is(TokenKind::String, "// not a comment"));
        assert!(tokens[1].is(TokenKind::String, "/* nor */"));
    }

    #[test]
    fn test_strict_rejects_unterminated_block() {
        let options = ScanOptions::default().with_strict_literals(true);
        let err = scan_with_options("x /* open", options).unwrap_err();
        assert!(matches!(err, ScanError::UnterminatedComment { position: 2, .. }));
        assert_eq!(err.span().range(), 2..9);
    }

    #[test]
    fn test_strict_allows_line_comment_at_eof() {
        let options = ScanOptions::default().with_strict_literals(true);
        assert!(scan_with_options("x // end", options).unwrap().len() == 1);
    }
}
