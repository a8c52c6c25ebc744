//! Edge-case and property tests for the scanner.

use crate::chars::{is_keyword, KEYWORDS};
use crate::{scan, scan_with_options, ScanError, ScanOptions, Scanner, Token, TokenKind};

fn texts(source: &str) -> Vec<&str> {
    scan(source).unwrap().into_iter().map(|t| t.text).collect()
}

// ------------------------------------------------------------------------
// EMPTY AND WHITESPACE INPUT
// ------------------------------------------------------------------------

#[test]
fn test_empty_input() {
    assert!(scan("").unwrap().is_empty());
}

#[test]
fn test_mixed_whitespace() {
    assert!(scan(" \t\r\n\u{0B}\u{0C}\u{A0}\u{2003}\u{3000}").unwrap().is_empty());
}

#[test]
fn test_byte_order_mark_is_whitespace() {
    assert_eq!(texts("\u{FEFF}let"), vec!["let"]);
}

#[test]
fn test_next_line_is_not_whitespace() {
    assert_eq!(
        scan("\u{85}").unwrap_err(),
        ScanError::UnexpectedCharacter {
            ch: '\u{85}',
            position: 0,
            offset: 0,
            line: 1,
            column: 1,
        }
    );
    assert!(matches!(
        scan("a\u{85}b").unwrap_err(),
        ScanError::UnexpectedCharacter { ch: '\u{85}', position: 1, .. }
    ));
}

#[test]
fn test_crlf_line_tracking() {
    let tokens = scan("a\r\nb\r\n  c").unwrap();
    assert_eq!(tokens[1].span.line, 2);
    assert_eq!(tokens[1].span.column, 1);
    assert_eq!(tokens[2].span.line, 3);
    assert_eq!(tokens[2].span.column, 3);
}

// ------------------------------------------------------------------------
// ADJACENCY
// ------------------------------------------------------------------------

#[test]
fn test_no_whitespace_needed() {
    assert_eq!(
        texts("for(i=0;i<=n;i=i+1){x[i]=y.z;}"),
        vec![
            "for", "(", "i", "=", "0", ";", "i", "<=", "n", ";", "i", "=", "i", "+", "1", ")", "{",
            "x", "[", "i", "]", "=", "y", ".", "z", ";", "}",
        ]
    );
}

#[test]
fn test_number_then_identifier() {
    let tokens = scan("12abc").unwrap();
    assert!(tokens[0].is(TokenKind::Number, "12"));
    assert!(tokens[1].is(TokenKind::Identifier, "abc"));
}

#[test]
fn test_string_directly_after_identifier() {
    let tokens = scan("tag'v'").unwrap();
    assert!(tokens[0].is(TokenKind::Identifier, "tag"));
    assert!(tokens[1].is(TokenKind::String, "v"));
}

#[test]
fn test_division_next_to_comment() {
    assert_eq!(texts("a / b // c"), vec!["a", "/", "b"]);
    assert_eq!(texts("a//b\n/c"), vec!["a", "/", "c"]);
}

#[test]
fn test_ternary() {
    assert_eq!(texts("a ? b : c"), vec!["a", "?", "b", ":", "c"]);
}

// ------------------------------------------------------------------------
// UNEXPECTED CHARACTERS
// ------------------------------------------------------------------------

#[test]
fn test_each_unrecognized_ascii() {
    for c in ['@', '#', '$', '`', '\\'] {
        let source = format!("x {}", c);
        match scan(&source).unwrap_err() {
            ScanError::UnexpectedCharacter { ch, position, .. } => {
                assert_eq!(ch, c);
                assert_eq!(position, 2);
            },
            other => panic!("unexpected error: {:?}", other),
        }
    }
}

#[test]
fn test_non_ascii_letter_is_unexpected() {
    match scan("café").unwrap_err() {
        ScanError::UnexpectedCharacter {
            ch,
            position,
            offset,
            line,
            column,
        } => {
            assert_eq!(ch, 'é');
            assert_eq!(position, 3);
            assert_eq!(offset, 3);
            assert_eq!(line, 1);
            assert_eq!(column, 4);
        },
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_position_counts_characters() {
    let err = scan("'✓' @").unwrap_err();
    assert_eq!(err.position(), 4);
    assert_eq!(err.span().range(), 6..7);

    let mut scanner = Scanner::new("\"αβγ\" # x");
    assert!(scanner.run().is_err());
    assert_eq!(scanner.position(), 6);
}

#[test]
fn test_unexpected_inside_comment_is_ignored() {
    assert_eq!(texts("/* @#$ */ // `\\\nx"), vec!["x"]);
}

#[test]
fn test_partial_tokens_are_kept() {
    let mut scanner = Scanner::new("a + b @ c");
    assert!(scanner.run().is_err());
    let kept: Vec<_> = scanner.tokens().iter().map(|t| t.text).collect();
    assert_eq!(kept, vec!["a", "+", "b"]);
    assert_eq!(scanner.position(), 6);
}

// ------------------------------------------------------------------------
// UNTERMINATED LITERALS
// ------------------------------------------------------------------------

#[test]
fn test_unterminated_string_span_reaches_end() {
    let source = "x = 'abc";
    let tokens = scan(source).unwrap();
    assert_eq!(tokens[2].span.range(), 4..source.len());
}

#[test]
fn test_unterminated_comment_after_tokens_keeps_them() {
    assert_eq!(texts("let a /* no end\n\n"), vec!["let", "a"]);
}

#[test]
fn test_strict_options_do_not_change_valid_input() {
    let source = "let s = 'ok'; /* fine */ x // end";
    let strict = ScanOptions::default().with_strict_literals(true);
    assert_eq!(scan(source).unwrap(), scan_with_options(source, strict).unwrap());
}

// ------------------------------------------------------------------------
// PROPERTY-BASED TESTS
// ------------------------------------------------------------------------

#[test]
fn test_property_whitespace_yields_nothing() {
    use proptest::prelude::*;

    proptest!(|(input in "[ \t\r\n\u{A0}\u{FEFF}\u{2028}]{0,64}")| {
        assert!(scan(&input).unwrap().is_empty());
    });
}

#[test]
fn test_property_words_classified_by_keyword_set() {
    use proptest::prelude::*;

    proptest!(|(words in prop::collection::vec("[a-zA-Z_]{1,9}", 1..20))| {
        let source = words.join(" ");
        let tokens = scan(&source).unwrap();
        assert_eq!(tokens.len(), words.len());
        for (token, word) in tokens.iter().zip(&words) {
            assert_eq!(token.text, word.as_str());
            let expected = if KEYWORDS.contains(&word.as_str()) {
                TokenKind::Keyword
            } else {
                TokenKind::Identifier
            };
            assert_eq!(token.kind, expected);
        }
    });
}

#[test]
fn test_property_numbers_are_digits_only() {
    use proptest::prelude::*;

    proptest!(|(input in "[0-9a-z .;+=_]{0,80}")| {
        for token in scan(&input).unwrap() {
            if token.kind == TokenKind::Number {
                assert!(!token.text.is_empty());
                assert!(token.text.chars().all(|c| c.is_ascii_digit()));
            }
        }
    });
}

#[test]
fn test_property_two_character_operators() {
    use proptest::prelude::*;

    proptest!(|(input in "[=!<>&|+\\-*]{1,32}")| {
        let tokens = scan(&input).unwrap();
        let joined: String = tokens.iter().map(|t| t.text).collect();
        assert_eq!(joined, input);

        for token in &tokens {
            assert_eq!(token.kind, TokenKind::Operator);
            let chars: Vec<char> = token.text.chars().collect();
            match chars.as_slice() {
                [_] => {},
                [lead, '='] => assert!(matches!(lead, '=' | '!' | '<' | '>')),
                _ => panic!("bad operator {:?}", token.text),
            }
        }

        // a joinable lead is never left followed by '='
        for pair in tokens.windows(2) {
            let joinable = matches!(pair[0].text, "=" | "!" | "<" | ">");
            assert!(!(joinable && pair[1].text.starts_with('=')));
        }
    });
}

#[test]
fn test_property_unexpected_character_reported() {
    use proptest::prelude::*;

    proptest!(|(prefix in "[a-z0-9 ;\u{A0}\u{3000}]{0,20}", bad in "[@#$`\\\\\u{85}]")| {
        let source = format!("{}{}", prefix, bad);
        match scan(&source) {
            Err(ScanError::UnexpectedCharacter { ch, position, offset, .. }) => {
                assert_eq!(Some(ch), bad.chars().next());
                assert_eq!(position, prefix.chars().count());
                assert_eq!(offset, prefix.len());
            },
            other => panic!("expected unexpected-character error, got {:?}", other),
        }
    });
}

#[test]
fn test_property_scan_is_idempotent() {
    use proptest::prelude::*;

    proptest!(|(input in "\\PC{0,100}")| {
        assert_eq!(scan(&input), scan(&input));
    });
}

#[test]
fn test_property_tokens_in_source_order() {
    use proptest::prelude::*;

    proptest!(|(input in "[a-z0-9 \n/*'\"=<!&(){};.]{0,120}")| {
        let mut scanner = Scanner::new(&input);
        let _ = scanner.run();
        let tokens: &[Token<'_>] = scanner.tokens();
        for pair in tokens.windows(2) {
            assert!(pair[0].span.end <= pair[1].span.start);
        }
        for token in tokens {
            assert!(token.span.end <= input.len());
            if token.kind == TokenKind::Identifier {
                assert!(!is_keyword(token.text));
            }
        }
    });
}
