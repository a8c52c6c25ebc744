//! Character classification for the scanner.
//!
//! Every class here is a pure predicate over one character. Identifier
//! classes are ASCII-only: letters outside `a-z A-Z` are not identifier
//! characters and fall through to the unexpected-character error.

/// Keywords recognized by the scanner.
pub const KEYWORDS: [&str; 9] = [
    "if", "else", "for", "while", "return", "function", "var", "let", "const",
];

/// Characters that start an operator token.
pub const OPERATOR_LEADS: [char; 15] = [
    '+', '-', '*', '/', '%', '=', '<', '>', '!', '&', '|', '^', '~', '?', ':',
];

/// Characters emitted as single-character punctuation tokens.
pub const PUNCTUATION: [char; 9] = ['(', ')', '{', '}', '[', ']', ',', '.', ';'];

/// Checks if a character is skipped as whitespace.
///
/// The set is ASCII whitespace, the Unicode space separators, the line and
/// paragraph separators and the byte order mark. NEL (U+0085) is not in it.
///
/// ```
/// use lexis_lex::chars::is_whitespace;
///
/// assert!(is_whitespace(' '));
/// assert!(is_whitespace('\u{FEFF}'));
/// assert!(!is_whitespace('\u{85}'));
/// assert!(!is_whitespace('_'));
/// ```
#[inline]
pub fn is_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Checks if a character is a decimal digit `0-9`.
#[inline]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Checks if a character can start an identifier: `a-z`, `A-Z` or `_`.
///
/// ```
/// use lexis_lex::chars::is_identifier_start;
///
/// assert!(is_identifier_start('_'));
/// assert!(!is_identifier_start('1'));
/// assert!(!is_identifier_start('é'));
/// ```
#[inline]
pub fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Checks if a character continues an identifier.
///
/// Same set as [`is_identifier_start`]: digits end the identifier, so `x1`
/// scans as an identifier followed by a number.
#[inline]
pub fn is_identifier_continue(c: char) -> bool {
    is_identifier_start(c)
}

/// Checks if a character starts an operator.
#[inline]
pub fn is_operator_lead(c: char) -> bool {
    OPERATOR_LEADS.contains(&c)
}

/// Checks if a character is punctuation.
#[inline]
pub fn is_punctuation(c: char) -> bool {
    PUNCTUATION.contains(&c)
}

/// Checks if a character opens a string literal.
#[inline]
pub fn is_quote(c: char) -> bool {
    c == '"' || c == '\''
}

/// Checks if an operator lead may combine with a following `=`.
#[inline]
pub fn takes_trailing_equals(c: char) -> bool {
    matches!(c, '=' | '!' | '<' | '>')
}

/// Returns true if `text` is exactly one of [`KEYWORDS`].
///
/// ```
/// use lexis_lex::chars::is_keyword;
///
/// assert!(is_keyword("function"));
/// assert!(!is_keyword("Function"));
/// assert!(!is_keyword("lets"));
/// ```
#[inline]
pub fn is_keyword(text: &str) -> bool {
    KEYWORDS.contains(&text)
}
