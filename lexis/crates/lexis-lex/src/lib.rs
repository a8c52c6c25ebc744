//! lexis-lex - Scanner for a small C-like scripting language
//!
//! This crate turns source text into an ordered sequence of typed tokens for
//! a parser to consume. Scanning is a single pass over the input: the
//! dispatch loop looks at the character under the cursor and hands off to a
//! reader for numbers, identifiers, operators, strings or comments.
//!
//! # Example Usage
//!
//! ```
//! use lexis_lex::{scan, TokenKind};
//!
//! let tokens = scan("let x = 42;").unwrap();
//! let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     vec![
//!         TokenKind::Keyword,
//!         TokenKind::Identifier,
//!         TokenKind::Operator,
//!         TokenKind::Number,
//!         TokenKind::Punctuation,
//!     ]
//! );
//! ```
//!
//! # Module Structure
//!
//! - [`chars`] - Character classes driving dispatch
//! - [`cursor`] - Character cursor tracking byte offset and character index
//! - [`Scanner`] - Dispatch loop and lexeme readers
//! - [`Token`] / [`TokenKind`] - Scanner output
//! - [`ScanError`] - Scan failures and their diagnostics
//!
//! # Token Categories
//!
//! | Kind          | Shape                                                  |
//! |---------------|--------------------------------------------------------|
//! | `number`      | `[0-9]+`                                               |
//! | `identifier`  | `[a-zA-Z_]+` that is not a keyword                     |
//! | `keyword`     | `if else for while return function var let const`      |
//! | `string`      | `"..."` or `'...'`, text without quotes, no escapes    |
//! | `operator`    | `+ - * / % = < > ! & \| ^ ~ ? :` and `== != <= >=`     |
//! | `punctuation` | `( ) { } [ ] , . ;`                                    |
//!
//! Whitespace and comments (`// ...` and `/* ... */`) produce no tokens.
//! Any other character stops the scan with
//! [`ScanError::UnexpectedCharacter`].
//!
//! # Options
//!
//! [`ScanOptions`] can join `&&` and `||` into single operators and make
//! unterminated strings and block comments an error. Both are off by
//! default.

pub mod chars;
pub mod cursor;
mod error;
mod options;
mod scanner;
mod token;

#[cfg(test)]
mod edge_cases;

pub use cursor::Cursor;
pub use error::{ScanError, ScanResult};
pub use options::ScanOptions;
pub use scanner::Scanner;
pub use token::{Token, TokenKind};

/// Scans `input` with default options.
///
/// Stops at the first unexpected character.
pub fn scan(input: &str) -> ScanResult<Vec<Token<'_>>> {
    Scanner::new(input).scan()
}

/// Scans `input` with the given options.
pub fn scan_with_options(input: &str, options: ScanOptions) -> ScanResult<Vec<Token<'_>>> {
    Scanner::with_options(input, options).scan()
}
