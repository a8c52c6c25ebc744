//! Scanner module.
//!
//! The scanner is split by lexeme category:
//! - `core` - Scanner struct and the dispatch loop
//! - `number` - digit runs
//! - `identifier` - identifiers and keywords
//! - `operator` - one- and two-character operators
//! - `string` - quoted literals
//! - `comment` - line and block comment skipping

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use self::core::Scanner;
