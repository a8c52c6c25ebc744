//! lexis-util - Shared foundation types for the Lexis workspace
//!
//! This crate holds the pieces that are not specific to scanning but that
//! every consumer of scanner output needs:
//!
//! - [`span`] - byte ranges with line/column information, and
//!   [`SourceFile`] for mapping offsets back to lines
//! - [`diagnostic`] - error reporting types ([`Diagnostic`],
//!   [`DiagnosticCode`]) and caret-style snippet rendering
//!
//! # Example
//!
//! ```
//! use lexis_util::{Diagnostic, SourceFile, Span};
//!
//! let file = SourceFile::new("demo.js", "let x = @;");
//! let span = Span::new(8, 9, 1, 9);
//! let diag = Diagnostic::error("unexpected character '@'", span);
//! let rendered = diag.render(&file);
//! assert!(rendered.contains("demo.js:1:9"));
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticCode, SourceSnippet};
pub use span::{SourceFile, Span};
