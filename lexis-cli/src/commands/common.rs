//! Common types and utilities for lexis commands.

use std::io::Read;
use std::path::{Path, PathBuf};

use lexis_lex::ScanOptions;

use crate::error::{CliError, Result};

// ============================================================================
// Output Format
// ============================================================================

/// Supported token output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One token per line.
    Text,
    /// A JSON array of token objects.
    Json,
}

impl OutputFormat {
    /// Parse a format name (case-insensitive).
    pub fn parse(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(CliError::Validation(format!(
                "{}: {}",
                error_messages::UNKNOWN_FORMAT,
                s
            ))),
        }
    }
}

// ============================================================================
// Input Sources
// ============================================================================

/// Where the source text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// A file on disk.
    File(PathBuf),
    /// Standard input.
    Stdin,
    /// Text given on the command line.
    Inline(String),
}

impl InputSource {
    /// Picks the source from a positional path and an inline expression.
    ///
    /// No path, or the path `-`, means standard input.
    pub fn select(path: Option<PathBuf>, expr: Option<String>) -> Result<Self> {
        match (path, expr) {
            (Some(_), Some(_)) => Err(CliError::Validation(
                error_messages::FILE_AND_EXPR.to_string(),
            )),
            (None, Some(expr)) => Ok(Self::Inline(expr)),
            (Some(path), None) if path != Path::new("-") => Ok(Self::File(path)),
            _ => Ok(Self::Stdin),
        }
    }

    /// Display name used in diagnostics.
    pub fn name(&self) -> String {
        match self {
            Self::File(path) => path.display().to_string(),
            Self::Stdin => "<stdin>".to_string(),
            Self::Inline(_) => "<expr>".to_string(),
        }
    }

    /// Reads the whole source text.
    pub fn read(&self) -> Result<String> {
        match self {
            Self::File(path) => read_file(path),
            Self::Stdin => {
                let mut content = String::new();
                std::io::stdin().read_to_string(&mut content)?;
                Ok(content)
            },
            Self::Inline(expr) => Ok(expr.clone()),
        }
    }
}

/// Reads a source file, naming the path in any error.
pub fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .map_err(|e| CliError::FileOperation(format!("{}: {}", path.display(), e)))
}

/// Applies command-line switches on top of configured scan options.
///
/// Flags can only turn options on.
pub fn merge_scan_options(configured: ScanOptions, compound_logical: bool, strict: bool) -> ScanOptions {
    configured
        .with_compound_logical_operators(configured.compound_logical_operators || compound_logical)
        .with_strict_literals(configured.strict_literals || strict)
}

// ============================================================================
// Message Constants
// ============================================================================

/// Error message constants.
pub mod error_messages {
    /// Error when no input files are provided.
    pub const NO_INPUT_FILES: &str = "No input files specified";

    /// Error when both a file and an inline expression are given.
    pub const FILE_AND_EXPR: &str = "Cannot combine an input file with --expr";

    /// Error for an unsupported output format.
    pub const UNKNOWN_FORMAT: &str = "Unknown format";

    /// Error when some checked files fail.
    pub const FILES_FAILED: &str = "file(s) failed to scan";
}
