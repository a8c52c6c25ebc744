//! Error handling module for the lexis CLI.
//!
//! Every command returns [`Result`], and `main` prints the error and exits
//! with status 1.

use thiserror::Error;

/// Main error type for the lexis CLI application.
#[derive(Error, Debug)]
pub enum CliError {
    /// Error when loading or parsing configuration fails.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when reading an input file fails.
    #[error("File operation failed: {0}")]
    FileOperation(String),

    /// Error when command-line input is inconsistent.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Error when a command finishes with failures.
    #[error("Command execution failed: {0}")]
    CommandExecution(String),

    /// Error when the scanner rejects the input; holds the rendered diagnostic.
    #[error("{0}")]
    Scan(String),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Text written to stderr before exiting.
    ///
    /// A scan failure is already a complete diagnostic and is printed as is.
    pub fn report(&self) -> String {
        match self {
            CliError::Scan(diagnostic) => diagnostic.clone(),
            other => format!("error: {}\n", other),
        }
    }
}

/// Result type alias using CliError.
pub type Result<T> = std::result::Result<T, CliError>;
