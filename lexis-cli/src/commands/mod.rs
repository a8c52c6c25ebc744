//! Command modules for the lexis CLI.
//!
//! Each subcommand lives in its own file and implements [`Command`].

pub mod check;
pub mod common;
pub mod tokens;

use crate::error::Result;

pub use check::{CheckArgs, CheckCommand};
pub use tokens::{TokensArgs, TokensCommand};

/// Standard command trait that all lexis commands implement.
pub trait Command {
    /// Command name used in log output.
    const NAME: &'static str;

    /// Execute the command.
    fn execute(&self) -> Result<()>;
}

/// Run a command, logging its start and outcome.
pub fn run<C: Command>(command: &C) -> Result<()> {
    tracing::debug!(command = C::NAME, "running command");
    let result = command.execute();
    if let Err(err) = &result {
        tracing::debug!(command = C::NAME, error = %err, "command failed");
    }
    result
}
