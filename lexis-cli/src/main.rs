//! Lexis CLI - Command-line front end for the lexis scanner.
//!
//! Parses arguments with clap, sets up logging, loads `lexis.toml` and
//! dispatches to a subcommand.

mod commands;
mod config;
mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{CheckArgs, CheckCommand, TokensArgs, TokensCommand};
use config::Config;
use error::{CliError, Result};

/// Lexis - Tokenize source text of a small C-like scripting language
#[derive(Parser, Debug)]
#[command(name = "lexis")]
#[command(author = "Lexis Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tokenize source text of a small C-like scripting language", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "LEXIS_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "LEXIS_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "LEXIS_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the lexis CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the tokens of one source
    ///
    /// Reads a file, an inline expression or standard input and prints
    /// one token per line, or a JSON array with --format json.
    Tokens(TokensCommandArgs),

    /// Scan files and report errors
    ///
    /// Scans every file in parallel and prints a diagnostic for each file
    /// that fails. Exits non-zero if any file fails.
    Check(CheckCommandArgs),
}

/// Arguments for the tokens subcommand.
#[derive(Parser, Debug)]
struct TokensCommandArgs {
    /// Input file (`-` or omitted reads standard input)
    input: Option<PathBuf>,

    /// Scan this text instead of a file
    #[arg(short, long, conflicts_with = "input")]
    expr: Option<String>,

    /// Output format (text, json)
    #[arg(short, long)]
    format: Option<String>,

    /// Print line and column for each token
    #[arg(long)]
    spans: bool,

    /// Treat `&&` and `||` as single operators
    #[arg(long)]
    compound_logical: bool,

    /// Fail on unterminated strings and block comments
    #[arg(long)]
    strict: bool,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckCommandArgs {
    /// Files to scan
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Fail on unterminated strings and block comments
    #[arg(long)]
    strict: bool,

    /// Number of parallel jobs
    #[arg(short, long)]
    jobs: Option<u32>,
}

fn main() {
    if let Err(e) = run() {
        eprint!("{}", e.report());
        std::process::exit(1);
    }
}

/// Parses arguments, initializes logging and configuration, and runs the
/// selected command.
fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.no_color)?;

    let config = load_config(cli.config.as_deref())?;

    execute_command(cli.command, config)
}

/// Initialize the logging system.
///
/// Logs go to stderr so token output on stdout stays machine-readable.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| CliError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Tokens(args) => {
            let tokens_args = TokensArgs {
                input: args.input,
                expr: args.expr,
                format: args.format,
                spans: args.spans,
                compound_logical: args.compound_logical,
                strict: args.strict,
            };
            commands::run(&TokensCommand::new(tokens_args, config))
        },
        Commands::Check(args) => {
            let check_args = CheckArgs {
                files: args.files,
                strict: args.strict,
                jobs: args.jobs,
            };
            commands::run(&CheckCommand::new(check_args, config))
        },
    }
}
