//! Check command implementation.
//!
//! Scans a list of files in parallel and reports which ones scan cleanly.
//! Each file gets its own scanner, so files never share state.

use std::path::{Path, PathBuf};
use std::time::Instant;

use lexis_lex::{scan_with_options, ScanOptions};
use lexis_util::SourceFile;
use rayon::prelude::*;

use crate::commands::common::{error_messages, merge_scan_options, read_file};
use crate::commands::Command;
use crate::config::Config;
use crate::error::{CliError, Result};

/// Arguments for the check command.
#[derive(Debug, Clone, Default)]
pub struct CheckArgs {
    /// Files to scan.
    pub files: Vec<PathBuf>,
    /// Reject unterminated literals.
    pub strict: bool,
    /// Number of parallel jobs.
    pub jobs: Option<u32>,
}

/// Outcome of scanning one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileReport {
    /// The file scanned without error.
    Passed { path: PathBuf, tokens: usize },
    /// The scanner rejected the file; holds the rendered diagnostic.
    Failed { path: PathBuf, diagnostic: String },
    /// The file could not be read.
    Unreadable { path: PathBuf, message: String },
}

impl FileReport {
    /// Returns true unless the file passed.
    pub fn is_failure(&self) -> bool {
        !matches!(self, FileReport::Passed { .. })
    }
}

/// Check command handler.
pub struct CheckCommand {
    args: CheckArgs,
    config: Config,
}

impl CheckCommand {
    /// Create a new CheckCommand.
    pub fn new(args: CheckArgs, config: Config) -> Self {
        Self { args, config }
    }

    fn jobs(&self) -> usize {
        self.args.jobs.unwrap_or(self.config.check.jobs).max(1) as usize
    }

    fn validate_input_files(&self) -> Result<()> {
        if self.args.files.is_empty() {
            return Err(CliError::Validation(
                error_messages::NO_INPUT_FILES.to_string(),
            ));
        }
        Ok(())
    }

    /// Scans every file on a dedicated thread pool, keeping input order.
    fn check_all(&self, options: ScanOptions) -> Result<Vec<FileReport>> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.jobs())
            .build()
            .map_err(|e| CliError::CommandExecution(format!("Failed to start workers: {}", e)))?;

        Ok(pool.install(|| {
            self.args
                .files
                .par_iter()
                .map(|path| check_file(path, options))
                .collect::<Vec<_>>()
        }))
    }
}

impl Command for CheckCommand {
    const NAME: &'static str = "check";

    fn execute(&self) -> Result<()> {
        let start_time = Instant::now();
        self.validate_input_files()?;

        let options = merge_scan_options(self.config.scan, false, self.args.strict);
        let reports = self.check_all(options)?;

        for report in &reports {
            print_report(report);
        }

        let failed = reports.iter().filter(|r| r.is_failure()).count();
        tracing::info!(
            files = reports.len(),
            failed,
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            "check finished"
        );

        if failed > 0 {
            return Err(CliError::CommandExecution(format!(
                "{} of {} {}",
                failed,
                reports.len(),
                error_messages::FILES_FAILED
            )));
        }
        Ok(())
    }
}

/// Scans a single file.
pub fn check_file(path: &Path, options: ScanOptions) -> FileReport {
    let content = match read_file(path) {
        Ok(content) => content,
        Err(err) => {
            return FileReport::Unreadable {
                path: path.to_path_buf(),
                message: err.to_string(),
            }
        },
    };

    match scan_with_options(&content, options) {
        Ok(tokens) => FileReport::Passed {
            path: path.to_path_buf(),
            tokens: tokens.len(),
        },
        Err(err) => {
            let file = SourceFile::new(path.display().to_string(), content.as_str());
            FileReport::Failed {
                path: path.to_path_buf(),
                diagnostic: err.render(&file),
            }
        },
    }
}

fn print_report(report: &FileReport) {
    match report {
        FileReport::Passed { path, tokens } => {
            println!("ok {} ({} tokens)", path.display(), tokens);
        },
        FileReport::Failed { diagnostic, .. } => eprint!("{}", diagnostic),
        FileReport::Unreadable { message, .. } => eprintln!("error: {}", message),
    }
}
