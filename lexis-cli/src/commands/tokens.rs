//! Tokens command implementation.
//!
//! Scans one source and prints its tokens as text or JSON.

use std::path::PathBuf;

use lexis_lex::{scan_with_options, Token};
use lexis_util::{SourceFile, Span};
use serde::Serialize;

use crate::commands::common::{merge_scan_options, InputSource, OutputFormat};
use crate::commands::Command;
use crate::config::Config;
use crate::error::{CliError, Result};

/// Arguments for the tokens command.
#[derive(Debug, Clone, Default)]
pub struct TokensArgs {
    /// Input file; `None` or `-` reads standard input.
    pub input: Option<PathBuf>,
    /// Inline source text.
    pub expr: Option<String>,
    /// Output format name.
    pub format: Option<String>,
    /// Print token positions.
    pub spans: bool,
    /// Join `&&` and `||`.
    pub compound_logical: bool,
    /// Reject unterminated literals.
    pub strict: bool,
}

/// Tokens command handler.
pub struct TokensCommand {
    args: TokensArgs,
    config: Config,
}

/// Token shape written by `--format json`.
#[derive(Serialize)]
struct TokenRecord<'a> {
    kind: &'static str,
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    span: Option<Span>,
}

impl TokensCommand {
    /// Create a new TokensCommand.
    pub fn new(args: TokensArgs, config: Config) -> Self {
        Self { args, config }
    }

    fn output_format(&self) -> Result<OutputFormat> {
        let name = self
            .args
            .format
            .as_deref()
            .unwrap_or(&self.config.output.format);
        OutputFormat::parse(name)
    }

    fn show_spans(&self) -> bool {
        self.args.spans || self.config.output.show_spans
    }
}

impl Command for TokensCommand {
    const NAME: &'static str = "tokens";

    fn execute(&self) -> Result<()> {
        let format = self.output_format()?;
        let source = InputSource::select(self.args.input.clone(), self.args.expr.clone())?;
        let content = source.read()?;
        let options = merge_scan_options(
            self.config.scan,
            self.args.compound_logical,
            self.args.strict,
        );

        let tokens = match scan_with_options(&content, options) {
            Ok(tokens) => tokens,
            Err(err) => {
                let file = SourceFile::new(source.name(), content.as_str());
                return Err(CliError::Scan(err.render(&file)));
            },
        };

        tracing::debug!(source = %source.name(), tokens = tokens.len(), "scanned");
        print!("{}", render_tokens(&tokens, format, self.show_spans())?);
        Ok(())
    }
}

/// Renders tokens in the requested format.
pub fn render_tokens(tokens: &[Token<'_>], format: OutputFormat, spans: bool) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(tokens, spans)),
        OutputFormat::Json => {
            let records: Vec<TokenRecord<'_>> = tokens
                .iter()
                .map(|token| TokenRecord {
                    kind: token.kind.as_str(),
                    text: token.text,
                    span: spans.then_some(token.span),
                })
                .collect();
            let mut json = serde_json::to_string_pretty(&records)?;
            json.push('\n');
            Ok(json)
        },
    }
}

fn render_text(tokens: &[Token<'_>], spans: bool) -> String {
    let mut out = String::new();
    for token in tokens {
        if spans {
            out.push_str(&format!("{:<8}", token.span.to_string()));
        }
        out.push_str(&format!(
            "{:<12}{}\n",
            token.kind.as_str(),
            token.text.escape_debug()
        ));
    }
    out
}
