//! Tokens command implementation.
//!
//! Lexes each input and prints its token stream, as text or JSON.

use std::io::Write;
use std::path::PathBuf;

use serde::Serialize;
use tslex_lex::{Lexer, Token};
use tslex_util::Diagnostic;

use crate::commands::common::{console_reporter, read_source, Summary};
use crate::commands::traits::{Command, CommandDescription};
use crate::config::OutputFormat;
use crate::error::Result;

/// Arguments for the tokens command.
#[derive(Debug, Clone)]
pub struct TokensArgs {
    /// Files to lex; `-` reads standard input.
    pub files: Vec<PathBuf>,
    /// Output format.
    pub format: OutputFormat,
    /// Print comment tokens.
    pub include_comments: bool,
    /// Color diagnostics.
    pub color: bool,
    /// Suppress diagnostics.
    pub quiet: bool,
}

impl Default for TokensArgs {
    fn default() -> Self {
        Self {
            files: Vec::new(),
            format: OutputFormat::Text,
            include_comments: true,
            color: true,
            quiet: false,
        }
    }
}

/// Tokens of one file, as serialized in JSON output.
#[derive(Debug, Serialize)]
struct FileTokens {
    source: String,
    tokens: Vec<Token>,
    errors: Vec<Diagnostic>,
}

/// Tokens command handler.
pub struct TokensCommand {
    args: TokensArgs,
}

impl TokensCommand {
    /// Execute the command, writing tokens to stdout.
    pub fn run(&self) -> Result<Summary> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.write_to(&mut out)
    }

    /// Execute the command, writing tokens to `out`.
    pub fn write_to(&self, out: &mut impl Write) -> Result<Summary> {
        let reporter = console_reporter(self.args.color, self.args.quiet);
        let mut summary = Summary::default();
        let mut files = Vec::with_capacity(self.args.files.len());

        for path in &self.args.files {
            let source = read_source(path)?;
            tracing::info!(source = %source.name, bytes = source.text.len(), "lexing");

            let mut lexer = Lexer::new(source.text, &reporter).with_source_name(&source.name);
            let tokens: Vec<Token> = lexer
                .by_ref()
                .filter(|token| self.args.include_comments || !token.kind().is_comment())
                .collect();
            summary.record(&lexer.finish());

            let errors = lexer
                .errors()
                .iter()
                .map(|(&line, &code)| Diagnostic::new(&source.name, code, line))
                .collect();
            files.push(FileTokens {
                source: source.name,
                tokens,
                errors,
            });
        }

        match self.args.format {
            OutputFormat::Text => write_text(out, &files)?,
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, &files)?;
                writeln!(out)?;
            },
        }

        Ok(summary)
    }
}

/// Write one `KIND lexeme` line per token, with a header per file when
/// there is more than one.
fn write_text(out: &mut impl Write, files: &[FileTokens]) -> Result<()> {
    let with_headers = files.len() > 1;
    for file in files {
        if with_headers {
            writeln!(out, "==> {} <==", file.source)?;
        }
        for token in &file.tokens {
            match token.lexeme() {
                Some(lexeme) => writeln!(out, "{} {}", token.kind(), single_line(lexeme))?,
                None => writeln!(out, "{}", token.kind())?,
            }
        }
    }
    Ok(())
}

/// Keeps multi-line comments on one output line.
fn single_line(lexeme: &str) -> String {
    lexeme.replace('\r', "\\r").replace('\n', "\\n")
}

impl Command for TokensCommand {
    type Args = TokensArgs;
    type Output = Summary;

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        self.run()
    }

    fn name() -> &'static str {
        "tokens"
    }
}

impl CommandDescription for TokensCommand {
    fn description() -> &'static str {
        "Print the token stream of each input"
    }

    fn help() -> &'static str {
        "Lexes each input file and prints one token per line, or a JSON \
         array with the tokens and recorded errors of every file."
    }
}

/// Run the tokens command.
pub fn run_tokens(args: TokensArgs) -> Result<Summary> {
    TokensCommand::new(args).execute()
}
