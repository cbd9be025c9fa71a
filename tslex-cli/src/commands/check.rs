//! Check command implementation.
//!
//! Lexes each input for errors only and prints a one-line summary.

use std::io::Write;
use std::path::PathBuf;

use tslex_lex::Lexer;

use crate::commands::common::{console_reporter, read_source, Summary};
use crate::commands::traits::{Command, CommandDescription};
use crate::error::Result;

/// Arguments for the check command.
#[derive(Debug, Clone)]
pub struct CheckArgs {
    /// Files to check; `-` reads standard input.
    pub files: Vec<PathBuf>,
    /// Color diagnostics.
    pub color: bool,
    /// Suppress diagnostics and the summary line.
    pub quiet: bool,
}

/// Check command handler.
pub struct CheckCommand {
    args: CheckArgs,
}

impl CheckCommand {
    /// Execute the command, writing the summary to stdout.
    pub fn run(&self) -> Result<Summary> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.write_to(&mut out)
    }

    /// Execute the command, writing the summary to `out`.
    pub fn write_to(&self, out: &mut impl Write) -> Result<Summary> {
        let reporter = console_reporter(self.args.color, self.args.quiet);
        let mut summary = Summary::default();

        for path in &self.args.files {
            let source = read_source(path)?;
            let mut lexer = Lexer::new(source.text, &reporter).with_source_name(source.name);
            let count = lexer.by_ref().count();
            let outcome = lexer.finish();
            tracing::info!(
                source = %lexer.source_name(),
                tokens = count,
                clean = outcome.is_ok(),
                "checked"
            );
            summary.record(&outcome);
        }

        if !self.args.quiet {
            writeln!(
                out,
                "{} file(s) checked, {} with errors",
                summary.files, summary.files_with_errors
            )?;
        }
        Ok(summary)
    }
}

impl Command for CheckCommand {
    type Args = CheckArgs;
    type Output = Summary;

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        self.run()
    }

    fn name() -> &'static str {
        "check"
    }
}

impl CommandDescription for CheckCommand {
    fn description() -> &'static str {
        "Report lexical errors without printing tokens"
    }

    fn help() -> &'static str {
        "Lexes each input file, reports every lexical error to stderr and \
         exits with status 1 if any file had errors."
    }
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> Result<Summary> {
    CheckCommand::new(args).execute()
}
