//! Codes command implementation.
//!
//! Prints the lexical error code table, or the message for one code.

use std::io::Write;

use tslex_util::ErrorCode;

use crate::commands::traits::{Command, CommandDescription};
use crate::error::{CliError, Result};

/// Arguments for the codes command.
#[derive(Debug, Clone, Default)]
pub struct CodesArgs {
    /// Code to explain, as `TS1002` or `1002`; all codes when absent.
    pub code: Option<String>,
}

/// Codes command handler.
pub struct CodesCommand {
    args: CodesArgs,
}

impl CodesCommand {
    /// Execute the command, writing to stdout.
    pub fn run(&self) -> Result<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.write_to(&mut out)
    }

    /// Execute the command, writing to `out`.
    pub fn write_to(&self, out: &mut impl Write) -> Result<()> {
        let codes = match &self.args.code {
            Some(text) => vec![parse_code(text)?],
            None => ErrorCode::ALL.to_vec(),
        };
        for code in codes {
            writeln!(out, "{:<8}{}", code.as_str(), code.message())?;
        }
        Ok(())
    }
}

/// Parse `TS1002`, `ts1002` or `1002` into a known error code.
fn parse_code(text: &str) -> Result<ErrorCode> {
    let trimmed = text.trim();
    let digits = trimmed
        .get(..ErrorCode::PREFIX.len())
        .filter(|prefix| prefix.eq_ignore_ascii_case(ErrorCode::PREFIX))
        .map_or(trimmed, |prefix| &trimmed[prefix.len()..]);

    digits
        .parse::<u32>()
        .ok()
        .and_then(ErrorCode::from_code)
        .ok_or_else(|| CliError::UnknownCode(text.to_string()))
}

impl Command for CodesCommand {
    type Args = CodesArgs;
    type Output = ();

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        self.run()
    }

    fn name() -> &'static str {
        "codes"
    }
}

impl CommandDescription for CodesCommand {
    fn description() -> &'static str {
        "List lexical error codes"
    }

    fn help() -> &'static str {
        "Prints every error code with its message, or only the message of \
         the code given as `TS1002` or `1002`."
    }
}

/// Run the codes command.
pub fn run_codes(args: CodesArgs) -> Result<()> {
    CodesCommand::new(args).execute()
}
