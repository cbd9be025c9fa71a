//! Console reporter.
//!
//! Prints one line per diagnostic to standard error in the form
//! `file:line - error TS1002: Unterminated string literal.`

use std::env;

use owo_colors::OwoColorize;

use super::{Diagnostic, ErrorCode, Reporter};

/// A [`Reporter`] that writes human-readable diagnostics to stderr.
///
/// In test mode the reporter is completely silent.
///
/// # Examples
///
/// ```
/// use tslex_util::diagnostic::{ConsoleReporter, ErrorCode};
///
/// let reporter = ConsoleReporter::new(false);
/// assert_eq!(
///     reporter.format("main.ts", ErrorCode::UnexpectedToken, 2),
///     "main.ts:2 - error TS1: Unexpected token"
/// );
/// ```
#[derive(Clone, Copy, Debug)]
pub struct ConsoleReporter {
    color: bool,
    enabled: bool,
}

impl ConsoleReporter {
    /// Environment variable that switches the reporter into test mode.
    pub const ENV_VAR: &'static str = "TSLEX_ENV";

    /// Create an enabled reporter.
    pub fn new(color: bool) -> Self {
        Self {
            color,
            enabled: true,
        }
    }

    /// Create a reporter that never prints.
    pub fn silent() -> Self {
        Self {
            color: false,
            enabled: false,
        }
    }

    /// Create a reporter that is silent when `TSLEX_ENV=test`.
    pub fn from_env(color: bool) -> Self {
        let test_mode = env::var(Self::ENV_VAR).is_ok_and(|mode| mode == "test");
        Self {
            color,
            enabled: !test_mode,
        }
    }

    /// Whether this reporter prints anything.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Render a diagnostic line without printing it.
    pub fn format(&self, source_name: &str, code: ErrorCode, line: u32) -> String {
        if !self.color {
            return Diagnostic::new(source_name, code, line).to_string();
        }

        format!(
            "{}:{} - {} {} {}",
            source_name.truecolor(0x8B, 0xBA, 0x7F),
            line.yellow(),
            "error".red(),
            format!("{}:", code.as_str()).bright_black(),
            code
        )
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::from_env(true)
    }
}

impl Reporter for ConsoleReporter {
    fn report(&self, source_name: &str, code: ErrorCode, line: u32) {
        if self.enabled {
            eprintln!("{}", self.format(source_name, code, line));
        }
    }
}
