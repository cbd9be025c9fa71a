//! Common types and utilities for tslex commands.

use std::io::Read;
use std::path::Path;

use tslex_lex::LexError;
use tslex_util::ConsoleReporter;

use crate::error::{CliError, Result};

/// Path argument that selects standard input.
pub const STDIN_PATH: &str = "-";

/// Source name reported for standard input.
pub const STDIN_NAME: &str = "<stdin>";

// ============================================================================
// Sources
// ============================================================================

/// A named input loaded fully into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    /// Name passed to the reporter.
    pub name: String,
    /// The whole input text.
    pub text: String,
}

/// Read a source file, or standard input when `path` is `-`.
pub fn read_source(path: &Path) -> Result<Source> {
    if path.as_os_str() == STDIN_PATH {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .map_err(|source| CliError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        return Ok(Source {
            name: STDIN_NAME.to_string(),
            text,
        });
    }

    let text = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Source {
        name: path.display().to_string(),
        text,
    })
}

/// Build the reporter used to print diagnostics.
pub fn console_reporter(color: bool, quiet: bool) -> ConsoleReporter {
    if quiet {
        ConsoleReporter::silent()
    } else {
        ConsoleReporter::from_env(color)
    }
}

// ============================================================================
// Summary
// ============================================================================

/// Outcome of lexing a batch of files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Number of files lexed.
    pub files: usize,
    /// Number of files with at least one lexical error.
    pub files_with_errors: usize,
    /// Number of lines holding a lexical error, over all files.
    pub error_lines: usize,
}

impl Summary {
    /// Record the outcome of one file.
    pub fn record(&mut self, outcome: &std::result::Result<(), LexError>) {
        self.files += 1;
        if let Err(err) = outcome {
            self.files_with_errors += 1;
            self.error_lines += err.errors().len();
        }
    }

    /// Whether every file lexed without errors.
    pub fn is_clean(&self) -> bool {
        self.files_with_errors == 0
    }
}
