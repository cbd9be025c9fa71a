//! Diagnostic module - Error reporting infrastructure.
//!
//! The lexer never formats or prints anything itself. It hands every
//! malformed-input condition to a [`Reporter`] as a
//! `(source name, error code, line)` triple and carries on scanning.
//!
//! # Examples
//!
//! ```
//! use tslex_util::diagnostic::{ErrorCode, Handler, Reporter};
//!
//! let handler = Handler::new();
//! handler.report("main.ts", ErrorCode::UnexpectedToken, 3);
//!
//! assert!(handler.has_errors());
//! assert_eq!(handler.diagnostics()[0].line, 3);
//! ```

mod codes;
mod console;

pub use codes::ErrorCode;
pub use console::ConsoleReporter;

use std::cell::RefCell;
use std::fmt;

/// Sink for lexical errors.
///
/// Implementations are side-effecting only: the lexer's own control flow
/// never depends on what a reporter does with the diagnostic.
pub trait Reporter {
    /// Report `code` found on `line` (1-based) of `source_name`.
    fn report(&self, source_name: &str, code: ErrorCode, line: u32);
}

/// A single reported lexical error.
///
/// # Examples
///
/// ```
/// use tslex_util::diagnostic::{Diagnostic, ErrorCode};
///
/// let diag = Diagnostic::new("main.ts", ErrorCode::UnterminatedComment, 7);
/// assert_eq!(diag.to_string(), "main.ts:7 - error TS1010: '*/' expected.");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Diagnostic {
    /// Name of the source the error was found in
    pub source_name: String,
    /// Error code
    pub code: ErrorCode,
    /// Line number (1-based)
    pub line: u32,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(source_name: impl Into<String>, code: ErrorCode, line: u32) -> Self {
        Self {
            source_name: source_name.into(),
            code,
            line,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{} - error {}: {}",
            self.source_name,
            self.line,
            self.code.as_str(),
            self.code
        )
    }
}

/// Handler for collecting reported diagnostics
///
/// The `Handler` stores every diagnostic it receives and provides methods for
/// querying them.
///
/// # Examples
///
/// ```
/// use tslex_util::diagnostic::{ErrorCode, Handler, Reporter};
///
/// let handler = Handler::new();
/// handler.report("input", ErrorCode::UnsupportedPunctuator, 1);
///
/// if handler.has_errors() {
///     eprintln!("Lexing failed with {} errors", handler.error_count());
/// }
/// ```
#[derive(Debug)]
pub struct Handler {
    /// Collected diagnostics
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// Create a new handler
    pub fn new() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
        }
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.borrow().is_empty()
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.diagnostics.borrow().len()
    }

    /// Get all diagnostics, in the order they were reported
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Get the error codes, in the order they were reported
    pub fn codes(&self) -> Vec<ErrorCode> {
        self.diagnostics.borrow().iter().map(|d| d.code).collect()
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for Handler {
    fn report(&self, source_name: &str, code: ErrorCode, line: u32) {
        self.diagnostics
            .borrow_mut()
            .push(Diagnostic::new(source_name, code, line));
    }
}
