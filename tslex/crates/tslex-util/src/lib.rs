//! tslex-util - Diagnostics shared by the tslex crates
//!
//! This crate holds the static error-code table and the reporting contract
//! between the lexer and whatever front end presents its errors.
//!
//! - [`ErrorCode`] - the closed table of lexical error codes and messages
//! - [`Reporter`] - the `(source name, code, line)` sink the lexer calls
//! - [`Handler`] - a reporter that collects diagnostics for later inspection
//! - [`ConsoleReporter`] - a reporter that prints colored lines to stderr

#![warn(missing_docs)]

pub mod diagnostic;

pub use diagnostic::{ConsoleReporter, Diagnostic, ErrorCode, Handler, Reporter};
