//! Error handling module for the tslex CLI.
//!
//! Lexical errors are not failures of the tool: they are reported per file
//! and reflected in the exit code. The variants here cover everything that
//! stops a command from running at all.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the tslex CLI application.
#[derive(Error, Debug)]
pub enum CliError {
    /// Error when the configuration cannot be loaded or applied.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when an input file cannot be read.
    #[error("Cannot read {}: {source}", path.display())]
    Read {
        /// The file that failed to read.
        path: PathBuf,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Error when a requested error code does not exist.
    #[error("Unknown error code: {0}")]
    UnknownCode(String),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using CliError.
pub type Result<T> = std::result::Result<T, CliError>;
