//! Error type for callers that treat lexical errors as fatal.

use std::collections::BTreeMap;

use thiserror::Error;
use tslex_util::diagnostic::ErrorCode;

/// Lexical errors collected over a whole input.
///
/// Produced by [`Lexer::finish`](crate::Lexer::finish) once the input has
/// been drained.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// One or more lines held malformed input.
    #[error("{} lexical error(s) in {source_name}", .errors.len())]
    Diagnostics {
        /// Name of the lexed source.
        source_name: String,
        /// Last error recorded per line.
        errors: BTreeMap<u32, ErrorCode>,
    },
}

impl LexError {
    /// The recorded errors, keyed by line.
    pub fn errors(&self) -> &BTreeMap<u32, ErrorCode> {
        match self {
            LexError::Diagnostics { errors, .. } => errors,
        }
    }

    /// Name of the source the errors were found in.
    pub fn source_name(&self) -> &str {
        match self {
            LexError::Diagnostics { source_name, .. } => source_name,
        }
    }
}
