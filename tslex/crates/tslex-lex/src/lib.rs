//! tslex-lex - Lexical analyzer for TypeScript-like source text
//!
//! This crate turns source text into a linear stream of classified tokens
//! for a downstream parser. Scanning is a single pass over an in-memory
//! buffer and never stops at malformed input: each error is recorded
//! against its line, handed to a [`Reporter`](tslex_util::Reporter), and
//! replaced by an `Invalid` token.
//!
//! # Example Usage
//!
//! ```
//! use tslex_lex::{Lexer, Token, TokenKind};
//! use tslex_util::Handler;
//!
//! let handler = Handler::new();
//! let mut lexer = Lexer::new("let variable: number = 5;", &handler);
//!
//! assert_eq!(lexer.next_token(), Token::bare(TokenKind::Let));
//! assert_eq!(lexer.next_token(), Token::new(TokenKind::Identifier, "variable"));
//!
//! // Or drain the rest through the iterator
//! let rest: Vec<TokenKind> = lexer.map(|token| token.kind()).collect();
//! assert_eq!(rest.len(), 5);
//! assert!(!handler.has_errors());
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token type definitions
//! - [`lexer`] - Main lexer implementation
//! - [`cursor`] - Character cursor over the owned input
//! - [`chars`] - Character classes used by the scanners
//! - [`tables`] - Keyword and punctuator tables
//! - [`error`] - Error type for callers that treat lexical errors as fatal
//!
//! # Token Categories
//!
//! ## Keywords
//!
//! Always reserved: `await break case catch class const continue default
//! delete do else enum export extends false finally for function if
//! implements import in instanceof interface let new null package private
//! protected public return static super switch this throw true try typeof
//! undefined var void while yield as`
//!
//! Contextual: `of get set any declare require string number symbol object
//! boolean from constructor module type`
//!
//! ## Literals
//!
//! - **Numeric**: `42`, `1_000`, `3.14`, `.5`, `-7`
//! - **String**: `"hello"`, `'it\'s'`, `"\u{56}"`
//! - **Boolean**: `true`, `false`
//!
//! ## Comments
//!
//! `// line` and `/* block */` are returned as tokens.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod chars;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod tables;
pub mod token;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use error::LexError;
pub use lexer::Lexer;
pub use tables::keyword_from_ident;
pub use token::{Token, TokenKind};
