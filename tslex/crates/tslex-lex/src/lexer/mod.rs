//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - Main Lexer struct, dispatch and error recording
//! - `identifier` - Identifier and keyword lexing
//! - `number` - Numeric literal lexing
//! - `string` - String literal and escape lexing
//! - `operator` - Punctuator lexing
//! - `comment` - Comment lexing

mod comment;
pub(crate) mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use core::Lexer;
