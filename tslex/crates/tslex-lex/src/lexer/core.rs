//! Core lexer implementation.
//!
//! This module contains the main Lexer struct, the dispatch loop and the
//! conversion of scanner failures into recorded, reported errors.

use std::collections::BTreeMap;

use tslex_util::diagnostic::{ErrorCode, Reporter};

use crate::chars::{
    is_comment_start, is_decimal_digit, is_identifier_start, is_operator_start, is_quote,
    is_whitespace,
};
use crate::cursor::Cursor;
use crate::error::LexError;
use crate::tables::structural_kind;
use crate::token::{Token, EOF_TOKEN};

/// A scanner failure: the error code and the line the cursor was on when
/// the malformed input was detected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct ScanError {
    pub(crate) code: ErrorCode,
    pub(crate) line: u32,
}

/// Result of a single scanner.
pub(crate) type Scan<T> = Result<T, ScanError>;

/// Lexer for TypeScript-like source text.
///
/// The lexer is pull-based: each call to [`Lexer::next_token`] scans one
/// token. Malformed input never stops scanning. The error is recorded
/// against its line, handed to the [`Reporter`], and an `Invalid` token is
/// returned in its place.
///
/// # Example
///
/// ```
/// use tslex_lex::{Lexer, TokenKind};
/// use tslex_util::Handler;
///
/// let handler = Handler::new();
/// let mut lexer = Lexer::new("let x = 1;", &handler);
///
/// assert_eq!(lexer.next_token().kind(), TokenKind::Let);
/// assert_eq!(lexer.next_token().lexeme(), Some("x"));
/// ```
pub struct Lexer<'a> {
    /// Character cursor over the owned input.
    pub(crate) cursor: Cursor,

    /// Sink for lexical errors.
    reporter: &'a dyn Reporter,

    /// Name passed to the reporter.
    source_name: String,

    /// Last error recorded per line.
    errors: BTreeMap<u32, ErrorCode>,
}

impl<'a> Lexer<'a> {
    /// Source name used until [`Lexer::with_source_name`] sets another.
    pub const DEFAULT_SOURCE_NAME: &'static str = "<input>";

    /// Creates a new lexer over `input`.
    pub fn new(input: impl Into<String>, reporter: &'a dyn Reporter) -> Self {
        Self {
            cursor: Cursor::new(input),
            reporter,
            source_name: Self::DEFAULT_SOURCE_NAME.to_string(),
            errors: BTreeMap::new(),
        }
    }

    /// Sets the name reported alongside each error.
    pub fn with_source_name(mut self, source_name: impl Into<String>) -> Self {
        self.source_name = source_name.into();
        self
    }

    /// Returns the next token from the input.
    ///
    /// Skips whitespace, then dispatches on the current character. Returns
    /// [`Token::EOF`] once the input is exhausted, and on every call after.
    pub fn next_token(&mut self) -> Token {
        while let Some(c) = self.cursor.current_char() {
            let scanned = if is_whitespace(c) {
                self.cursor.advance();
                continue;
            } else if is_comment_start(c) {
                self.lex_comment()
            } else if is_operator_start(c) {
                self.lex_punctuator()
            } else if is_decimal_digit(c) {
                self.lex_numeric_literal()
            } else if is_quote(c) {
                self.lex_string(c)
            } else if is_identifier_start(c) {
                Ok(self.lex_word())
            } else {
                self.lex_structural(c)
            };

            let token = scanned.unwrap_or_else(|error| self.record(error));
            tracing::trace!(kind = %token.kind(), line = self.cursor.line(), "token");
            return token;
        }

        Token::EOF
    }

    /// Resolves `{ } ( ) [ ] ; : ,`; anything else is unexpected.
    ///
    /// The character is consumed either way.
    fn lex_structural(&mut self, c: char) -> Scan<Token> {
        self.cursor.advance();
        match structural_kind(c) {
            Some(kind) => Ok(Token::new(kind, c)),
            None => Err(self.fail(ErrorCode::UnexpectedToken)),
        }
    }

    /// Builds a scanner failure on the current line.
    pub(crate) fn fail(&self, code: ErrorCode) -> ScanError {
        ScanError {
            code,
            line: self.cursor.line(),
        }
    }

    /// Records and reports a failure, returning the invalid marker.
    fn record(&mut self, error: ScanError) -> Token {
        let ScanError { code, line } = error;
        tracing::debug!(
            source = %self.source_name,
            line,
            code = code.code(),
            "lexical error: {}",
            code
        );
        self.errors.insert(line, code);
        self.reporter.report(&self.source_name, code, line);
        Token::invalid()
    }

    /// Moves back to the start of the input, clearing recorded errors.
    pub fn reset(&mut self) {
        self.cursor.reset();
        self.errors.clear();
    }

    /// Replaces the input and moves to its start, clearing recorded errors.
    pub fn reset_with(&mut self, input: impl Into<String>) {
        self.cursor.reset_with(input);
        self.errors.clear();
    }

    /// Drains the remaining tokens, excluding the end-of-input token.
    pub fn tokenize(&mut self) -> Vec<Token> {
        self.by_ref().collect()
    }

    /// Converts the recorded errors into a result.
    pub fn finish(&self) -> Result<(), LexError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(LexError::Diagnostics {
                source_name: self.source_name.clone(),
                errors: self.errors.clone(),
            })
        }
    }

    /// Returns the input buffer.
    pub fn buffer(&self) -> &str {
        self.cursor.buffer()
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current byte position in the input.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Returns the last error recorded on each line.
    pub fn errors(&self) -> &BTreeMap<u32, ErrorCode> {
        &self.errors
    }

    /// Returns the end-of-input token.
    pub fn eof_token(&self) -> &'static Token {
        &EOF_TOKEN
    }

    /// Returns the name passed to the reporter.
    pub fn source_name(&self) -> &str {
        &self.source_name
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.is_eof() {
            None
        } else {
            Some(token)
        }
    }
}
