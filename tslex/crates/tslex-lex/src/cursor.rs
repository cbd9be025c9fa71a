//! Character cursor for traversing source text.
//!
//! The cursor owns the input buffer, so the lexer can be reset onto a new
//! input without being rebuilt. Positions are byte offsets; movement is by
//! whole characters, and every line terminator consumed bumps the line
//! counter. A `\r\n` pair counts as one line break.

use crate::chars::is_line_terminator;

/// A cursor over an owned source buffer.
///
/// # Example
///
/// ```
/// use tslex_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("let x");
///
/// assert_eq!(cursor.current_char(), Some('l'));
/// cursor.advance_by(4);
/// assert_eq!(cursor.current_char(), Some('x'));
/// cursor.advance();
/// assert_eq!(cursor.current_char(), None);
/// ```
#[derive(Clone, Debug)]
pub struct Cursor {
    /// The source text being traversed.
    buffer: String,

    /// Current byte position in the buffer.
    position: usize,

    /// Current line number (1-based).
    line: u32,
}

impl Cursor {
    /// Creates a cursor at the start of `buffer`.
    pub fn new(buffer: impl Into<String>) -> Self {
        Self {
            buffer: buffer.into(),
            position: 0,
            line: 1,
        }
    }

    /// Returns the character under the cursor, or `None` past the end.
    #[inline]
    pub fn current_char(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Returns the character `offset` characters after the current one.
    pub fn peek_char(&self, offset: usize) -> Option<char> {
        self.remaining().chars().nth(offset)
    }

    /// Returns the character right after the current one.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.peek_char(1)
    }

    /// Advances past the current character, counting line breaks.
    ///
    /// Does nothing at the end of the buffer.
    #[inline]
    pub fn advance(&mut self) {
        if let Some(c) = self.current_char() {
            self.position += c.len_utf8();
            // The `\n` of a `\r\n` pair does the counting.
            if is_line_terminator(c) && !(c == '\r' && self.current_char() == Some('\n')) {
                self.line += 1;
            }
        }
    }

    /// Advances by `count` characters, stopping at the end of the buffer.
    ///
    /// # Example
    ///
    /// ```
    /// use tslex_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("a\nb\nc");
    /// cursor.advance_by(4);
    /// assert_eq!(cursor.current_char(), Some('c'));
    /// assert_eq!(cursor.line(), 3);
    /// ```
    pub fn advance_by(&mut self, count: usize) {
        for _ in 0..count {
            if self.is_at_end() {
                break;
            }
            self.advance();
        }
    }

    /// Advances while `predicate` holds for the current character.
    pub fn advance_while(&mut self, predicate: impl Fn(char) -> bool) {
        while self.current_char().is_some_and(&predicate) {
            self.advance();
        }
    }

    /// Consumes the current character if it equals `expected`.
    pub fn match_char(&mut self, expected: char) -> bool {
        if self.current_char() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Checks if the cursor has consumed the whole buffer.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.buffer.len()
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current byte position.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the text from byte `start` up to the cursor.
    pub fn slice_from(&self, start: usize) -> &str {
        &self.buffer[start..self.position]
    }

    /// Returns the text from the cursor to the end of the buffer.
    pub fn remaining(&self) -> &str {
        &self.buffer[self.position..]
    }

    /// Returns the whole buffer.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Moves back to the start of the buffer on line 1.
    pub fn reset(&mut self) {
        self.position = 0;
        self.line = 1;
    }

    /// Replaces the buffer and moves to its start.
    pub fn reset_with(&mut self, buffer: impl Into<String>) {
        self.buffer = buffer.into();
        self.reset();
    }
}
