//! Operator punctuator lexing.
//!
//! Punctuators are matched longest-first against the punctuator table, so
//! `>>>=` wins over `>>>`, `>>` and `>`.

use tslex_util::diagnostic::ErrorCode;

use crate::chars::{is_decimal_digit, is_sign};
use crate::lexer::core::Scan;
use crate::tables::{punctuator_kind, MAX_PUNCTUATOR_LEN};
use crate::token::Token;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a punctuator, or a numeric literal when a sign or `.` is
    /// immediately followed by a digit.
    ///
    /// Unknown operator text consumes one character and fails with
    /// `UnsupportedPunctuator`.
    pub(crate) fn lex_punctuator(&mut self) -> Scan<Token> {
        let starts_number = self
            .cursor
            .current_char()
            .is_some_and(|c| is_sign(c) || c == '.')
            && self.cursor.peek().is_some_and(is_decimal_digit);
        if starts_number {
            return self.lex_numeric_literal();
        }

        let remaining = self.cursor.remaining();
        let mut ends = [0usize; MAX_PUNCTUATOR_LEN];
        let mut available = 0;
        for (end, (offset, c)) in ends.iter_mut().zip(remaining.char_indices()) {
            *end = offset + c.len_utf8();
            available += 1;
        }

        for len in (1..=available).rev() {
            let candidate = &remaining[..ends[len - 1]];
            if let Some(kind) = punctuator_kind(candidate) {
                let token = Token::new(kind, candidate);
                self.cursor.advance_by(len);
                return Ok(token);
            }
        }

        let error = self.fail(ErrorCode::UnsupportedPunctuator);
        self.cursor.advance();
        Err(error)
    }
}
