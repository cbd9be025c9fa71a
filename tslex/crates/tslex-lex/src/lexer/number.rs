//! Numeric literal lexing.
//!
//! Decimal integers and fractions with `_` separators, optionally signed.
//! The lexeme is the exact source text, sign included.

use tslex_util::diagnostic::ErrorCode;

use crate::chars::{
    is_decimal_digit, is_digit_or_separator, is_numeric_run, is_numeric_separator, is_sign,
};
use crate::lexer::core::Scan;
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a numeric literal.
    ///
    /// Starts at a digit, at a sign followed by a digit, or at a `.`
    /// followed by a digit.
    ///
    /// # Number Formats
    ///
    /// - Integer: `0`, `42`, `1_000_000`
    /// - Fraction: `3.14`, `.5`, `7.`
    /// - Signed: `-19_345`, `+0.5`
    ///
    /// On malformed input the rest of the `[0-9_.]` run is skipped so the
    /// next token starts after the literal.
    pub(crate) fn lex_numeric_literal(&mut self) -> Scan<Token> {
        let start = self.cursor.position();
        if self.cursor.current_char().is_some_and(is_sign) {
            self.cursor.advance();
        }

        match self.lex_numeric_body() {
            Ok(()) => Ok(Token::new(
                TokenKind::NumericLiteral,
                self.cursor.slice_from(start),
            )),
            Err(error) => {
                self.cursor.advance_while(is_numeric_run);
                Err(error)
            },
        }
    }

    fn lex_numeric_body(&mut self) -> Scan<()> {
        if self.cursor.match_char('.') {
            return self.lex_fraction();
        }

        self.lex_integer_part()?;
        if self.cursor.match_char('.') {
            self.lex_fraction()?;
        }
        Ok(())
    }

    /// Lexes the integer part; the cursor is on its first digit.
    fn lex_integer_part(&mut self) -> Scan<()> {
        if self.cursor.match_char('0') {
            return match self.cursor.current_char() {
                Some(c) if is_digit_or_separator(c) => {
                    Err(self.fail(ErrorCode::OctalLiteralsNotSupported))
                },
                _ => Ok(()),
            };
        }
        self.lex_digits()
    }

    /// Lexes the digits after a decimal point, which may be absent.
    fn lex_fraction(&mut self) -> Scan<()> {
        match self.cursor.current_char() {
            Some(c) if is_numeric_separator(c) => {
                Err(self.fail(ErrorCode::NumericSeparatorNotAllowed))
            },
            Some(c) if is_decimal_digit(c) => self.lex_digits(),
            _ => Ok(()),
        }
    }

    /// Lexes a run of digits and separators starting at a digit.
    ///
    /// A separator must sit between two digits.
    fn lex_digits(&mut self) -> Scan<()> {
        let mut previous = None;
        while let Some(c) = self.cursor.current_char().filter(|&c| is_digit_or_separator(c)) {
            if is_numeric_separator(c) && previous.is_some_and(is_numeric_separator) {
                return Err(self.fail(ErrorCode::MultipleNumericSeparatorsNotAllowed));
            }
            previous = Some(c);
            self.cursor.advance();
        }

        if previous.is_some_and(is_numeric_separator) {
            return Err(self.fail(ErrorCode::NumericSeparatorNotAllowed));
        }
        Ok(())
    }
}
