//! String literal lexing.
//!
//! Escape sequences are validated but not decoded: the token's lexeme is
//! the literal's raw source text, quotes included.

use tslex_util::diagnostic::ErrorCode;

use crate::chars::{
    is_hex_digit, is_non_escape_character, is_non_formatting_escape,
    is_string_character, parse_unicode_escape_value, MAX_UNICODE_ESCAPE_VALUE,
};
use crate::lexer::core::Scan;
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a string literal opened by `quote`.
    ///
    /// The matching quote closes the literal. After a malformed escape the
    /// rest of the literal is skipped so its tail is not lexed as code.
    pub(crate) fn lex_string(&mut self, quote: char) -> Scan<Token> {
        let start = self.cursor.position();
        self.cursor.advance();

        loop {
            match self.cursor.current_char() {
                Some(c) if c == quote => {
                    self.cursor.advance();
                    break;
                },
                Some('\\') => {
                    if let Err(error) = self.lex_escape_sequence() {
                        self.skip_string_tail(quote);
                        return Err(error);
                    }
                },
                Some(c) if is_string_character(c) => self.cursor.advance(),
                _ => return Err(self.fail(ErrorCode::UnterminatedStringLiteral)),
            }
        }

        Ok(Token::new(
            TokenKind::StringLiteral,
            self.cursor.slice_from(start),
        ))
    }

    /// Lexes an escape sequence; the cursor is on the backslash.
    fn lex_escape_sequence(&mut self) -> Scan<()> {
        self.cursor.advance();
        match self.cursor.current_char() {
            Some('u') => self.lex_unicode_escape(),
            Some(c) if is_non_formatting_escape(c) || is_non_escape_character(c) => {
                self.cursor.advance();
                Ok(())
            },
            // Formatting characters and line terminators are left for the
            // body loop to accept or reject.
            _ => Ok(()),
        }
    }

    /// Lexes `\u{H+}`; the cursor is on the `u`.
    fn lex_unicode_escape(&mut self) -> Scan<()> {
        self.cursor.advance();
        if !self.cursor.match_char('{') {
            return Err(self.fail(ErrorCode::HexadecimalDigitExpected));
        }

        let digits_start = self.cursor.position();
        self.cursor.advance_while(is_hex_digit);
        let has_digits = self.cursor.position() > digits_start;
        let value = parse_unicode_escape_value(self.cursor.slice_from(digits_start));

        match self.cursor.current_char() {
            Some('}') => {},
            Some('{') => return Err(self.fail(ErrorCode::HexadecimalDigitExpected)),
            _ => return Err(self.fail(ErrorCode::UnterminatedUnicodeEscapeSequence)),
        }
        if !has_digits {
            return Err(self.fail(ErrorCode::HexadecimalDigitExpected));
        }
        if !value.is_some_and(|value| value <= MAX_UNICODE_ESCAPE_VALUE) {
            return Err(self.fail(ErrorCode::UnicodeValueOutOfRange));
        }

        self.cursor.advance();
        Ok(())
    }

    /// Skips to just past the closing `quote`, stopping early at a
    /// character that cannot appear in a string body.
    fn skip_string_tail(&mut self, quote: char) {
        while let Some(c) = self.cursor.current_char() {
            if c == quote {
                self.cursor.advance();
                return;
            }
            if !is_string_character(c) {
                return;
            }
            if c == '\\' {
                self.cursor.advance();
            }
            self.cursor.advance();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tslex_util::Handler;

    fn lex_str(source: &str) -> (Token, Vec<ErrorCode>) {
        let handler = Handler::new();
        let mut lexer = Lexer::new(source, &handler);
        let token = lexer.next_token();
        (token, handler.codes())
    }

    fn string(text: &str) -> Token {
        Token::new(TokenKind::StringLiteral, text)
    }

    #[test]
    fn test_simple_strings() {
        assert_eq!(lex_str(r#""hello""#), (string(r#""hello""#), vec![]));
        assert_eq!(lex_str("'hello'"), (string("'hello'"), vec![]));
        assert_eq!(lex_str("''").0, string("''"));
    }

    #[test]
    fn test_other_quote_inside() {
        assert_eq!(lex_str(r#""it's""#).0, string(r#""it's""#));
        assert_eq!(lex_str(r#"'say "hi"'"#).0, string(r#"'say "hi"'"#));
    }

    #[test]
    fn test_escaped_quote_does_not_close() {
        let source = r#""a \" b""#;
        assert_eq!(lex_str(source), (string(source), vec![]));
    }

    #[test]
    fn test_simple_escapes() {
        let source = r#"'\n \t \\ \' \q'"#;
        assert_eq!(lex_str(source), (string(source), vec![]));
    }

    #[test]
    fn test_formatting_characters_accepted() {
        let source = "\"tab\there\r\nnext\"";
        assert_eq!(lex_str(source), (string(source), vec![]));
    }

    #[test]
    fn test_unicode_escape() {
        let source = r#""String with a \u{0056}nicode character""#;
        assert_eq!(lex_str(source), (string(source), vec![]));
        assert!(lex_str(r#""\u{10FFFF}""#).1.is_empty());
    }

    #[test]
    fn test_unicode_out_of_range() {
        assert_eq!(
            lex_str(r#""\u{FFFFFF}""#),
            (Token::invalid(), vec![ErrorCode::UnicodeValueOutOfRange])
        );
        assert_eq!(
            lex_str(r#""\u{110000}""#).1,
            vec![ErrorCode::UnicodeValueOutOfRange]
        );
        assert_eq!(
            lex_str(r#""\u{1FFFFFFFF}""#).1,
            vec![ErrorCode::UnicodeValueOutOfRange]
        );
    }

    #[test]
    fn test_unicode_missing_brace() {
        assert_eq!(
            lex_str(r#""\unicode""#).1,
            vec![ErrorCode::HexadecimalDigitExpected]
        );
    }

    #[test]
    fn test_unicode_double_open_brace() {
        assert_eq!(
            lex_str(r#""\u{00{56}""#).1,
            vec![ErrorCode::HexadecimalDigitExpected]
        );
    }

    #[test]
    fn test_unicode_empty() {
        assert_eq!(
            lex_str(r#""\u{}""#).1,
            vec![ErrorCode::HexadecimalDigitExpected]
        );
    }

    #[test]
    fn test_unicode_unterminated() {
        assert_eq!(
            lex_str(r#""\u{0056 x""#).1,
            vec![ErrorCode::UnterminatedUnicodeEscapeSequence]
        );
        assert_eq!(
            lex_str(r#""\u{56"#).1,
            vec![ErrorCode::UnterminatedUnicodeEscapeSequence]
        );
    }

    #[test]
    fn test_lowercase_hex_rejected() {
        assert_eq!(
            lex_str(r#""\u{00ff}""#).1,
            vec![ErrorCode::UnterminatedUnicodeEscapeSequence]
        );
    }

    #[test]
    fn test_unterminated_at_end() {
        assert_eq!(
            lex_str("\"never closed"),
            (Token::invalid(), vec![ErrorCode::UnterminatedStringLiteral])
        );
        assert_eq!(
            lex_str("'ends in escape\\").1,
            vec![ErrorCode::UnterminatedStringLiteral]
        );
    }

    #[test]
    fn test_unterminated_at_line_separator() {
        assert_eq!(
            lex_str("'a\u{2028}b'").1,
            vec![ErrorCode::UnterminatedStringLiteral]
        );
    }

    #[test]
    fn test_tail_skipped_after_escape_error() {
        let handler = Handler::new();
        let mut lexer = Lexer::new(r#""\u{FFFFFF} \" + x" y"#, &handler);
        assert!(lexer.next_token().is_invalid());
        assert_eq!(lexer.next_token(), Token::new(TokenKind::Identifier, "y"));
        assert!(lexer.next_token().is_eof());
        assert_eq!(handler.error_count(), 1);
    }

    #[test]
    fn test_error_line_is_where_detected() {
        let handler = Handler::new();
        let mut lexer = Lexer::new("\"a\nb\\u{110000}\n\"", &handler);
        assert!(lexer.next_token().is_invalid());
        assert_eq!(handler.diagnostics()[0].line, 2);
        assert_eq!(lexer.line(), 3);
    }
}
