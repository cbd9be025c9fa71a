//! Comment lexing.
//!
//! Comments are returned as tokens rather than skipped; the lexeme keeps
//! the delimiters.

use tslex_util::diagnostic::ErrorCode;

use crate::chars::is_line_terminator;
use crate::lexer::core::Scan;
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a comment, or a punctuator when `/` opens no comment.
    pub(crate) fn lex_comment(&mut self) -> Scan<Token> {
        match self.cursor.peek() {
            Some('/') => Ok(self.lex_line_comment()),
            Some('*') => self.lex_block_comment(),
            _ => self.lex_punctuator(),
        }
    }

    /// Lexes `//` up to, not including, the line terminator.
    fn lex_line_comment(&mut self) -> Token {
        let start = self.cursor.position();
        self.cursor.advance_by(2);
        self.cursor.advance_while(|c| !is_line_terminator(c));
        Token::new(TokenKind::SingleLineComment, self.cursor.slice_from(start))
    }

    /// Lexes `/*` through the first `*/`. Block comments do not nest.
    fn lex_block_comment(&mut self) -> Scan<Token> {
        let start = self.cursor.position();
        self.cursor.advance_by(2);

        loop {
            match self.cursor.current_char() {
                Some('*') if self.cursor.peek() == Some('/') => {
                    self.cursor.advance_by(2);
                    break;
                },
                Some(_) => self.cursor.advance(),
                None => return Err(self.fail(ErrorCode::UnterminatedComment)),
            }
        }

        Ok(Token::new(
            TokenKind::MultiLineComment,
            self.cursor.slice_from(start),
        ))
    }
}
