//! Identifier and keyword lexing.

use crate::chars::is_identifier_part;
use crate::tables::keyword_from_ident;
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an identifier or keyword.
    ///
    /// Reads the longest run of identifier characters, then resolves it
    /// against the reserved words and the contextual keywords, in that
    /// order. Anything else is an `Identifier` carrying its text.
    pub(crate) fn lex_word(&mut self) -> Token {
        let start = self.cursor.position();
        self.cursor.advance();
        self.cursor.advance_while(is_identifier_part);

        let word = self.cursor.slice_from(start);
        keyword_from_ident(word).unwrap_or_else(|| Token::new(TokenKind::Identifier, word))
    }
}
