//! Edge case tests for tslex-lex

#[cfg(test)]
mod tests {
    use crate::{Lexer, Token, TokenKind};
    use tslex_util::{ErrorCode, Handler};

    fn lex_all(source: &str) -> Vec<Token> {
        let handler = Handler::new();
        let mut lexer = Lexer::new(source, &handler);
        let mut tokens = Vec::new();
        loop {
            let token = lexer.next_token();
            if token.is_eof() {
                break;
            }
            tokens.push(token);
        }
        tokens
    }

    fn lex_codes(source: &str) -> Vec<ErrorCode> {
        let handler = Handler::new();
        let mut lexer = Lexer::new(source, &handler);
        lexer.tokenize();
        handler.codes()
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        assert!(lex_all("").is_empty());
    }

    #[test]
    fn test_edge_eof_is_sticky() {
        let handler = Handler::new();
        let mut lexer = Lexer::new("x", &handler);
        lexer.next_token();
        for _ in 0..5 {
            assert_eq!(lexer.next_token(), Token::EOF);
        }
    }

    #[test]
    fn test_edge_byte_order_mark() {
        let t = lex_all("\u{FEFF}let");
        assert_eq!(t, vec![Token::bare(TokenKind::Let)]);
    }

    #[test]
    fn test_edge_unicode_whitespace() {
        let t = lex_all("a\u{00A0}b\u{2003}c");
        assert_eq!(t.len(), 3);
    }

    #[test]
    fn test_edge_crlf_line_count() {
        let handler = Handler::new();
        let mut lexer = Lexer::new("a\r\nb\r\n#", &handler);
        lexer.tokenize();
        assert_eq!(handler.diagnostics()[0].line, 3);
    }

    #[test]
    fn test_edge_lone_cr_and_separators_count_lines() {
        let handler = Handler::new();
        let mut lexer = Lexer::new("a\rb\u{2028}c\u{2029}#", &handler);
        lexer.tokenize();
        assert_eq!(handler.diagnostics()[0].line, 4);
    }

    #[test]
    fn test_edge_newline_in_string_counts() {
        let handler = Handler::new();
        let mut lexer = Lexer::new("'a\nb' #", &handler);
        let tokens = lexer.tokenize();
        assert_eq!(tokens[0].lexeme(), Some("'a\nb'"));
        assert_eq!(handler.diagnostics()[0].line, 2);
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let t = lex_all(&format!("let {} = 1;", name));
        assert!(t.contains(&Token::new(TokenKind::Identifier, name.as_str())));
    }

    #[test]
    fn test_edge_empty_strings() {
        assert_eq!(lex_all(r#""" ''"#).len(), 2);
    }

    #[test]
    fn test_edge_signed_literal_after_identifier() {
        assert_eq!(
            lex_all("x-1"),
            vec![
                Token::new(TokenKind::Identifier, "x"),
                Token::new(TokenKind::NumericLiteral, "-1"),
            ]
        );
        assert_eq!(
            lex_all("x - 1")[1],
            Token::new(TokenKind::Minus, "-")
        );
    }

    #[test]
    fn test_edge_zero_forms() {
        assert_eq!(lex_all("0")[0].lexeme(), Some("0"));
        assert_eq!(lex_all("0.")[0].lexeme(), Some("0."));
        assert_eq!(lex_all("0.0")[0].lexeme(), Some("0.0"));
        assert_eq!(lex_codes("00"), vec![ErrorCode::OctalLiteralsNotSupported]);
    }

    #[test]
    fn test_edge_comment_at_eof() {
        assert_eq!(
            lex_all("x // tail"),
            vec![
                Token::new(TokenKind::Identifier, "x"),
                Token::new(TokenKind::SingleLineComment, "// tail"),
            ]
        );
    }

    #[test]
    fn test_edge_block_comment_star_run() {
        assert_eq!(
            lex_all("/***/"),
            vec![Token::new(TokenKind::MultiLineComment, "/***/")]
        );
    }

    #[test]
    fn test_edge_unexpected_characters_progress() {
        let t = lex_all("@#`\\");
        assert_eq!(t.len(), 4);
        assert!(t.iter().all(Token::is_invalid));
    }

    #[test]
    fn test_edge_non_ascii_letter() {
        assert_eq!(lex_codes("é"), vec![ErrorCode::UnexpectedToken]);
    }

    #[test]
    fn test_edge_recovery_continues() {
        let kinds: Vec<_> = lex_all("let a = 1__2; let b = 3;")
            .iter()
            .map(Token::kind)
            .collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Let,
                TokenKind::Identifier,
                TokenKind::Assignment,
                TokenKind::Invalid,
                TokenKind::Semicolon,
                TokenKind::Let,
                TokenKind::Identifier,
                TokenKind::Assignment,
                TokenKind::NumericLiteral,
                TokenKind::Semicolon,
            ]
        );
    }

    #[test]
    fn test_edge_every_error_code_reachable() {
        let cases = [
            ("#", ErrorCode::UnexpectedToken),
            ("'x", ErrorCode::UnterminatedStringLiteral),
            ("/*", ErrorCode::UnterminatedComment),
            ("01", ErrorCode::OctalLiteralsNotSupported),
            (r#""\u{}""#, ErrorCode::HexadecimalDigitExpected),
            (r#""\u{110000}""#, ErrorCode::UnicodeValueOutOfRange),
            (r#""\u{1""#, ErrorCode::UnterminatedUnicodeEscapeSequence),
            ("1_", ErrorCode::NumericSeparatorNotAllowed),
            ("1__1", ErrorCode::MultipleNumericSeparatorsNotAllowed),
        ];
        for (source, code) in cases {
            assert_eq!(lex_codes(source), vec![code], "{source:?}");
        }
    }

    // ==================== PROPERTY TESTS ====================

    #[test]
    fn test_property_integers_are_single_literals() {
        use proptest::prelude::*;

        proptest!(|(input in "0|[1-9][0-9]{0,18}")| {
            let tokens = lex_all(&input);
            prop_assert_eq!(tokens, vec![Token::new(TokenKind::NumericLiteral, input.as_str())]);
        });
    }

    #[test]
    fn test_property_leading_zero_is_octal() {
        use proptest::prelude::*;

        proptest!(|(input in "0[0-9][0-9]{0,8}")| {
            prop_assert_eq!(lex_codes(&input), vec![ErrorCode::OctalLiteralsNotSupported]);
            prop_assert_eq!(lex_all(&input), vec![Token::invalid()]);
        });
    }

    #[test]
    fn test_property_doubled_separator() {
        use proptest::prelude::*;

        proptest!(|(head in "[1-9][0-9]{0,4}", tail in "[0-9]{1,4}")| {
            let bad = format!("{head}__{tail}");
            prop_assert_eq!(
                lex_codes(&bad),
                vec![ErrorCode::MultipleNumericSeparatorsNotAllowed]
            );
            let good = format!("{head}_{tail}");
            prop_assert!(lex_codes(&good).is_empty());
        });
    }

    #[test]
    fn test_property_misplaced_separator() {
        use proptest::prelude::*;

        proptest!(|(head in "[1-9][0-9]{0,4}", frac in "[0-9]{1,4}")| {
            prop_assert_eq!(
                lex_codes(&format!("{head}_")),
                vec![ErrorCode::NumericSeparatorNotAllowed]
            );
            prop_assert_eq!(
                lex_codes(&format!("{head}_.{frac}")),
                vec![ErrorCode::NumericSeparatorNotAllowed]
            );
            let plain = format!("{head}.{frac}");
            prop_assert!(lex_codes(&plain).is_empty());
        });
    }

    #[test]
    fn test_property_plain_strings() {
        use proptest::prelude::*;

        proptest!(|(body in "[^\"'\\\\\r\n\u{2028}\u{2029}]{0,60}", double in any::<bool>())| {
            let quote = if double { '"' } else { '\'' };
            let source = format!("{quote}{body}{quote}");
            let tokens = lex_all(&source);
            prop_assert_eq!(tokens.len(), 1);
            let lexeme = tokens[0].lexeme().unwrap_or_default();
            prop_assert!(lexeme.starts_with(quote) && lexeme.ends_with(quote));
            prop_assert_eq!(lexeme, source.as_str());
        });
    }

    #[test]
    fn test_property_unicode_escape_in_range() {
        use proptest::prelude::*;

        proptest!(|(value in 0u32..=0x10_FFFF, zeros in 0usize..6)| {
            let source = format!("\"\\u{{{}{:X}}}\"", "0".repeat(zeros), value);
            prop_assert!(lex_codes(&source).is_empty());
        });
    }

    #[test]
    fn test_property_unicode_escape_out_of_range() {
        use proptest::prelude::*;

        proptest!(|(value in 0x11_0000u64..=0xFFFF_FFFF_FFFF, zeros in 0usize..6)| {
            let source = format!("\"\\u{{{}{:X}}}\"", "0".repeat(zeros), value);
            prop_assert_eq!(lex_codes(&source), vec![ErrorCode::UnicodeValueOutOfRange]);
        });
    }

    #[test]
    fn test_property_draining_terminates() {
        use proptest::prelude::*;

        proptest!(|(input in any::<String>())| {
            let handler = Handler::new();
            let mut lexer = Lexer::new(input.as_str(), &handler);
            let mut calls = 0;
            let mut last_position = 0;
            loop {
                let token = lexer.next_token();
                if token.is_eof() {
                    break;
                }
                prop_assert!(lexer.position() > last_position);
                last_position = lexer.position();
                calls += 1;
                prop_assert!(calls <= input.chars().count());
            }
            prop_assert!(lexer.next_token().is_eof());
            prop_assert_eq!(lexer.position(), input.len());
        });
    }
}
