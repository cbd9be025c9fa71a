//! Static lookup tables for words and punctuators.
//!
//! Built once on first use and shared by every lexer instance.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;

use crate::token::{Token, TokenKind};

/// Length in characters of the longest punctuator (`>>>=`).
pub const MAX_PUNCTUATOR_LEN: usize = 4;

/// Words that are keywords in every position.
pub static RESERVED_WORDS: LazyLock<FxHashMap<&'static str, TokenKind>> = LazyLock::new(|| {
    [
        ("await", TokenKind::Await),
        ("break", TokenKind::Break),
        ("case", TokenKind::Case),
        ("catch", TokenKind::Catch),
        ("class", TokenKind::Class),
        ("const", TokenKind::Const),
        ("continue", TokenKind::Continue),
        ("default", TokenKind::Default),
        ("delete", TokenKind::Delete),
        ("do", TokenKind::Do),
        ("else", TokenKind::Else),
        ("enum", TokenKind::Enum),
        ("export", TokenKind::Export),
        ("extends", TokenKind::Extends),
        ("false", TokenKind::Boolean),
        ("finally", TokenKind::Finally),
        ("for", TokenKind::For),
        ("function", TokenKind::Function),
        ("if", TokenKind::If),
        ("implements", TokenKind::Implements),
        ("import", TokenKind::Import),
        ("in", TokenKind::In),
        ("instanceof", TokenKind::Instanceof),
        ("interface", TokenKind::Interface),
        ("let", TokenKind::Let),
        ("new", TokenKind::New),
        ("null", TokenKind::NullLiteral),
        ("package", TokenKind::Package),
        ("private", TokenKind::Private),
        ("protected", TokenKind::Protected),
        ("public", TokenKind::Public),
        ("return", TokenKind::Return),
        ("static", TokenKind::Static),
        ("super", TokenKind::Super),
        ("switch", TokenKind::Switch),
        ("this", TokenKind::This),
        ("throw", TokenKind::Throw),
        ("true", TokenKind::Boolean),
        ("try", TokenKind::Try),
        ("typeof", TokenKind::Typeof),
        ("undefined", TokenKind::Undefined),
        ("var", TokenKind::Var),
        ("void", TokenKind::Void),
        ("while", TokenKind::While),
        ("yield", TokenKind::Yield),
        ("as", TokenKind::As),
    ]
    .into_iter()
    .collect()
});

/// Words that are keywords only in some grammatical positions.
pub static CONTEXTUAL_KEYWORDS: LazyLock<FxHashMap<&'static str, TokenKind>> =
    LazyLock::new(|| {
        [
            ("of", TokenKind::Of),
            ("get", TokenKind::Get),
            ("set", TokenKind::Set),
            ("any", TokenKind::Any),
            ("declare", TokenKind::Declare),
            ("require", TokenKind::Require),
            ("string", TokenKind::StringType),
            ("number", TokenKind::NumberType),
            ("symbol", TokenKind::SymbolType),
            ("object", TokenKind::ObjectType),
            ("boolean", TokenKind::BooleanType),
            ("from", TokenKind::From),
            ("constructor", TokenKind::Constructor),
            ("module", TokenKind::Module),
            ("type", TokenKind::Type),
        ]
        .into_iter()
        .collect()
    });

/// Operator punctuators, keyed by their exact text.
///
/// Structural punctuators (`{ } ( ) [ ] ; : ,`) are single characters and
/// are resolved directly by the dispatcher.
pub static PUNCTUATORS: LazyLock<FxHashMap<&'static str, TokenKind>> = LazyLock::new(|| {
    use TokenKind::*;

    [
        ("+", Plus),
        ("-", Minus),
        ("*", Multiplication),
        ("/", DivPunctuator),
        ("++", Increment),
        ("--", Decrement),
        ("**", Exponentiation),
        ("%", Modulo),
        ("=", Assignment),
        ("+=", CompoundAssignment),
        ("-=", CompoundAssignment),
        ("*=", CompoundAssignment),
        ("/=", CompoundAssignment),
        ("%=", CompoundAssignment),
        ("<<=", CompoundAssignment),
        (">>=", CompoundAssignment),
        (">>>=", CompoundAssignment),
        ("**=", CompoundAssignment),
        ("&=", CompoundAssignment),
        ("|=", CompoundAssignment),
        ("^=", CompoundAssignment),
        ("&&=", CompoundAssignment),
        ("||=", CompoundAssignment),
        ("??=", CompoundAssignment),
        ("<", ComparisonOp),
        (">", ComparisonOp),
        ("<=", ComparisonOp),
        (">=", ComparisonOp),
        ("==", ComparisonOp),
        ("===", ComparisonOp),
        ("!=", ComparisonOp),
        ("!==", ComparisonOp),
        (".", Dot),
        ("...", Spread),
        (">>", BitwiseOp),
        (">>>", BitwiseOp),
        ("<<", BitwiseOp),
        ("&", BitwiseOp),
        ("|", BitwiseOp),
        ("^", BitwiseOp),
        ("~", BitwiseNot),
        ("?", QuestionMark),
        ("??", NullCoalescing),
        ("&&", LogicalOp),
        ("||", LogicalOp),
        ("!", Negation),
        ("=>", Arrow),
        ("?.", OptionalChaining),
    ]
    .into_iter()
    .collect()
});

/// Resolve a word against the reserved and contextual keyword tables.
///
/// Returns `None` when the word is a plain identifier.
pub fn keyword_from_ident(word: &str) -> Option<Token> {
    let kind = RESERVED_WORDS
        .get(word)
        .or_else(|| CONTEXTUAL_KEYWORDS.get(word))
        .copied()?;

    if kind.carries_lexeme() {
        Some(Token::new(kind, word))
    } else {
        Some(Token::bare(kind))
    }
}

/// Resolve the exact text of an operator punctuator.
pub fn punctuator_kind(text: &str) -> Option<TokenKind> {
    PUNCTUATORS.get(text).copied()
}

/// Resolve a single-character structural punctuator.
pub fn structural_kind(c: char) -> Option<TokenKind> {
    let kind = match c {
        '{' => TokenKind::OpenCurlyBrace,
        '}' => TokenKind::CloseCurlyBrace,
        '(' => TokenKind::OpenParen,
        ')' => TokenKind::CloseParen,
        '[' => TokenKind::OpenBracket,
        ']' => TokenKind::CloseBracket,
        ';' => TokenKind::Semicolon,
        ':' => TokenKind::Colon,
        ',' => TokenKind::Comma,
        _ => return None,
    };
    Some(kind)
}
