//! Token definitions.
//!
//! A [`Token`] is an immutable pair of a [`TokenKind`] and an optional
//! lexeme. Literals, identifiers, punctuators and comments carry the exact
//! source text they were matched from; most keyword tokens carry nothing.

use std::fmt;

/// The closed set of token kinds produced by the lexer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TokenKind {
    // ===== Literals =====
    /// `42`, `1_000.5`, `-7`, `.25`
    NumericLiteral,
    /// `"text"` or `'text'`
    StringLiteral,
    /// `true` or `false`
    Boolean,
    /// `null`
    NullLiteral,
    /// `undefined`
    Undefined,
    /// Any word that is not a keyword
    Identifier,

    // ===== Operators =====
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Multiplication,
    /// `/`
    DivPunctuator,
    /// `++`
    Increment,
    /// `--`
    Decrement,
    /// `**`
    Exponentiation,
    /// `%`
    Modulo,
    /// `=`
    Assignment,
    /// `+=`, `-=`, `>>>=`, `??=` and the other compound assignments
    CompoundAssignment,
    /// `<`, `>`, `<=`, `>=`, `==`, `===`, `!=`, `!==`
    ComparisonOp,
    /// `.`
    Dot,
    /// `...`
    Spread,
    /// `>>`, `>>>`, `<<`, `&`, `|`, `^`
    BitwiseOp,
    /// `~`
    BitwiseNot,
    /// `?`
    QuestionMark,
    /// `??`
    NullCoalescing,
    /// `&&`, `||`
    LogicalOp,
    /// `!`
    Negation,
    /// `=>`
    Arrow,
    /// `?.`
    OptionalChaining,

    // ===== Structural punctuators =====
    /// `{`
    OpenCurlyBrace,
    /// `}`
    CloseCurlyBrace,
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
    /// `[`
    OpenBracket,
    /// `]`
    CloseBracket,
    /// `;`
    Semicolon,
    /// `:`
    Colon,
    /// `,`
    Comma,

    // ===== Reserved words =====
    /// `as`
    As,
    /// `await`
    Await,
    /// `break`
    Break,
    /// `case`
    Case,
    /// `catch`
    Catch,
    /// `class`
    Class,
    /// `const`
    Const,
    /// `continue`
    Continue,
    /// `default`
    Default,
    /// `delete`
    Delete,
    /// `do`
    Do,
    /// `else`
    Else,
    /// `enum`
    Enum,
    /// `export`
    Export,
    /// `extends`
    Extends,
    /// `finally`
    Finally,
    /// `for`
    For,
    /// `function`
    Function,
    /// `if`
    If,
    /// `implements`
    Implements,
    /// `import`
    Import,
    /// `in`
    In,
    /// `instanceof`
    Instanceof,
    /// `interface`
    Interface,
    /// `let`
    Let,
    /// `new`
    New,
    /// `package`
    Package,
    /// `private`
    Private,
    /// `protected`
    Protected,
    /// `public`
    Public,
    /// `return`
    Return,
    /// `static`
    Static,
    /// `super`
    Super,
    /// `switch`
    Switch,
    /// `this`
    This,
    /// `throw`
    Throw,
    /// `try`
    Try,
    /// `typeof`
    Typeof,
    /// `var`
    Var,
    /// `void`
    Void,
    /// `while`
    While,
    /// `yield`
    Yield,

    // ===== Contextual keywords =====
    /// `of`
    Of,
    /// `get`
    Get,
    /// `set`
    Set,
    /// `declare`
    Declare,
    /// `require`
    Require,
    /// `from`
    From,
    /// `constructor`
    Constructor,
    /// `module`
    Module,
    /// `type`
    Type,
    /// `any`
    Any,
    /// `string`
    StringType,
    /// `number`
    NumberType,
    /// `symbol`
    SymbolType,
    /// `object`
    ObjectType,
    /// `boolean`
    BooleanType,

    // ===== Comments =====
    /// `// ...`
    SingleLineComment,
    /// `/* ... */`
    MultiLineComment,

    // ===== Special =====
    /// End of input
    Eof,
    /// Marker returned in place of malformed input
    Invalid,
}

impl TokenKind {
    /// Returns true for the type-name contextual keywords and booleans,
    /// which keep their matched text as lexeme.
    pub fn carries_lexeme(self) -> bool {
        matches!(
            self,
            TokenKind::Boolean
                | TokenKind::Any
                | TokenKind::StringType
                | TokenKind::NumberType
                | TokenKind::SymbolType
                | TokenKind::ObjectType
                | TokenKind::BooleanType
        )
    }

    /// Returns true for comment kinds.
    pub fn is_comment(self) -> bool {
        matches!(self, TokenKind::SingleLineComment | TokenKind::MultiLineComment)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A lexical token.
///
/// Tokens are immutable once created. The end-of-input token is the
/// constant [`Token::EOF`]; exhaustion is detected by kind, not identity.
///
/// # Example
///
/// ```
/// use tslex_lex::token::{Token, TokenKind};
///
/// let token = Token::new(TokenKind::NumericLiteral, "42");
/// assert_eq!(token.kind(), TokenKind::NumericLiteral);
/// assert_eq!(token.lexeme(), Some("42"));
/// assert!(Token::EOF.is_eof());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Token {
    kind: TokenKind,
    lexeme: Option<String>,
}

/// Shared end-of-input token handed out by reference.
pub(crate) static EOF_TOKEN: Token = Token::EOF;

impl Token {
    /// The end-of-input sentinel.
    pub const EOF: Token = Token {
        kind: TokenKind::Eof,
        lexeme: None,
    };

    /// Creates a token carrying a lexeme.
    pub fn new(kind: TokenKind, lexeme: impl Into<String>) -> Self {
        Self {
            kind,
            lexeme: Some(lexeme.into()),
        }
    }

    /// Creates a token without a lexeme.
    pub const fn bare(kind: TokenKind) -> Self {
        Self { kind, lexeme: None }
    }

    /// Creates the marker returned for malformed input.
    pub const fn invalid() -> Self {
        Self::bare(TokenKind::Invalid)
    }

    /// The token kind.
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The matched text, if this kind carries one.
    pub fn lexeme(&self) -> Option<&str> {
        self.lexeme.as_deref()
    }

    /// Returns true for the end-of-input sentinel.
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    /// Returns true for the invalid-token marker.
    pub fn is_invalid(&self) -> bool {
        self.kind == TokenKind::Invalid
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.lexeme {
            Some(lexeme) => write!(f, "{} : {}", self.kind, lexeme),
            None => write!(f, "{}", self.kind),
        }
    }
}
