//! Character classes used by the scanners.
//!
//! Every predicate is a pure `fn(char) -> bool` so it can be passed straight
//! to [`Cursor::advance_while`](crate::cursor::Cursor::advance_while).

/// Largest value accepted in a `\u{...}` escape.
pub const MAX_UNICODE_ESCAPE_VALUE: u32 = 0x10_FFFF;

/// Checks if a character is skipped between tokens.
///
/// Covers Unicode whitespace, which includes the line terminators, plus the
/// byte order mark U+FEFF.
///
/// # Example
///
/// ```
/// use tslex_lex::chars::is_whitespace;
///
/// assert!(is_whitespace(' '));
/// assert!(is_whitespace('\n'));
/// assert!(is_whitespace('\u{FEFF}'));
/// assert!(!is_whitespace('a'));
/// ```
pub fn is_whitespace(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

/// Checks if a character ends a line.
pub fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Checks if a character can start a punctuator.
pub fn is_operator_start(c: char) -> bool {
    matches!(
        c,
        '/' | '+' | '*' | '%' | '=' | '!' | '?' | '&' | '|' | '~' | '>' | '<' | '.' | '^' | '-'
    )
}

/// Checks if a character can start a comment.
pub fn is_comment_start(c: char) -> bool {
    c == '/'
}

/// Checks if a character is a numeric sign.
pub fn is_sign(c: char) -> bool {
    c == '+' || c == '-'
}

/// Checks if a character is an ASCII decimal digit.
pub fn is_decimal_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Checks if a character is the numeric separator `_`.
pub fn is_numeric_separator(c: char) -> bool {
    c == '_'
}

/// Checks if a character belongs to a digit run.
pub fn is_digit_or_separator(c: char) -> bool {
    is_decimal_digit(c) || is_numeric_separator(c)
}

/// Checks if a character is part of the run skipped after a numeric error.
pub fn is_numeric_run(c: char) -> bool {
    is_digit_or_separator(c) || c == '.'
}

/// Checks if a character opens a string literal.
pub fn is_quote(c: char) -> bool {
    c == '"' || c == '\''
}

/// Checks if a character is a formatting control accepted inside strings.
///
/// These are backspace, tab, vertical tab, form feed, carriage return and
/// line feed.
pub fn is_formatting_escape(c: char) -> bool {
    matches!(c, '\u{8}' | '\t' | '\u{B}' | '\u{C}' | '\r' | '\n')
}

/// Checks if a character is escaped as itself: a quote or backslash.
pub fn is_non_formatting_escape(c: char) -> bool {
    matches!(c, '\'' | '"' | '\\')
}

/// Checks if a character has no special meaning after a backslash.
pub fn is_non_escape_character(c: char) -> bool {
    !(is_non_formatting_escape(c) || is_formatting_escape(c) || is_line_terminator(c) || c == 'u')
}

/// Checks if a character may appear in a string body.
///
/// # Example
///
/// ```
/// use tslex_lex::chars::is_string_character;
///
/// assert!(is_string_character('a'));
/// assert!(is_string_character('\n'));
/// assert!(is_string_character('\t'));
/// assert!(!is_string_character('\u{2028}'));
/// ```
pub fn is_string_character(c: char) -> bool {
    is_formatting_escape(c) || !is_line_terminator(c)
}

/// Checks if a character is an uppercase hexadecimal digit.
///
/// Lowercase `a-f` are not accepted in Unicode escapes.
pub fn is_hex_digit(c: char) -> bool {
    matches!(c, '0'..='9' | 'A'..='F')
}

/// Checks if a character can start an identifier.
///
/// # Example
///
/// ```
/// use tslex_lex::chars::is_identifier_start;
///
/// assert!(is_identifier_start('a'));
/// assert!(is_identifier_start('$'));
/// assert!(is_identifier_start('_'));
/// assert!(!is_identifier_start('1'));
/// assert!(!is_identifier_start('α'));
/// ```
pub fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '$' || c == '_'
}

/// Checks if a character can continue an identifier.
pub fn is_identifier_part(c: char) -> bool {
    is_identifier_start(c) || c.is_ascii_digit()
}

/// Parses the digits of a `\u{...}` escape.
///
/// Returns `None` for an empty or non-hex string, and for values that do
/// not fit in 32 bits.
///
/// # Example
///
/// ```
/// use tslex_lex::chars::parse_unicode_escape_value;
///
/// assert_eq!(parse_unicode_escape_value("56"), Some(0x56));
/// assert_eq!(parse_unicode_escape_value("10FFFF"), Some(0x10FFFF));
/// assert_eq!(parse_unicode_escape_value("100000000"), None);
/// assert_eq!(parse_unicode_escape_value(""), None);
/// ```
pub fn parse_unicode_escape_value(hex: &str) -> Option<u32> {
    if hex.is_empty() {
        return None;
    }
    hex.chars().try_fold(0u32, |value, c| {
        let digit = c.to_digit(16).filter(|_| is_hex_digit(c))?;
        value.checked_mul(16)?.checked_add(digit)
    })
}
