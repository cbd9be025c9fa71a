//! Error codes for lexical diagnostics.
//!
//! This module provides the [`ErrorCode`] type, a closed table of numeric
//! codes mapped to fixed English messages. The numbers follow the TypeScript
//! compiler's numbering so that diagnostics read as `TS1002` and so on.
//!
//! # Examples
//!
//! ```
//! use tslex_util::diagnostic::ErrorCode;
//!
//! let code = ErrorCode::UnterminatedStringLiteral;
//! assert_eq!(code.code(), 1002);
//! assert_eq!(code.as_str(), "TS1002");
//! assert_eq!(code.message(), "Unterminated string literal.");
//! ```

use thiserror::Error;

/// A lexical error code.
///
/// Every variant has a stable numeric value (its discriminant) and a fixed
/// message, available through [`ErrorCode::message`] or `Display`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[repr(u32)]
pub enum ErrorCode {
    /// A character that cannot start any token.
    #[error("Unexpected token")]
    UnexpectedToken = 1,

    /// An operator-start character with no matching punctuator.
    #[error("Unsupported punctuator")]
    UnsupportedPunctuator = 900,

    /// End of input or a line terminator before the closing quote.
    #[error("Unterminated string literal.")]
    UnterminatedStringLiteral = 1002,

    /// End of input before `*/`.
    #[error("'*/' expected.")]
    UnterminatedComment = 1010,

    /// A numeric literal with a leading zero, e.g. `0123`.
    #[error("Octal literals are not supported")]
    OctalLiteralsNotSupported = 1121,

    /// A malformed `\u{...}` opening or an empty digit list.
    #[error("Hexadecimal digit expected.")]
    HexadecimalDigitExpected = 1125,

    /// A `\u{...}` escape above `0x10FFFF`.
    #[error("An extended Unicode escape value must be between 0x0 and 0x10FFFF inclusive.")]
    UnicodeValueOutOfRange = 1198,

    /// A `\u{...}` escape without its closing brace.
    #[error("Unterminated Unicode escape sequence")]
    UnterminatedUnicodeEscapeSequence = 1199,

    /// A numeric separator at the end of a digit run or next to a `.`.
    #[error("Numeric separators are not allowed here.")]
    NumericSeparatorNotAllowed = 6188,

    /// Two numeric separators in a row.
    #[error("Multiple consecutive numeric separators are not permitted.")]
    MultipleNumericSeparatorsNotAllowed = 6189,
}

impl ErrorCode {
    /// Every error code, in ascending numeric order.
    pub const ALL: [ErrorCode; 10] = [
        ErrorCode::UnexpectedToken,
        ErrorCode::UnsupportedPunctuator,
        ErrorCode::UnterminatedStringLiteral,
        ErrorCode::UnterminatedComment,
        ErrorCode::OctalLiteralsNotSupported,
        ErrorCode::HexadecimalDigitExpected,
        ErrorCode::UnicodeValueOutOfRange,
        ErrorCode::UnterminatedUnicodeEscapeSequence,
        ErrorCode::NumericSeparatorNotAllowed,
        ErrorCode::MultipleNumericSeparatorsNotAllowed,
    ];

    /// Prefix used when rendering a code, e.g. `TS` in `TS1002`.
    pub const PREFIX: &'static str = "TS";

    /// Get the numeric identifier.
    ///
    /// # Examples
    ///
    /// ```
    /// use tslex_util::diagnostic::ErrorCode;
    ///
    /// assert_eq!(ErrorCode::UnexpectedToken.code(), 1);
    /// assert_eq!(ErrorCode::MultipleNumericSeparatorsNotAllowed.code(), 6189);
    /// ```
    #[inline]
    pub const fn code(self) -> u32 {
        self as u32
    }

    /// Look up an error code by its numeric identifier.
    ///
    /// # Examples
    ///
    /// ```
    /// use tslex_util::diagnostic::ErrorCode;
    ///
    /// assert_eq!(ErrorCode::from_code(1010), Some(ErrorCode::UnterminatedComment));
    /// assert_eq!(ErrorCode::from_code(42), None);
    /// ```
    pub fn from_code(code: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|candidate| candidate.code() == code)
    }

    /// Get the fixed English message for this code.
    pub fn message(self) -> String {
        self.to_string()
    }

    /// Get the full code string (e.g. "TS1002").
    pub fn as_str(self) -> String {
        format!("{}{}", Self::PREFIX, self.code())
    }
}
