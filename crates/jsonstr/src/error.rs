use thiserror::Error;

/// Failure while decoding a JSON string literal.
///
/// Every variant carries a fixed message; the position of the failure is
/// whatever the [`Cursor`](crate::Cursor) reports afterwards.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DecodeError {
    /// End of input was reached before the closing quote.
    #[error("Unterminated JSON string")]
    UnterminatedString,
    /// A raw control character (below U+0020) appeared outside an escape.
    #[error("Illegal character in JSON string")]
    IllegalCharacter,
    /// A backslash was followed by a character outside the escape set.
    #[error("Illegal escape sequence in JSON string")]
    IllegalEscapeSequence,
    /// `\u` was not followed by four hexadecimal digits.
    #[error("Illegal Unicode sequence in JSON string")]
    IllegalUnicodeSequence,
}

/// Failure reported by a [`Utf16Writer`](crate::Utf16Writer).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SinkError {
    /// The underlying writer failed.
    #[error("formatter error")]
    Fmt(#[from] core::fmt::Error),
    /// A surrogate code unit had no partner to form a character with.
    #[error("unpaired surrogate \\u{0:04X}")]
    UnpairedSurrogate(u16),
}
