use alloc::{borrow::Cow, vec::Vec};

use crate::{escape, sink::Sink};

/// Configuration for the escaping functions.
///
/// # Examples
///
/// ```rust
/// use jsonstr::EscapeOptions;
///
/// let text: Vec<u16> = "é".encode_utf16().collect();
/// assert_eq!(EscapeOptions::default().escape_string(&text).len(), 8);
/// assert_eq!(EscapeOptions::unicode().escape_string(&text).len(), 3);
/// ```
///
/// # Default
///
/// All options default to `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EscapeOptions {
    /// Whether code units from U+00A0 upwards are written unescaped.
    ///
    /// Controls, including the C1 block U+007F..=U+009F, are escaped
    /// regardless.
    ///
    /// # Default
    ///
    /// `false`
    pub include_non_ascii: bool,
}

impl EscapeOptions {
    /// Pure ASCII output: everything from U+007F up is `\u` escaped.
    #[must_use]
    pub const fn ascii() -> Self {
        Self {
            include_non_ascii: false,
        }
    }

    /// Non-ASCII characters are written as is.
    #[must_use]
    pub const fn unicode() -> Self {
        Self {
            include_non_ascii: true,
        }
    }

    /// See [`crate::append_string`].
    ///
    /// # Errors
    ///
    /// Propagates any error from `sink`.
    pub fn append_string<S: Sink + ?Sized>(self, sink: &mut S, text: &[u16]) -> Result<(), S::Error> {
        escape::append_string(sink, text, self.include_non_ascii)
    }

    /// See [`crate::escape_string`].
    #[must_use]
    pub fn escape_string(self, text: &[u16]) -> Vec<u16> {
        escape::escape_string(text, self.include_non_ascii)
    }

    /// See [`crate::escape_string_unquoted`].
    #[must_use]
    pub fn escape_string_unquoted<'a>(self, text: &'a [u16]) -> Cow<'a, [u16]> {
        escape::escape_string_unquoted(text, self.include_non_ascii)
    }
}
