//! Character classes of the JSON string grammar.
//!
//! [`classify`] is the single decision point for the encoders: every entry
//! point (buffer, callback, string builder, display) routes each code unit
//! through it.

pub(crate) const QUOTE: u16 = b'"' as u16;
pub(crate) const BACKSLASH: u16 = b'\\' as u16;

/// What the encoder does with one code unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EscapeAction {
    /// Emit the unit unmodified.
    PassThrough,
    /// Emit a backslash followed by this unit (`"`, `\`, `b`, `f`, `n`, `r`
    /// or `t`).
    Named(u16),
    /// Emit `\u` followed by four uppercase hex digits.
    Hex,
}

/// Classifies `ch` for output inside a JSON string literal.
///
/// Controls below U+0020 and the C1 block U+007F..=U+009F are always
/// escaped. Code units from U+00A0 upwards pass through only when
/// `include_non_ascii` is set.
///
/// ```rust
/// use jsonstr::{EscapeAction, classify};
///
/// assert_eq!(classify(u16::from(b'\n'), false), EscapeAction::Named(u16::from(b'n')));
/// assert_eq!(classify(0x7F, true), EscapeAction::Hex);
/// assert_eq!(classify(0x2014, true), EscapeAction::PassThrough);
/// assert_eq!(classify(0x2014, false), EscapeAction::Hex);
/// ```
#[must_use]
pub const fn classify(ch: u16, include_non_ascii: bool) -> EscapeAction {
    if let Some(letter) = named_escape(ch) {
        return EscapeAction::Named(letter);
    }
    match ch {
        0x00..=0x1F | 0x7F..=0x9F => EscapeAction::Hex,
        0xA0.. if !include_non_ascii => EscapeAction::Hex,
        _ => EscapeAction::PassThrough,
    }
}

/// Returns `true` unless `ch` passes through the encoder unmodified.
#[inline]
#[must_use]
pub const fn needs_escape(ch: u16, include_non_ascii: bool) -> bool {
    !matches!(classify(ch, include_non_ascii), EscapeAction::PassThrough)
}

/// Returns `true` for the four whitespace characters JSON allows between
/// tokens: space, tab, line feed and carriage return.
#[inline]
#[must_use]
pub const fn is_space_character(ch: u16) -> bool {
    matches!(ch, 0x20 | 0x09 | 0x0A | 0x0D)
}

/// Encode side of the escape table: the letter written after the backslash.
const fn named_escape(ch: u16) -> Option<u16> {
    let letter = match ch {
        0x22 => b'"',
        0x5C => b'\\',
        0x08 => b'b',
        0x0C => b'f',
        0x0A => b'n',
        0x0D => b'r',
        0x09 => b't',
        _ => return None,
    };
    Some(letter as u16)
}

/// Decode side of the escape table. Also accepts the escaped solidus.
pub(crate) fn unescape_named(letter: u16) -> Option<u16> {
    let Ok(byte) = u8::try_from(letter) else {
        return None;
    };
    let ch = match byte {
        b'"' => 0x22,
        b'\\' => 0x5C,
        b'/' => 0x2F,
        b'b' => 0x08,
        b'f' => 0x0C,
        b'n' => 0x0A,
        b'r' => 0x0D,
        b't' => 0x09,
        _ => return None,
    };
    Some(ch)
}
