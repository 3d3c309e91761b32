//! Decoding JSON string literals.
//!
//! [`parse_string`] starts in a scanning state that only advances the cursor.
//! If the closing quote is reached first the result borrows the input. The
//! first backslash copies the scanned prefix into a buffer and from then on
//! every decoded unit is pushed there.
use alloc::{borrow::Cow, vec::Vec};

use crate::{
    DecodeError,
    classify::{BACKSLASH, QUOTE, unescape_named},
    cursor::Cursor,
    log,
};

const LOWER_U: u16 = b'u' as u16;

/// Decodes one JSON string literal.
///
/// `cursor` must be positioned just after the opening quote. On success it is
/// left just past the closing quote. Escaped surrogates are decoded as
/// independent units and never combined.
///
/// # Errors
///
/// - [`DecodeError::UnterminatedString`] if input ends before the closing
///   quote;
/// - [`DecodeError::IllegalCharacter`] on a raw unit below U+0020;
/// - [`DecodeError::IllegalEscapeSequence`] on an unknown escape letter;
/// - [`DecodeError::IllegalUnicodeSequence`] if `\u` is not followed by four
///   hex digits.
///
/// ```rust
/// use jsonstr::{DecodeError, TextCursor, parse_string};
///
/// let text: Vec<u16> = r#"{"k":"aA"}"#.encode_utf16().collect();
/// let mut cursor = TextCursor::with_index(&text, 6);
/// assert_eq!(&*parse_string(&mut cursor).unwrap(), &[0x61, 0x41]);
///
/// let text: Vec<u16> = r#""ab\c""#.encode_utf16().collect();
/// let mut cursor = TextCursor::with_index(&text, 1);
/// assert_eq!(parse_string(&mut cursor), Err(DecodeError::IllegalEscapeSequence));
/// ```
pub fn parse_string<'a, C>(cursor: &mut C) -> Result<Cow<'a, [u16]>, DecodeError>
where
    C: Cursor<'a> + ?Sized,
{
    let result = scan(cursor);
    log::decoded(cursor.index(), &result);
    result
}

fn scan<'a, C>(cursor: &mut C) -> Result<Cow<'a, [u16]>, DecodeError>
where
    C: Cursor<'a> + ?Sized,
{
    let start = cursor.index();
    loop {
        let end = cursor.index();
        match cursor.next_unit() {
            None => return Err(DecodeError::UnterminatedString),
            Some(QUOTE) => return Ok(Cow::Borrowed(cursor.slice(start, end))),
            Some(BACKSLASH) => {
                let mut buf = cursor.slice(start, end).to_vec();
                buffer(cursor, &mut buf)?;
                return Ok(Cow::Owned(buf));
            }
            Some(ch) if ch < 0x20 => return Err(DecodeError::IllegalCharacter),
            Some(_) => {}
        }
    }
}

/// Continues after a backslash, accumulating into `buf` until the closing
/// quote has been consumed.
fn buffer<'a, C>(cursor: &mut C, buf: &mut Vec<u16>) -> Result<(), DecodeError>
where
    C: Cursor<'a> + ?Sized,
{
    loop {
        let letter = cursor.next_unit().ok_or(DecodeError::UnterminatedString)?;
        let decoded = if letter == LOWER_U {
            cursor
                .match_hex(4)
                .and_then(|value| u16::try_from(value).ok())
                .ok_or(DecodeError::IllegalUnicodeSequence)?
        } else {
            unescape_named(letter).ok_or(DecodeError::IllegalEscapeSequence)?
        };
        buf.push(decoded);

        loop {
            match cursor.next_unit() {
                None => return Err(DecodeError::UnterminatedString),
                Some(QUOTE) => return Ok(()),
                Some(BACKSLASH) => break,
                Some(ch) if ch < 0x20 => return Err(DecodeError::IllegalCharacter),
                Some(ch) => buf.push(ch),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::{string::String, vec::Vec};

    use super::*;
    use crate::TextCursor;

    fn units(s: &str) -> Vec<u16> {
        s.encode_utf16().collect()
    }

    #[test]
    fn borrows_when_unescaped() {
        let text = units(r#""simple" tail"#);
        let mut cursor = TextCursor::with_index(&text, 1);
        let decoded = parse_string(&mut cursor).unwrap();
        assert!(matches!(decoded, Cow::Borrowed(b) if core::ptr::eq(b, &text[1..7])));
        assert_eq!(cursor.index(), 8);
    }

    #[test]
    fn buffers_after_first_escape() {
        let text = units(r#""tab\tnewline\nquote\" ""#);
        let mut cursor = TextCursor::with_index(&text, 1);
        let decoded = parse_string(&mut cursor).unwrap();
        assert!(matches!(decoded, Cow::Owned(_)));
        assert_eq!(String::from_utf16(&decoded).unwrap(), "tab\tnewline\nquote\" ");
        assert!(cursor.is_at_end());
    }

    #[test]
    fn escaped_surrogates_stay_separate() {
        let text = units(r#""😀\uDE00""#);
        let mut cursor = TextCursor::with_index(&text, 1);
        let decoded = parse_string(&mut cursor).unwrap();
        assert_eq!(&*decoded, &[0xD83D, 0xDE00, 0xDE00]);
    }

    #[test]
    fn short_unicode_escape_at_end_of_input() {
        let text = units(r#""\u00"#);
        let mut cursor = TextCursor::with_index(&text, 1);
        assert_eq!(
            parse_string(&mut cursor),
            Err(DecodeError::IllegalUnicodeSequence)
        );
    }

    #[test]
    fn backslash_at_end_of_input_is_unterminated() {
        let text = units(r#""abc\"#);
        let mut cursor = TextCursor::with_index(&text, 1);
        assert_eq!(parse_string(&mut cursor), Err(DecodeError::UnterminatedString));
    }

    #[test]
    fn control_after_escape_is_illegal() {
        let text = units("\"a\\nb\u{1f}\"");
        let mut cursor = TextCursor::with_index(&text, 1);
        assert_eq!(parse_string(&mut cursor), Err(DecodeError::IllegalCharacter));
    }
}
