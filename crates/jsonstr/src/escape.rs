//! Encoding text as JSON string literals.
//!
//! Three output strategies share one per-unit step, [`append_char`]:
//!
//! - [`append_string`] writes into any [`Sink`];
//! - [`emit_string`] hands each unit to a callback;
//! - [`escape_string`] and [`escape_string_unquoted`] build a fresh buffer,
//!   the latter borrowing the input when nothing needs escaping.
use alloc::{borrow::Cow, string::String, vec::Vec};

use crate::{
    classify::{BACKSLASH, EscapeAction, QUOTE, classify, needs_escape},
    digits::write_hex4,
    sink::{Emitter, Sink, infallible},
};

const LOWER_U: u16 = b'u' as u16;

/// Writes one code unit in escaped form.
///
/// # Errors
///
/// Propagates any error from `sink`.
#[inline]
pub fn append_char<S: Sink + ?Sized>(
    sink: &mut S,
    ch: u16,
    include_non_ascii: bool,
) -> Result<(), S::Error> {
    match classify(ch, include_non_ascii) {
        EscapeAction::PassThrough => sink.push_unit(ch),
        EscapeAction::Named(letter) => sink.push_units(&[BACKSLASH, letter]),
        EscapeAction::Hex => {
            sink.push_units(&[BACKSLASH, LOWER_U])?;
            write_hex4(sink, ch)
        }
    }
}

/// Writes `text` as a quoted JSON string literal.
///
/// # Errors
///
/// Propagates any error from `sink`; output written before the failure is
/// left in the sink.
pub fn append_string<S: Sink + ?Sized>(
    sink: &mut S,
    text: &[u16],
    include_non_ascii: bool,
) -> Result<(), S::Error> {
    sink.push_unit(QUOTE)?;
    append_units(sink, text, include_non_ascii)?;
    sink.push_unit(QUOTE)
}

/// Delivers the quoted JSON string literal for `text` one unit at a time.
///
/// # Errors
///
/// Stops at, and returns, the first error from `callback`.
pub fn emit_string<F, E>(text: &[u16], include_non_ascii: bool, callback: F) -> Result<(), E>
where
    F: FnMut(u16) -> Result<(), E>,
{
    append_string(&mut Emitter::new(callback), text, include_non_ascii)
}

/// Returns `text` as a new quoted JSON string literal.
#[must_use]
pub fn escape_string(text: &[u16], include_non_ascii: bool) -> Vec<u16> {
    let mut out = Vec::with_capacity(text.len() + 2);
    infallible(append_string(&mut out, text, include_non_ascii));
    out
}

/// Returns the body of the JSON string literal for `text`, without quotes.
///
/// When no unit of `text` needs escaping the input itself is returned as
/// [`Cow::Borrowed`] and nothing is allocated. Otherwise the unescaped prefix
/// is copied verbatim and only the rest is run through the classifier.
///
/// ```rust
/// use std::borrow::Cow;
/// use jsonstr::escape_string_unquoted;
///
/// let plain: Vec<u16> = "plain".encode_utf16().collect();
/// assert!(matches!(escape_string_unquoted(&plain, false), Cow::Borrowed(_)));
///
/// let quoted: Vec<u16> = "say \"hi\"".encode_utf16().collect();
/// let escaped = escape_string_unquoted(&quoted, false);
/// assert_eq!(String::from_utf16(&escaped).unwrap(), r#"say \"hi\""#);
/// ```
#[must_use]
pub fn escape_string_unquoted(text: &[u16], include_non_ascii: bool) -> Cow<'_, [u16]> {
    let Some(first) = text
        .iter()
        .position(|&ch| needs_escape(ch, include_non_ascii))
    else {
        return Cow::Borrowed(text);
    };
    let (clean, rest) = text.split_at(first);
    let mut out = Vec::with_capacity(text.len() + 8);
    out.extend_from_slice(clean);
    infallible(append_units(&mut out, rest, include_non_ascii));
    Cow::Owned(out)
}

/// Escapes a `str` into a quoted JSON string literal.
///
/// ```rust
/// assert_eq!(jsonstr::escape_str("mdash \u{2014} \r\n", false), r#""mdash \u2014 \r\n""#);
/// assert_eq!(jsonstr::escape_str("mdash \u{2014} \r\n", true), "\"mdash \u{2014} \\r\\n\"");
/// ```
#[must_use]
pub fn escape_str(text: &str, include_non_ascii: bool) -> String {
    let units: Vec<u16> = text.encode_utf16().collect();
    // Surrogate halves are either both escaped or both passed through, so
    // the output of a `str` is always well formed.
    String::from_utf16_lossy(&escape_string(&units, include_non_ascii))
}

pub(crate) fn append_units<S: Sink + ?Sized>(
    sink: &mut S,
    text: &[u16],
    include_non_ascii: bool,
) -> Result<(), S::Error> {
    for &ch in text {
        append_char(sink, ch, include_non_ascii)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use alloc::{string::String, vec::Vec};

    use super::*;

    fn units(s: &str) -> Vec<u16> {
        s.encode_utf16().collect()
    }

    fn text(units: &[u16]) -> String {
        String::from_utf16(units).unwrap()
    }

    #[test]
    fn formats_strings() {
        assert_eq!(text(&escape_string(&units("hello"), false)), r#""hello""#);
        assert_eq!(text(&escape_string(&units("hello\n"), false)), r#""hello\n""#);
        assert_eq!(text(&escape_string(&units(""), false)), r#""""#);
        assert_eq!(
            text(&escape_string(&units("mdash \u{2014} \r\n"), false)),
            r#""mdash \u2014 \r\n""#
        );
        assert_eq!(
            text(&escape_string(&units("mdash \u{2014} \r\n"), true)),
            "\"mdash \u{2014} \\r\\n\""
        );
    }

    #[test]
    fn formats_single_units() {
        let mut out = Vec::new();
        for (ch, include_non_ascii, expected) in [
            ('A', false, "A"),
            ('\t', false, r"\t"),
            ('\u{2014}', false, r"\u2014"),
            ('\u{2014}', true, "\u{2014}"),
            ('\u{1}', true, r"\u0001"),
            ('\u{7F}', true, r"\u007F"),
            ('"', false, r#"\""#),
            ('\\', false, r"\\"),
        ] {
            out.clear();
            let ch = u16::try_from(u32::from(ch)).unwrap();
            infallible(append_char(&mut out, ch, include_non_ascii));
            assert_eq!(text(&out), expected);
        }
    }

    #[test]
    fn strategies_agree() {
        let input = units("quote \" back \\ nul \0 del \u{7F} é \u{2028} 😀");
        for include_non_ascii in [false, true] {
            let built = escape_string(&input, include_non_ascii);

            let mut appended = Vec::new();
            infallible(append_string(&mut appended, &input, include_non_ascii));

            let mut emitted = Vec::new();
            emit_string(&input, include_non_ascii, |unit| {
                emitted.push(unit);
                Ok::<_, ()>(())
            })
            .unwrap();

            let unquoted = escape_string_unquoted(&input, include_non_ascii);
            assert_eq!(built, appended);
            assert_eq!(built, emitted);
            assert_eq!(&built[1..built.len() - 1], &*unquoted);
        }
    }

    #[test]
    fn unquoted_borrows_clean_input() {
        let input = units("nothing to see here / ok");
        let escaped = escape_string_unquoted(&input, false);
        assert!(matches!(escaped, Cow::Borrowed(b) if core::ptr::eq(b, input.as_slice())));

        let input = units("caf\u{e9}");
        assert!(matches!(escape_string_unquoted(&input, true), Cow::Borrowed(_)));
        assert!(matches!(escape_string_unquoted(&input, false), Cow::Owned(_)));

        let empty: [u16; 0] = [];
        assert!(matches!(escape_string_unquoted(&empty, false), Cow::Borrowed(_)));
    }

    #[test]
    fn unquoted_copies_prefix_and_patches_suffix() {
        let input = units("abc\tdef\u{1}");
        let escaped = escape_string_unquoted(&input, false);
        assert!(matches!(escaped, Cow::Owned(_)));
        assert_eq!(text(&escaped), r"abc\tdef\u0001");
    }

    #[test]
    fn lone_surrogates_are_escaped_individually() {
        let input = [0x41, 0xD800, 0x42];
        assert_eq!(text(&escape_string(&input, false)), r#""A\uD800B""#);
    }

    #[test]
    fn emit_stops_on_callback_error() {
        let input = units("abcdef");
        let mut seen = 0;
        let result = emit_string(&input, false, |_| {
            seen += 1;
            if seen == 3 { Err("stop") } else { Ok(()) }
        });
        assert_eq!(result, Err("stop"));
        assert_eq!(seen, 3);
    }
}
