//! Bounded quoted rendering for diagnostics.
//!
//! The output is meant for error messages and logs. It is not guaranteed to
//! decode back to the original text.
use alloc::{string::String, vec::Vec};

use crate::{
    classify::QUOTE,
    escape::append_units,
    sink::{Sink, infallible},
};

const ELLIPSIS: &str = " ... ";

/// Renders `text` quoted, limited to roughly `max_chars` source units.
///
/// Non-ASCII is shown as is. When `max_chars` is greater than 7 and `text` is
/// longer, the first `(max_chars - 4) / 2` units and the last
/// `(max_chars - 5) / 2` units are kept around `" ... "`.
#[must_use]
pub fn display_string(text: &[u16], max_chars: usize) -> Vec<u16> {
    let mut out = Vec::with_capacity(text.len().min(max_chars) + 2);
    out.push(QUOTE);
    if max_chars > 7 && text.len() > max_chars {
        let head = (max_chars - 4) / 2;
        let tail = (max_chars - 5) / 2;
        infallible(append_units(&mut out, &text[..head], true));
        infallible(out.push_ascii(ELLIPSIS));
        infallible(append_units(&mut out, &text[text.len() - tail..], true));
    } else {
        infallible(append_units(&mut out, text, true));
    }
    out.push(QUOTE);
    out
}

/// [`display_string`] for a `str`.
///
/// A surrogate pair cut in half by the truncation shows up as U+FFFD.
///
/// ```rust
/// assert_eq!(
///     jsonstr::display_str("ABCDEFGHIJKLMNOPQRSTU", 20),
///     r#""ABCDEFGH ... OPQRSTU""#
/// );
/// ```
#[must_use]
pub fn display_str(text: &str, max_chars: usize) -> String {
    let units: Vec<u16> = text.encode_utf16().collect();
    String::from_utf16_lossy(&display_string(&units, max_chars))
}
