//! Conversion between native text and the JSON string literal grammar.
//!
//! All text is handled as UTF-16 code units (`u16`). Surrogate pairs are two
//! independent units everywhere in this crate: the escaper renders each half
//! on its own and the unescaper never combines `\uXXXX` pairs.
//!
//! The encode side writes into anything implementing [`Sink`]: a `Vec<u16>`,
//! a callback wrapped in an [`Emitter`], or a [`Utf16Writer`] over any
//! [`core::fmt::Write`]. The decode side reads from a [`Cursor`] positioned
//! just after an opening quote.
//!
//! ```rust
//! use jsonstr::{Cursor, TextCursor, escape_str, parse_string};
//!
//! assert_eq!(escape_str("tab\there", false), r#""tab\there""#);
//!
//! let text: Vec<u16> = r#""café""#.encode_utf16().collect();
//! let mut cursor = TextCursor::with_index(&text, 1);
//! let decoded = parse_string(&mut cursor).unwrap();
//! assert_eq!(String::from_utf16(&decoded).unwrap(), "café");
//! assert!(cursor.is_at_end());
//! ```
//!
//! Integers can be rendered straight into a sink without an intermediate
//! string:
//!
//! ```rust
//! let mut out = Vec::new();
//! jsonstr::digits::write_i64(&mut out, i64::MIN).unwrap();
//! assert_eq!(String::from_utf16(&out).unwrap(), "-9223372036854775808");
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod classify;
mod cursor;
pub mod digits;
mod display;
mod error;
mod escape;
mod log;
mod options;
mod sink;
mod unescape;

#[cfg(test)]
mod tests;

pub use classify::{EscapeAction, classify, is_space_character, needs_escape};
pub use cursor::{Cursor, TextCursor};
pub use display::{display_str, display_string};
pub use error::{DecodeError, SinkError};
pub use escape::{
    append_char, append_string, emit_string, escape_str, escape_string, escape_string_unquoted,
};
pub use options::EscapeOptions;
pub use sink::{Emitter, Sink, Utf16Writer};
pub use unescape::parse_string;
