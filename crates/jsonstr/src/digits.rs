//! Decimal and hexadecimal rendering straight into a [`Sink`].
//!
//! Numbers are written most significant digit first without building an
//! intermediate string. Values of 100 or more are split with `/ 100` and
//! `% 100` and each two-digit remainder is looked up in [`TENS_DIGITS`] and
//! [`UNITS_DIGITS`], so only one division is needed per pair of digits.
//!
//! ```rust
//! use jsonstr::digits::{FixedWidth, write_fixed_width, write_i32};
//!
//! let mut out = Vec::new();
//! write_i32(&mut out, -42).unwrap();
//! out.push(u16::from(b' '));
//! write_fixed_width(&mut out, 7, FixedWidth::Three).unwrap();
//! assert_eq!(String::from_utf16(&out).unwrap(), "-42 007");
//! ```
use crate::sink::Sink;

/// `i32::MIN` cannot be negated, so it is written from this literal.
const I32_MIN_TEXT: &str = "-2147483648";
/// `i64::MIN` cannot be negated, so it is written from this literal.
const I64_MIN_TEXT: &str = "-9223372036854775808";

const MINUS: u16 = b'-' as u16;

const fn digit_table(tens: bool) -> [u16; 100] {
    let mut table = [0; 100];
    let mut i = 0;
    while i < 100 {
        let digit = if tens { i / 10 } else { i % 10 };
        table[i] = b'0' as u16 + digit as u16;
        i += 1;
    }
    table
}

/// Tens digit of every value `0..100`.
pub const TENS_DIGITS: [u16; 100] = digit_table(true);
/// Units digit of every value `0..100`.
pub const UNITS_DIGITS: [u16; 100] = digit_table(false);
/// Alphabet for `\u` escapes, uppercase.
pub const HEX_DIGITS: [u16; 16] = {
    let ascii = *b"0123456789ABCDEF";
    let mut table = [0; 16];
    let mut i = 0;
    while i < 16 {
        table[i] = ascii[i] as u16;
        i += 1;
    }
    table
};

/// Zero-padded widths accepted by [`write_fixed_width`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixedWidth {
    /// `00` to `99`.
    Two,
    /// `000` to `999`.
    Three,
}

/// Writes a signed 32-bit integer.
///
/// # Errors
///
/// Propagates any error from `sink`.
pub fn write_i32<S: Sink + ?Sized>(sink: &mut S, n: i32) -> Result<(), S::Error> {
    if n >= 0 {
        return write_u32(sink, n.unsigned_abs());
    }
    if n == i32::MIN {
        return sink.push_ascii(I32_MIN_TEXT);
    }
    sink.push_unit(MINUS)?;
    write_u32(sink, (-n).unsigned_abs())
}

/// Writes a signed 64-bit integer.
///
/// # Errors
///
/// Propagates any error from `sink`.
pub fn write_i64<S: Sink + ?Sized>(sink: &mut S, n: i64) -> Result<(), S::Error> {
    if n >= 0 {
        return write_u64(sink, n.unsigned_abs());
    }
    if n == i64::MIN {
        return sink.push_ascii(I64_MIN_TEXT);
    }
    sink.push_unit(MINUS)?;
    write_u64(sink, (-n).unsigned_abs())
}

/// Writes a non-negative 32-bit integer with no leading zeros.
///
/// # Errors
///
/// Propagates any error from `sink`.
pub fn write_u32<S: Sink + ?Sized>(sink: &mut S, n: u32) -> Result<(), S::Error> {
    if n >= 100 {
        let quotient = n / 100;
        write_u32(sink, quotient)?;
        write_pair(sink, (n - quotient * 100) as usize)
    } else {
        write_small(sink, n as usize)
    }
}

/// Writes a non-negative 64-bit integer with no leading zeros.
///
/// # Errors
///
/// Propagates any error from `sink`.
#[allow(clippy::cast_possible_truncation)]
pub fn write_u64<S: Sink + ?Sized>(sink: &mut S, n: u64) -> Result<(), S::Error> {
    if n >= 100 {
        let quotient = n / 100;
        write_u64(sink, quotient)?;
        write_pair(sink, (n - quotient * 100) as usize)
    } else {
        write_small(sink, n as usize)
    }
}

/// Writes `n` as exactly two digits. `n` must be below 100.
///
/// # Errors
///
/// Propagates any error from `sink`.
pub fn write_2_digits<S: Sink + ?Sized>(sink: &mut S, n: u32) -> Result<(), S::Error> {
    debug_assert!(n < 100, "{n} does not fit in two digits");
    write_pair(sink, n as usize)
}

/// Writes `n` as exactly three digits. `n` must be below 1000.
///
/// # Errors
///
/// Propagates any error from `sink`.
pub fn write_3_digits<S: Sink + ?Sized>(sink: &mut S, n: u32) -> Result<(), S::Error> {
    debug_assert!(n < 1000, "{n} does not fit in three digits");
    let hundreds = n / 100;
    sink.push_unit(UNITS_DIGITS[hundreds as usize])?;
    write_pair(sink, (n - hundreds * 100) as usize)
}

/// Writes `n` zero-padded to `width`.
///
/// # Errors
///
/// Propagates any error from `sink`.
pub fn write_fixed_width<S: Sink + ?Sized>(
    sink: &mut S,
    n: u32,
    width: FixedWidth,
) -> Result<(), S::Error> {
    match width {
        FixedWidth::Two => write_2_digits(sink, n),
        FixedWidth::Three => write_3_digits(sink, n),
    }
}

/// Writes the four hex digits of `unit`, most significant nibble first.
///
/// # Errors
///
/// Propagates any error from `sink`.
pub fn write_hex4<S: Sink + ?Sized>(sink: &mut S, unit: u16) -> Result<(), S::Error> {
    let unit = usize::from(unit);
    sink.push_units(&[
        HEX_DIGITS[(unit >> 12) & 0xF],
        HEX_DIGITS[(unit >> 8) & 0xF],
        HEX_DIGITS[(unit >> 4) & 0xF],
        HEX_DIGITS[unit & 0xF],
    ])
}

#[inline]
fn write_pair<S: Sink + ?Sized>(sink: &mut S, i: usize) -> Result<(), S::Error> {
    sink.push_units(&[TENS_DIGITS[i], UNITS_DIGITS[i]])
}

// One or two digits, no leading zero.
#[inline]
fn write_small<S: Sink + ?Sized>(sink: &mut S, i: usize) -> Result<(), S::Error> {
    if i >= 10 {
        write_pair(sink, i)
    } else {
        sink.push_unit(UNITS_DIGITS[i])
    }
}
