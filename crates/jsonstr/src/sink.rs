//! Output sinks for the encoders and the digit renderer.
//!
//! A [`Sink`] accepts UTF-16 code units one at a time or in runs. The
//! encoders are written once against this trait, so the same escaping logic
//! serves a growable buffer, a per-unit callback and a `fmt::Write` adapter.
use alloc::vec::Vec;
use core::{convert::Infallible, fmt};

use crate::error::SinkError;

/// Destination for UTF-16 code units.
///
/// Failures raised by an implementation are handed back to the caller of the
/// encoding function unchanged.
pub trait Sink {
    /// Error raised when the sink cannot accept more output.
    type Error;

    /// Appends a single code unit.
    ///
    /// # Errors
    ///
    /// Whatever the implementation reports.
    fn push_unit(&mut self, unit: u16) -> Result<(), Self::Error>;

    /// Appends a run of code units.
    ///
    /// # Errors
    ///
    /// The first error reported by [`Sink::push_unit`].
    fn push_units(&mut self, units: &[u16]) -> Result<(), Self::Error> {
        for &unit in units {
            self.push_unit(unit)?;
        }
        Ok(())
    }

    /// Appends an ASCII string, one code unit per byte.
    ///
    /// # Errors
    ///
    /// The first error reported by [`Sink::push_unit`].
    fn push_ascii(&mut self, text: &str) -> Result<(), Self::Error> {
        debug_assert!(text.is_ascii());
        for byte in text.bytes() {
            self.push_unit(u16::from(byte))?;
        }
        Ok(())
    }
}

impl Sink for Vec<u16> {
    type Error = Infallible;

    #[inline]
    fn push_unit(&mut self, unit: u16) -> Result<(), Self::Error> {
        self.push(unit);
        Ok(())
    }

    fn push_units(&mut self, units: &[u16]) -> Result<(), Self::Error> {
        self.extend_from_slice(units);
        Ok(())
    }
}

impl<S: Sink + ?Sized> Sink for &mut S {
    type Error = S::Error;

    #[inline]
    fn push_unit(&mut self, unit: u16) -> Result<(), Self::Error> {
        (**self).push_unit(unit)
    }

    fn push_units(&mut self, units: &[u16]) -> Result<(), Self::Error> {
        (**self).push_units(units)
    }

    fn push_ascii(&mut self, text: &str) -> Result<(), Self::Error> {
        (**self).push_ascii(text)
    }
}

/// Sink that hands each code unit to a callback.
///
/// ```rust
/// use jsonstr::{Emitter, append_string};
///
/// let mut count = 0;
/// let mut sink = Emitter::new(|_unit| {
///     count += 1;
///     Ok::<_, ()>(())
/// });
/// let text: Vec<u16> = "a\nb".encode_utf16().collect();
/// append_string(&mut sink, &text, false).unwrap();
/// assert_eq!(count, 6);
/// ```
#[derive(Debug, Clone)]
pub struct Emitter<F> {
    callback: F,
}

impl<F> Emitter<F> {
    /// Wraps `callback`.
    pub fn new(callback: F) -> Self {
        Self { callback }
    }

    /// Returns the wrapped callback.
    pub fn into_inner(self) -> F {
        self.callback
    }
}

impl<F, E> Sink for Emitter<F>
where
    F: FnMut(u16) -> Result<(), E>,
{
    type Error = E;

    #[inline]
    fn push_unit(&mut self, unit: u16) -> Result<(), Self::Error> {
        (self.callback)(unit)
    }
}

/// Sink that re-pairs surrogates and writes characters to a
/// [`fmt::Write`].
///
/// A high surrogate is held back until its low half arrives. A surrogate that
/// cannot be paired fails with [`SinkError::UnpairedSurrogate`]; a high
/// surrogate still held at the end is reported by [`Utf16Writer::finish`].
#[derive(Debug)]
pub struct Utf16Writer<W> {
    inner: W,
    pending_high: Option<u16>,
}

impl<W: fmt::Write> Utf16Writer<W> {
    /// Wraps `inner`.
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            pending_high: None,
        }
    }

    /// Returns the writer, checking that no high surrogate is left over.
    ///
    /// # Errors
    ///
    /// [`SinkError::UnpairedSurrogate`] if the last unit written was a high
    /// surrogate.
    pub fn finish(self) -> Result<W, SinkError> {
        match self.pending_high {
            Some(high) => Err(SinkError::UnpairedSurrogate(high)),
            None => Ok(self.inner),
        }
    }

    fn write_scalar(&mut self, scalar: u32) -> Result<(), SinkError> {
        let ch = char::from_u32(scalar).ok_or(SinkError::UnpairedSurrogate(0))?;
        self.inner.write_char(ch)?;
        Ok(())
    }
}

impl<W: fmt::Write> Sink for Utf16Writer<W> {
    type Error = SinkError;

    fn push_unit(&mut self, unit: u16) -> Result<(), Self::Error> {
        let is_high = (0xD800..0xDC00).contains(&unit);
        let is_low = (0xDC00..0xE000).contains(&unit);
        match self.pending_high.take() {
            Some(high) if is_low => {
                let scalar = 0x1_0000 + ((u32::from(high) - 0xD800) << 10) + (u32::from(unit) - 0xDC00);
                self.write_scalar(scalar)
            }
            Some(high) => Err(SinkError::UnpairedSurrogate(high)),
            None if is_high => {
                self.pending_high = Some(unit);
                Ok(())
            }
            None if is_low => Err(SinkError::UnpairedSurrogate(unit)),
            None => self.write_scalar(u32::from(unit)),
        }
    }

    fn push_ascii(&mut self, text: &str) -> Result<(), Self::Error> {
        if let Some(high) = self.pending_high.take() {
            return Err(SinkError::UnpairedSurrogate(high));
        }
        self.inner.write_str(text)?;
        Ok(())
    }
}

/// Unwraps the result of writing to an infallible sink.
pub(crate) fn infallible<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}
