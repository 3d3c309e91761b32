//! Decode diagnostics.
//!
//! With the `tracing` feature each decode reports its outcome through
//! `tracing`; without it these functions do nothing.
use alloc::borrow::Cow;

use crate::DecodeError;

/// Outcome of one [`parse_string`](crate::parse_string) call, with the cursor
/// index it stopped at.
#[cfg(feature = "tracing")]
pub(crate) fn decoded(index: usize, result: &Result<Cow<'_, [u16]>, DecodeError>) {
    match result {
        Ok(units) => tracing::trace!(
            index,
            len = units.len(),
            borrowed = matches!(units, Cow::Borrowed(_)),
            "decoded json string"
        ),
        Err(err) => tracing::debug!(index, error = %err, "invalid json string"),
    }
}

#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn decoded(_index: usize, _result: &Result<Cow<'_, [u16]>, DecodeError>) {}
