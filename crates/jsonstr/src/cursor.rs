//! Scanning position over UTF-16 input.

/// A read position over a sequence of UTF-16 code units.
///
/// The lifetime `'a` is that of the underlying text, so slices handed out by
/// [`Cursor::slice`] outlive the cursor itself.
pub trait Cursor<'a> {
    /// Index of the next unit to be read.
    fn index(&self) -> usize;

    /// Returns `true` if no units are left.
    fn is_at_end(&self) -> bool;

    /// Reads one unit and advances past it; `None` at end of input.
    fn next_unit(&mut self) -> Option<u16>;

    /// Reads exactly `count` hexadecimal digits (either case) and returns
    /// their value. Consumes nothing and returns `None` if fewer than `count`
    /// digits follow.
    fn match_hex(&mut self, count: usize) -> Option<u32>;

    /// Units between two indices previously reported by [`Cursor::index`].
    fn slice(&self, start: usize, end: usize) -> &'a [u16];
}

/// [`Cursor`] over a borrowed slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextCursor<'a> {
    text: &'a [u16],
    index: usize,
}

impl<'a> TextCursor<'a> {
    /// Starts at the beginning of `text`.
    #[must_use]
    pub fn new(text: &'a [u16]) -> Self {
        Self::with_index(text, 0)
    }

    /// Starts at `index`, clamped to the length of `text`.
    #[must_use]
    pub fn with_index(text: &'a [u16], index: usize) -> Self {
        Self {
            text,
            index: index.min(text.len()),
        }
    }

    /// Moves to `index`, clamped to the length of the text.
    pub fn set_index(&mut self, index: usize) {
        self.index = index.min(self.text.len());
    }

    /// Units not yet read.
    #[must_use]
    pub fn remaining(&self) -> &'a [u16] {
        &self.text[self.index..]
    }
}

impl<'a> Cursor<'a> for TextCursor<'a> {
    #[inline]
    fn index(&self) -> usize {
        self.index
    }

    #[inline]
    fn is_at_end(&self) -> bool {
        self.index >= self.text.len()
    }

    #[inline]
    fn next_unit(&mut self) -> Option<u16> {
        let unit = *self.text.get(self.index)?;
        self.index += 1;
        Some(unit)
    }

    fn match_hex(&mut self, count: usize) -> Option<u32> {
        let digits = self.text.get(self.index..self.index.checked_add(count)?)?;
        let value = digits.iter().try_fold(0u32, |acc, &unit| {
            let digit = char::from_u32(u32::from(unit))?.to_digit(16)?;
            acc.checked_mul(16)?.checked_add(digit)
        })?;
        self.index += count;
        Some(value)
    }

    fn slice(&self, start: usize, end: usize) -> &'a [u16] {
        &self.text[start..end]
    }
}
