// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

use crate::Error;

/// A `(location, length)` range over a text, counted in `char`s.
///
/// `TextRange` is used both as a key in [`RangeAttributeStore`] and to describe the region an
/// attribute map covers. It is not tied to any particular text: a range recorded against one
/// version of a text stays valid as a key after the text shrinks, and is [clipped](Self::clip)
/// when styled text is built.
///
/// Two ranges are equal only when both their location and length are equal; overlapping ranges
/// are distinct keys.
///
/// ## Example
///
/// ```
/// use range_attributes::TextRange;
///
/// let range = TextRange::new(6, 5);
/// assert_eq!(range.end(), 11);
/// assert_eq!(TextRange::try_from(6..11), Ok(range));
///
/// // The text shrank to 8 chars since the range was recorded.
/// assert_eq!(range.clip(8), Some(TextRange::new(6, 2)));
/// assert_eq!(range.clip(4), None);
/// ```
///
/// [`RangeAttributeStore`]: crate::RangeAttributeStore
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TextRange {
    location: usize,
    length: usize,
}

impl TextRange {
    /// Creates a range starting at `location` and covering `length` chars.
    #[must_use]
    #[inline]
    pub const fn new(location: usize, length: usize) -> Self {
        Self { location, length }
    }

    /// Creates a range from `start` and `end` offsets.
    ///
    /// Returns an [`ErrorKind::InvalidRange`](crate::ErrorKind::InvalidRange) error if
    /// `start > end`.
    #[inline]
    pub fn from_bounds(start: usize, end: usize) -> Result<Self, Error> {
        if start > end {
            return Err(Error::invalid_range(start, end));
        }
        Ok(Self::new(start, end - start))
    }

    /// The first char offset covered by this range.
    #[must_use]
    #[inline]
    pub const fn location(self) -> usize {
        self.location
    }

    /// The number of chars covered by this range.
    #[must_use]
    #[inline]
    pub const fn len(self) -> usize {
        self.length
    }

    /// Returns `true` if this range covers no chars.
    #[must_use]
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.length == 0
    }

    /// The char offset one past the end of this range.
    ///
    /// Saturates at `usize::MAX`.
    #[must_use]
    #[inline]
    pub const fn end(self) -> usize {
        self.location.saturating_add(self.length)
    }

    /// Returns this range as a `Range<usize>`.
    #[must_use]
    #[inline]
    pub const fn as_range(self) -> Range<usize> {
        self.location..self.end()
    }

    /// Clips this range to a text of `text_len` chars.
    ///
    /// Returns `None` if the range starts past the end of the text, or if nothing is left after
    /// clipping. Otherwise the returned range starts at the same location and ends no later than
    /// `text_len`.
    #[must_use]
    #[inline]
    pub fn clip(self, text_len: usize) -> Option<Self> {
        if self.location > text_len {
            return None;
        }
        let length = self.length.min(text_len - self.location);
        if length == 0 {
            return None;
        }
        Some(Self::new(self.location, length))
    }
}

impl From<TextRange> for Range<usize> {
    #[inline]
    fn from(value: TextRange) -> Self {
        value.as_range()
    }
}

impl TryFrom<Range<usize>> for TextRange {
    type Error = Error;

    #[inline]
    fn try_from(value: Range<usize>) -> Result<Self, Self::Error> {
        Self::from_bounds(value.start, value.end)
    }
}
