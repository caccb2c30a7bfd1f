// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Error returned when constructing a [`TextRange`](crate::TextRange) from bounds.
///
/// Carries a non-exhaustive [`ErrorKind`] plus the offending bounds.
///
/// Storing and building attributes never fails; this only surfaces when converting
/// caller-provided bounds into a range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    /// The non-exhaustive category describing this error.
    kind: ErrorKind,

    /// The start char offset provided by the caller.
    start: usize,

    /// The end char offset (exclusive) provided by the caller.
    end: usize,
}

impl Error {
    /// The machine-readable category for this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The start char offset provided by the caller.
    pub fn start(&self) -> usize {
        self.start
    }

    /// The end char offset provided by the caller.
    pub fn end(&self) -> usize {
        self.end
    }

    pub(crate) fn invalid_range(start: usize, end: usize) -> Self {
        Self {
            kind: ErrorKind::InvalidRange,
            start,
            end,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.kind {
            ErrorKind::InvalidRange => {
                write!(f, "invalid range {}..{}: start > end", self.start, self.end)
            }
        }
    }
}

impl core::error::Error for Error {}

/// The non-exhaustive category of an error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The provided bounds had `start > end`.
    InvalidRange,
}

#[cfg(test)]
mod tests {
    use crate::TextRange;
    use alloc::format;

    #[test]
    fn display_names_the_bounds() {
        let err = TextRange::from_bounds(9, 2).unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("9..2"), "unexpected message: {msg}");
        assert!(msg.contains("start > end"), "unexpected message: {msg}");
    }
}
