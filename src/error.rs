// This file is part of growable-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for `GrowableSequence`.
//!
//! Every variant is an index error: an index or range argument fell outside the
//! range its operation accepts. They are `Copy` and implement `core::error::Error`.

// Core imports
use core::{error::Error as CoreError, fmt};

/// Errors returned by operations on [`GrowableSequence`](crate::GrowableSequence).
///
/// Bounds are always checked before anything is modified, so a call that returns
/// one of these leaves the sequence exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// `index` does not name an existing element (`index >= len`).
    ///
    /// Returned by `get`, `get_mut`, `set` and `remove`.
    OutOfBounds { index: usize, len: usize },
    /// `index` is not a valid insertion point (`index > len`).
    ///
    /// Returned by `insert`, `insert_copy`, `prefix` and `suffix`.
    InsertOutOfBounds { index: usize, len: usize },
    /// The range `start..end` is inverted or reaches past `len`.
    ///
    /// Returned by `delete_range` and `extract_range`.
    InvalidRange { start: usize, end: usize, len: usize },
}

#[allow(clippy::len_without_is_empty)]
impl Error {
    /// The offending index. For [`Error::InvalidRange`] this is the range bound
    /// that broke the rule (`start` when inverted, `end` otherwise).
    pub const fn index(&self) -> usize {
        match *self {
            Self::OutOfBounds { index, .. } | Self::InsertOutOfBounds { index, .. } => index,
            Self::InvalidRange { start, end, len } => {
                if start > end || end <= len {
                    start
                } else {
                    end
                }
            }
        }
    }

    /// Length of the sequence when the error was raised.
    pub const fn len(&self) -> usize {
        match *self {
            Self::OutOfBounds { len, .. }
            | Self::InsertOutOfBounds { len, .. }
            | Self::InvalidRange { len, .. } => len,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for length {len}")
            }
            Self::InsertOutOfBounds { index, len } => {
                write!(f, "insertion index {index} out of bounds for length {len}")
            }
            Self::InvalidRange { start, end, len } => {
                write!(f, "range {start}..{end} out of bounds for length {len}")
            }
        }
    }
}

impl CoreError for Error {}

#[cfg(test)]
mod tests {
    // Imports
    use crate::Error;
    use alloc::string::{String, ToString};
    use core::error::Error as CoreError;

    fn takes_error(e: &dyn CoreError) -> String {
        e.to_string()
    }

    #[test]
    fn test_error_is_core_error() {
        let s = takes_error(&Error::OutOfBounds { index: 3, len: 2 });
        assert!(s.contains("out of bounds"));
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(
            Error::OutOfBounds { index: 0, len: 0 }.to_string(),
            "index 0 out of bounds for length 0"
        );
        assert_eq!(
            Error::InsertOutOfBounds { index: 4, len: 2 }.to_string(),
            "insertion index 4 out of bounds for length 2"
        );
        assert_eq!(
            Error::InvalidRange { start: 3, end: 1, len: 5 }.to_string(),
            "range 3..1 out of bounds for length 5"
        );
    }

    #[test]
    fn test_index_and_len_accessors() {
        let e = Error::OutOfBounds { index: 7, len: 2 };
        assert_eq!((e.index(), e.len()), (7, 2));

        // Inverted range reports the start, overlong range reports the end.
        let inverted = Error::InvalidRange { start: 3, end: 1, len: 5 };
        assert_eq!(inverted.index(), 3);
        let overlong = Error::InvalidRange { start: 1, end: 9, len: 5 };
        assert_eq!(overlong.index(), 9);
        assert_eq!(overlong.len(), 5);
    }
}
