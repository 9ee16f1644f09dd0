// This file is part of growable-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Structural operations that build a new sequence out of one or two sources.
//!
//! None of these modify `self` or their argument. Each result is allocated with
//! exactly the capacity it needs and filled by appending clones in order, so the
//! growth and shift primitives stay the only code touching storage.

// Crate imports
use crate::{
    error::Error,
    vec::GrowableSequence,
};

// Core imports
use core::ops::Range;

impl<T: Clone> GrowableSequence<T> {
    /// Builds a sequence from consecutive source slices.
    fn from_parts(parts: &[&[T]]) -> Self {
        let len: usize = parts.iter().map(|p| p.len()).sum();
        let mut out = Self::with_capacity(len);
        for part in parts {
            out.extend_from_slice(part);
        }
        out
    }

    /// Returns `self ++ other`.
    ///
    /// ```rust
    /// use growable_seq::GrowableSequence;
    ///
    /// let a: GrowableSequence<char> = "abcdef".chars().collect();
    /// let b: GrowableSequence<char> = "wxyz".chars().collect();
    /// assert_eq!(a.concat(&b).to_string(), "[a, b, c, d, e, f, w, x, y, z]");
    /// assert_eq!(a.len(), 6);
    /// ```
    pub fn concat(&self, other: &Self) -> Self {
        Self::from_parts(&[self.as_slice(), other.as_slice()])
    }

    /// Returns `self[..index] ++ other ++ self[index..]`.
    ///
    /// Returns [`Error::InsertOutOfBounds`] if `index > len`.
    pub fn insert_copy(&self, index: usize, other: &Self) -> Result<Self, Error> {
        self.check_insertion(index)?;
        let (head, tail) = self.as_slice().split_at(index);
        Ok(Self::from_parts(&[head, other.as_slice(), tail]))
    }

    /// Returns the first `to` elements, `self[..to]`.
    ///
    /// `to == 0` gives an empty sequence and `to == len` a full copy.
    /// Returns [`Error::InsertOutOfBounds`] if `to > len`.
    pub fn prefix(&self, to: usize) -> Result<Self, Error> {
        self.check_insertion(to)?;
        Ok(Self::from_parts(&[&self.as_slice()[..to]]))
    }

    /// Returns the elements from `from` on, `self[from..]`.
    ///
    /// `from == len` gives an empty sequence.
    /// Returns [`Error::InsertOutOfBounds`] if `from > len`.
    pub fn suffix(&self, from: usize) -> Result<Self, Error> {
        self.check_insertion(from)?;
        Ok(Self::from_parts(&[&self.as_slice()[from..]]))
    }

    /// Returns `self` without the elements in `range`: `self[..start] ++ self[end..]`.
    ///
    /// An empty range gives a full copy.
    /// Returns [`Error::InvalidRange`] unless `start <= end <= len`.
    ///
    /// ```rust
    /// use growable_seq::GrowableSequence;
    ///
    /// let s: GrowableSequence<char> = "abcdef".chars().collect();
    /// assert_eq!(s.delete_range(1..4).unwrap().to_string(), "[a, e, f]");
    /// ```
    pub fn delete_range(&self, range: Range<usize>) -> Result<Self, Error> {
        self.check_range(&range)?;
        let s = self.as_slice();
        Ok(Self::from_parts(&[&s[..range.start], &s[range.end..]]))
    }

    /// Returns the elements in `range`: `self[start..end]`.
    ///
    /// An empty range gives an empty sequence.
    /// Returns [`Error::InvalidRange`] unless `start <= end <= len`.
    ///
    /// ```rust
    /// use growable_seq::GrowableSequence;
    ///
    /// let s: GrowableSequence<char> = "abcdef".chars().collect();
    /// assert_eq!(s.extract_range(1..4).unwrap().to_string(), "[b, c, d]");
    /// ```
    pub fn extract_range(&self, range: Range<usize>) -> Result<Self, Error> {
        self.check_range(&range)?;
        Ok(Self::from_parts(&[&self.as_slice()[range]]))
    }
}
