// This file is part of growable-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::GrowableSequence};

// Core imports
use core::ops::Range;

impl<T> GrowableSequence<T> {
    /// `index` must name an existing element: `index < len`.
    #[inline]
    pub(crate) fn check_retrieval(&self, index: usize) -> Result<(), Error> {
        if index < self.len() {
            Ok(())
        } else {
            Err(Error::OutOfBounds {
                index,
                len: self.len(),
            })
        }
    }

    /// `index` must be a position an element could be inserted at: `index <= len`.
    #[inline]
    pub(crate) fn check_insertion(&self, index: usize) -> Result<(), Error> {
        if index <= self.len() {
            Ok(())
        } else {
            Err(Error::InsertOutOfBounds {
                index,
                len: self.len(),
            })
        }
    }

    /// `range` must satisfy `start <= end <= len`.
    #[inline]
    pub(crate) fn check_range(&self, range: &Range<usize>) -> Result<(), Error> {
        if range.start <= range.end && range.end <= self.len() {
            Ok(())
        } else {
            Err(Error::InvalidRange {
                start: range.start,
                end: range.end,
                len: self.len(),
            })
        }
    }
}
