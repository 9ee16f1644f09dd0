// This file is part of growable-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::GrowableSequence;

impl<T> GrowableSequence<T> {
    /// Returns the number of slots in the backing buffer.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// Returns the logical length.
    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns the logical elements as a shared slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.buf
    }

    /// Returns the logical elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.buf
    }
}
