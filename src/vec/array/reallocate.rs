// This file is part of growable-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::GrowableSequence;

// Alloc imports
use alloc::vec::Vec;

impl<T> GrowableSequence<T> {
    /// Replaces the backing buffer with one of `capacity` slots.
    ///
    /// The elements are moved into the new buffer in order and the old, now
    /// empty, allocation is released.
    /// Callers guarantee `capacity >= len`.
    pub(crate) fn reallocate(&mut self, capacity: usize) {
        debug_assert!(capacity >= self.buf.len());

        let mut fresh = Vec::with_capacity(capacity);
        fresh.append(&mut self.buf);
        self.buf = fresh;
        self.cap = capacity;
    }
}
