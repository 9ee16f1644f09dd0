// This file is part of growable-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::GrowableSequence;

impl<T> GrowableSequence<T> {
    /// Shortens the sequence to `new_len`, dropping the elements past it.
    ///
    /// A no-op if `new_len >= len`. Capacity is unchanged.
    #[inline]
    pub fn truncate(&mut self, new_len: usize) {
        self.buf.truncate(new_len);
    }
}
