// This file is part of growable-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::GrowableSequence;

impl<T> GrowableSequence<T> {
    /// Opens a gap at `index` by shifting `[index..len)` one slot right, then
    /// writes `value` into it.
    ///
    /// Callers guarantee `index <= len < capacity`.
    #[inline]
    pub(crate) fn shift_right_and_write(&mut self, index: usize, value: T) {
        debug_assert!(index <= self.buf.len() && self.buf.len() < self.cap);

        // `len < cap` so this push stays inside the allocation.
        self.buf.push(value);
        self.buf[index..].rotate_right(1);
    }
}
