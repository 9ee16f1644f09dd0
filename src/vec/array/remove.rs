// This file is part of growable-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::GrowableSequence;

impl<T> GrowableSequence<T> {
    /// Closes the gap at `index` by shifting `(index..len)` one slot left, and
    /// returns the element that was at `index`.
    ///
    /// Callers guarantee `index < len`.
    #[inline]
    pub(crate) fn shift_left_and_take(&mut self, index: usize) -> T {
        let last = self.buf.len() - 1;
        debug_assert!(index <= last);

        // Shift left: [index+1..len) -> [index..len-1), target ends up at len-1.
        self.buf[index..].rotate_left(1);
        // Taking the last slot, so nothing is swapped.
        self.buf.swap_remove(last)
    }
}
