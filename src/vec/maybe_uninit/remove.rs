// This file is part of growable-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::GrowableSequence;

// Core imports
use core::ptr;

impl<T> GrowableSequence<T> {
    /// Closes the gap at `index` by shifting `(index..len)` one slot left, and
    /// returns the element that was at `index`.
    ///
    /// Callers guarantee `index < len`.
    #[inline]
    pub(crate) fn shift_left_and_take(&mut self, index: usize) -> T {
        let len = self.len;
        debug_assert!(index < len);

        let out = unsafe {
            // SAFETY: `index < len`, so `buf[index]` is initialized. Reading it
            // moves ownership to `out`; the slot is overwritten by the shift below
            // (or falls outside `len` when `index == len - 1`).
            let p = self.buf.as_mut_ptr().cast::<T>().add(index);
            let out = p.read();
            // Shift left: [index+1..len) -> [index..len-1)
            ptr::copy(p.add(1), p, len - index - 1);
            out
        };

        self.len = len - 1;
        out
    }
}
