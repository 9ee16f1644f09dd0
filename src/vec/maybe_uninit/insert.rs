// This file is part of growable-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::GrowableSequence;

// Core imports
use core::ptr;

impl<T> GrowableSequence<T> {
    /// Opens a gap at `index` by shifting `[index..len)` one slot right, then
    /// writes `value` into it.
    ///
    /// Callers guarantee `index <= len < capacity`.
    #[inline]
    pub(crate) fn shift_right_and_write(&mut self, index: usize, value: T) {
        let len = self.len;
        debug_assert!(index <= len && len < self.buf.len());

        unsafe {
            // SAFETY: `index <= len < buf.len()`, so both `[index..len)` and
            // `[index+1..len+1)` are inside the buffer. `ptr::copy` handles the
            // overlap. After the copy, slot `index` holds stale bits that are
            // overwritten without being dropped.
            let p = self.buf.as_mut_ptr().cast::<T>().add(index);
            ptr::copy(p, p.add(1), len - index);
            p.write(value);
        }

        self.len = len + 1;
    }
}
