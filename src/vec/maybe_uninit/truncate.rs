// This file is part of growable-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::GrowableSequence;

// Core imports
use core::ptr;

impl<T> GrowableSequence<T> {
    /// Shortens the sequence to `new_len`, dropping the elements past it.
    ///
    /// A no-op if `new_len >= len`. Capacity is unchanged.
    #[inline]
    pub fn truncate(&mut self, new_len: usize) {
        let len = self.len;
        if new_len >= len {
            return;
        }
        // Shrink first so a panicking destructor cannot cause a double drop.
        self.len = new_len;
        unsafe {
            // SAFETY: `buf[new_len..len]` was initialized and is no longer part of
            // the logical prefix, so it is dropped here exactly once.
            let tail = core::slice::from_raw_parts_mut(
                self.buf.as_mut_ptr().cast::<T>().add(new_len),
                len - new_len,
            );
            ptr::drop_in_place(tail);
        }
    }
}
