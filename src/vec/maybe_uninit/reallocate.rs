// This file is part of growable-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::GrowableSequence;

// Alloc imports
use alloc::boxed::Box;

// Core imports
use core::ptr;

impl<T> GrowableSequence<T> {
    /// Replaces the backing buffer with one of `capacity` slots, moving the
    /// prefix `[0..len)` over bit for bit.
    ///
    /// Callers guarantee `capacity >= len`.
    pub(crate) fn reallocate(&mut self, capacity: usize) {
        let len = self.len;
        debug_assert!(capacity >= len);

        let mut fresh = Box::<[T]>::new_uninit_slice(capacity);
        unsafe {
            // SAFETY: `buf[..len]` is initialized by invariant, `fresh` has at
            // least `len` slots, and the two allocations are distinct.
            ptr::copy_nonoverlapping(self.buf.as_ptr(), fresh.as_mut_ptr(), len);
        }

        // The old buffer is `[MaybeUninit<T>]`, so dropping it frees the memory
        // without dropping the elements that now live in `fresh`.
        self.buf = fresh;
    }
}
