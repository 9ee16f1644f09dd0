// This file is part of growable-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::GrowableSequence;

// Alloc imports
use alloc::{boxed::Box, vec::Vec};

// Core imports
use core::mem::{self, ManuallyDrop};

impl<T> GrowableSequence<T> {
    /// Converts into a `Vec` holding the logical elements, reusing the allocation.
    #[inline]
    pub(crate) fn into_vec(self) -> Vec<T> {
        // Ownership of the elements moves to the `Vec`; skip our own `Drop`.
        let mut this = ManuallyDrop::new(self);
        let len = this.len;
        let buf = mem::take(&mut this.buf);
        let capacity = buf.len();
        let ptr = Box::into_raw(buf).cast::<T>();

        unsafe {
            // SAFETY: `ptr` comes from a `Box<[MaybeUninit<T>]>` of `capacity`
            // slots, which has the same layout and allocator as a `Vec<T>` of that
            // capacity. `buf[..len]` is initialized by invariant.
            Vec::from_raw_parts(ptr, len, capacity)
        }
    }
}
