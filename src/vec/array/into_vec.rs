// This file is part of growable-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::GrowableSequence;

// Alloc imports
use alloc::vec::Vec;

impl<T> GrowableSequence<T> {
    /// Converts into a `Vec` holding the logical elements, reusing the allocation.
    #[inline]
    pub(crate) fn into_vec(self) -> Vec<T> {
        self.buf
    }
}
