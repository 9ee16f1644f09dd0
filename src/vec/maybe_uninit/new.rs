// This file is part of growable-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::GrowableSequence;

// Alloc imports
use alloc::boxed::Box;

impl<T> GrowableSequence<T> {
    /// Constructs an empty sequence with [`DEFAULT_CAPACITY`](Self::DEFAULT_CAPACITY) slots.
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Constructs an empty sequence with room for `capacity` elements.
    ///
    /// The slots are left uninitialized; no `T` is constructed.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Box::<[T]>::new_uninit_slice(capacity),
            len: 0,
        }
    }
}
