// This file is part of growable-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Indexing support for [`GrowableSequence`](crate::GrowableSequence).
//!
//! `Index` and `IndexMut` mirror slice behavior:
//! - panics on out-of-bounds;
//! - supports every index type slices accept (`usize` and all range forms);
//! - views are restricted to the logical prefix `[0..len)`, never the spare slots.
//!
//! Use [`GrowableSequence::get`](crate::GrowableSequence::get) and friends for
//! the checked, non-panicking variants.

// Crate imports
use crate::vec::GrowableSequence;

// Core imports
use core::{
    ops::{Index, IndexMut},
    slice::SliceIndex,
};

impl<T, I: SliceIndex<[T]>> Index<I> for GrowableSequence<T> {
    type Output = I::Output;
    fn index(&self, index: I) -> &Self::Output {
        &self.as_slice()[index]
    }
}

impl<T, I: SliceIndex<[T]>> IndexMut<I> for GrowableSequence<T> {
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        &mut self.as_mut_slice()[index]
    }
}
