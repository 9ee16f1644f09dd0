// This file is part of growable-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Iterator support for [`GrowableSequence`](crate::GrowableSequence).
//!
//! - `IntoIter<T>` yields by value and supports `DoubleEndedIterator`,
//!   `ExactSizeIterator`, and `FusedIterator`.
//! - `&GrowableSequence` and `&mut GrowableSequence` iterate as slices.
//! - `FromIterator` and `Extend` grow the sequence as needed; nothing is truncated.

// Crate imports
use crate::vec::GrowableSequence;

// Alloc imports
use alloc::vec::{self, Vec};

// Core imports
use core::iter::FusedIterator;

/// Owned iterator returned by `GrowableSequence::into_iter()`.
///
/// Yields elements by value from front to back. Elements not yet yielded are
/// dropped together with the iterator.
pub struct IntoIter<T> {
    pub(crate) inner: vec::IntoIter<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        self.inner.next()
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
    fn nth(&mut self, n: usize) -> Option<T> {
        self.inner.nth(n)
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.inner.next_back()
    }
    fn nth_back(&mut self, n: usize) -> Option<T> {
        self.inner.nth_back(n)
    }
}
impl<T> FusedIterator for IntoIter<T> {}
impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T: core::fmt::Debug> core::fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("IntoIter")
            .field(&self.inner.as_slice())
            .finish()
    }
}

impl<T> IntoIterator for GrowableSequence<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.into_vec().into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a GrowableSequence<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut GrowableSequence<T> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> Extend<T> for GrowableSequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for item in iter {
            self.push(item);
        }
    }
}

impl<T> FromIterator<T> for GrowableSequence<T> {
    /// Collects every item; the initial capacity comes from the iterator's lower
    /// size bound.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut out = Self::with_capacity(iter.size_hint().0);
        out.extend(iter);
        out
    }
}

impl<T, const M: usize> From<[T; M]> for GrowableSequence<T> {
    fn from(items: [T; M]) -> Self {
        items.into_iter().collect()
    }
}

impl<T: Clone> From<&[T]> for GrowableSequence<T> {
    fn from(src: &[T]) -> Self {
        let mut out = Self::with_capacity(src.len());
        out.extend_from_slice(src);
        out
    }
}

impl<T> From<Vec<T>> for GrowableSequence<T> {
    fn from(items: Vec<T>) -> Self {
        items.into_iter().collect()
    }
}

impl<T> From<GrowableSequence<T>> for Vec<T> {
    fn from(seq: GrowableSequence<T>) -> Self {
        seq.into_vec()
    }
}
