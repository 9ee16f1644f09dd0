// This file is part of growable-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `GrowableSequence` type and its inherent API.
//!
//! `GrowableSequence<T>` keeps its elements in one heap-allocated backing buffer and
//! tracks a logical length. The backend modules own the memory-level primitives
//! (allocation, reallocation, shifting); everything in this module is written on
//! top of them and of the bounds checks.

#[cfg(not(feature = "unsafe-maybe-uninit"))]
mod array;
mod bounds;
mod grow;
#[cfg(feature = "unsafe-maybe-uninit")]
mod maybe_uninit;
mod ops;

// Crate imports
use crate::error::Error;

// Alloc imports
#[cfg(feature = "unsafe-maybe-uninit")]
use alloc::boxed::Box;
#[cfg(not(feature = "unsafe-maybe-uninit"))]
use alloc::vec::Vec;

// Core imports
use core::{
    borrow::{Borrow, BorrowMut},
    fmt,
    hash::{Hash, Hasher},
    mem,
    ops::{Deref, DerefMut},
};

/// A heap-backed, growable sequence with checked positional access.
///
/// `GrowableSequence<T>` stores its elements contiguously in a backing buffer of
/// `capacity()` slots and tracks a logical length `len <= capacity()`. Only the
/// prefix `[0..len)` is visible; the remaining slots are spare room for growth.
///
/// # Operations
///
/// - Positional access ([`get`], [`get_mut`], [`set`]) is `O(1)` and validated
///   against `[0, len)`.
/// - [`push`] is amortized `O(1)`. [`insert`] and [`remove`] shift the tail one
///   slot and are `O(len - index)`.
/// - The structural operations ([`concat`], [`insert_copy`], [`prefix`],
///   [`suffix`], [`delete_range`], [`extract_range`]) never modify `self`; they
///   build and return a new sequence.
///
/// Every fallible operation checks its arguments before touching storage, so an
/// `Err` leaves the sequence unchanged.
///
/// # Growth
///
/// When an operation needs more room than `capacity()`, storage is reallocated to
/// `max(required, 2 * capacity + 1)` slots and the existing elements are moved
/// over in order. Capacity never shrinks.
///
/// # Examples
///
/// ```rust
/// use growable_seq::GrowableSequence;
///
/// let mut s = GrowableSequence::new();
/// s.insert(0, 'A').unwrap();
/// s.insert(1, 'B').unwrap();
/// s.insert(1, 'C').unwrap();
/// assert_eq!(s.to_string(), "[A, C, B]");
///
/// assert_eq!(s.remove(0), Ok('A'));
/// assert!(s.get(5).is_err());
/// ```
///
/// [`get`]: GrowableSequence::get
/// [`get_mut`]: GrowableSequence::get_mut
/// [`set`]: GrowableSequence::set
/// [`push`]: GrowableSequence::push
/// [`insert`]: GrowableSequence::insert
/// [`remove`]: GrowableSequence::remove
/// [`concat`]: GrowableSequence::concat
/// [`insert_copy`]: GrowableSequence::insert_copy
/// [`prefix`]: GrowableSequence::prefix
/// [`suffix`]: GrowableSequence::suffix
/// [`delete_range`]: GrowableSequence::delete_range
/// [`extract_range`]: GrowableSequence::extract_range
#[cfg(not(feature = "unsafe-maybe-uninit"))]
pub struct GrowableSequence<T> {
    pub(crate) buf: Vec<T>,
    pub(crate) cap: usize,
}
#[cfg(feature = "unsafe-maybe-uninit")]
pub struct GrowableSequence<T> {
    pub(crate) buf: Box<[core::mem::MaybeUninit<T>]>,
    pub(crate) len: usize,
}

impl<T> GrowableSequence<T> {
    /// Capacity used by [`new`](GrowableSequence::new) and [`Default`].
    pub const DEFAULT_CAPACITY: usize = 10;

    /// Returns `true` if `len == 0`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the element at `index`.
    ///
    /// Returns [`Error::OutOfBounds`] if `index >= len`.
    #[inline]
    pub fn get(&self, index: usize) -> Result<&T, Error> {
        self.check_retrieval(index)?;
        Ok(&self.as_slice()[index])
    }

    /// Returns the element at `index` mutably.
    ///
    /// Returns [`Error::OutOfBounds`] if `index >= len`.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, Error> {
        self.check_retrieval(index)?;
        Ok(&mut self.as_mut_slice()[index])
    }

    /// Stores `value` at `index` and returns the element it replaced.
    ///
    /// Returns [`Error::OutOfBounds`] if `index >= len`; nothing is stored then.
    #[inline]
    pub fn set(&mut self, index: usize, value: T) -> Result<T, Error> {
        self.check_retrieval(index)?;
        Ok(mem::replace(&mut self.as_mut_slice()[index], value))
    }

    // iterators
    /// Shorthand for `self.as_slice().iter()`.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Shorthand for `self.as_mut_slice().iter_mut()`.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Returns the first element, if any.
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// Returns the last element, if any.
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.as_slice().last()
    }
}

impl<T> GrowableSequence<T> {
    /// Inserts `value` at `index`, shifting `[index..len)` one slot to the right.
    ///
    /// `index == len` appends. Grows the backing buffer when it is full.
    ///
    /// Returns [`Error::InsertOutOfBounds`] if `index > len`.
    #[inline]
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), Error> {
        self.check_insertion(index)?;
        self.grow_for(self.len() + 1);
        self.shift_right_and_write(index, value);
        Ok(())
    }

    /// Appends `value`, growing the backing buffer when it is full.
    ///
    /// Equivalent to `insert(len, value)`, which cannot fail.
    #[doc(alias = "append")]
    #[inline]
    pub fn push(&mut self, value: T) {
        let len = self.len();
        self.grow_for(len + 1);
        self.shift_right_and_write(len, value);
    }

    /// Removes and returns the element at `index`, shifting `(index..len)` one
    /// slot to the left.
    ///
    /// The sequence keeps no trace of the returned element.
    ///
    /// Returns [`Error::OutOfBounds`] if `index >= len`.
    #[inline]
    pub fn remove(&mut self, index: usize) -> Result<T, Error> {
        self.check_retrieval(index)?;
        Ok(self.shift_left_and_take(index))
    }

    /// Removes and returns the last element, or `None` if empty.
    #[inline]
    #[must_use]
    pub fn pop(&mut self) -> Option<T> {
        match self.len() {
            0 => None,
            len => Some(self.shift_left_and_take(len - 1)),
        }
    }

    /// Makes room for at least `additional` more elements.
    ///
    /// Uses the same growth rule as `push`, so the resulting capacity may exceed
    /// `len + additional`. A no-op when there is already enough room.
    #[inline]
    pub fn reserve(&mut self, additional: usize) {
        self.grow_for(self.len().saturating_add(additional));
    }

    /// Drops every element. Capacity is unchanged.
    #[inline]
    pub fn clear(&mut self) {
        self.truncate(0);
    }
}

impl<T: Clone> GrowableSequence<T> {
    /// Appends a clone of every element of `src`, in order.
    #[inline]
    pub fn extend_from_slice(&mut self, src: &[T]) {
        self.reserve(src.len());
        for item in src {
            self.push(item.clone());
        }
    }
}

impl<T> Default for GrowableSequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Independent copy of the logical elements. The copy's capacity equals the
/// source's length.
impl<T: Clone> Clone for GrowableSequence<T> {
    fn clone(&self) -> Self {
        let mut out = Self::with_capacity(self.len());
        out.extend_from_slice(self.as_slice());
        out
    }
}

impl<T: fmt::Debug> fmt::Debug for GrowableSequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GrowableSequence")
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .field("elements", &self.as_slice())
            .finish()
    }
}

/// Renders the logical elements as `[e0, e1, ..., en-1]`, or `[]` when empty.
impl<T: fmt::Display> fmt::Display for GrowableSequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{item}")?;
        }
        f.write_str("]")
    }
}

impl<T: PartialEq> PartialEq for GrowableSequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl<T: Eq> Eq for GrowableSequence<T> {}
impl<T: Ord> Ord for GrowableSequence<T> {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}
impl<T: PartialOrd> PartialOrd for GrowableSequence<T> {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}
impl<T: Hash> Hash for GrowableSequence<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T> Deref for GrowableSequence<T> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}
impl<T> DerefMut for GrowableSequence<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T> AsRef<[T]> for GrowableSequence<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T> AsMut<[T]> for GrowableSequence<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

// Borrow ergonomics (treat as a slice)
impl<T> Borrow<[T]> for GrowableSequence<T> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T> BorrowMut<[T]> for GrowableSequence<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}
