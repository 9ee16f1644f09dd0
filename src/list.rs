// This file is part of growable-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The positional list contract.
//!
//! [`List`] describes an ordered sequence whose elements are numbered from `0`
//! and which grows and shrinks as elements are inserted and removed. It says
//! nothing about storage; [`GrowableSequence`] is the array-backed implementation.

// Crate imports
use crate::{
    error::Error,
    vec::GrowableSequence,
};

/// An ordered, positional sequence of elements.
///
/// Index rules shared by every implementation:
/// - `get`, `set` and `remove` accept `index < len()`;
/// - `insert` accepts `index <= len()`, where `len()` appends.
///
/// Violations return an [`Error`] and leave the list unchanged.
pub trait List<T> {
    /// Number of elements.
    fn len(&self) -> usize;

    /// `true` if the list holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The element at `index`.
    fn get(&self, index: usize) -> Result<&T, Error>;

    /// Replaces the element at `index`, returning the old one.
    fn set(&mut self, index: usize, value: T) -> Result<T, Error>;

    /// Inserts `value` at `index`, moving later elements one position up.
    fn insert(&mut self, index: usize, value: T) -> Result<(), Error>;

    /// Removes the element at `index`, moving later elements one position down.
    fn remove(&mut self, index: usize) -> Result<T, Error>;

    /// Appends `value` at the end. Appending cannot fail, so implementations
    /// provide it directly rather than going through [`insert`](List::insert).
    fn push(&mut self, value: T);
}

impl<T> List<T> for GrowableSequence<T> {
    #[inline]
    fn len(&self) -> usize {
        GrowableSequence::len(self)
    }

    #[inline]
    fn is_empty(&self) -> bool {
        GrowableSequence::is_empty(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Result<&T, Error> {
        GrowableSequence::get(self, index)
    }

    #[inline]
    fn set(&mut self, index: usize, value: T) -> Result<T, Error> {
        GrowableSequence::set(self, index, value)
    }

    #[inline]
    fn insert(&mut self, index: usize, value: T) -> Result<(), Error> {
        GrowableSequence::insert(self, index, value)
    }

    #[inline]
    fn remove(&mut self, index: usize) -> Result<T, Error> {
        GrowableSequence::remove(self, index)
    }

    #[inline]
    fn push(&mut self, value: T) {
        GrowableSequence::push(self, value)
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::List;
    use crate::{Error, GrowableSequence};
    use alloc::vec::Vec;
    use proptest::prelude::*;

    /// A second implementation, bounded to `limit` elements, to check the trait
    /// contract does not depend on `GrowableSequence`.
    struct Bounded {
        items: Vec<&'static str>,
        limit: usize,
    }

    impl List<&'static str> for Bounded {
        fn len(&self) -> usize {
            self.items.len()
        }

        fn get(&self, index: usize) -> Result<&&'static str, Error> {
            let len = self.items.len();
            self.items.get(index).ok_or(Error::OutOfBounds { index, len })
        }

        fn set(&mut self, index: usize, value: &'static str) -> Result<&'static str, Error> {
            let len = self.items.len();
            let slot = self
                .items
                .get_mut(index)
                .ok_or(Error::OutOfBounds { index, len })?;
            Ok(core::mem::replace(slot, value))
        }

        fn insert(&mut self, index: usize, value: &'static str) -> Result<(), Error> {
            let len = self.items.len();
            if index > len {
                return Err(Error::InsertOutOfBounds { index, len });
            }
            self.items.insert(index, value);
            Ok(())
        }

        fn remove(&mut self, index: usize) -> Result<&'static str, Error> {
            let len = self.items.len();
            if index >= len {
                return Err(Error::OutOfBounds { index, len });
            }
            Ok(self.items.remove(index))
        }

        fn push(&mut self, value: &'static str) {
            assert!(self.items.len() < self.limit, "bounded list is full");
            self.items.push(value);
        }
    }

    /// Exercises a list through the trait only.
    fn fill_and_drain<L: List<&'static str>>(list: &mut L) {
        assert!(list.is_empty());
        list.push("b");
        list.insert(0, "a").unwrap();
        list.insert(2, "c").unwrap();
        assert_eq!(list.len(), 3);
        assert_eq!(list.get(1), Ok(&"b"));
        assert_eq!(list.set(1, "B"), Ok("b"));
        assert_eq!(list.insert(4, "x"), Err(Error::InsertOutOfBounds { index: 4, len: 3 }));
        assert_eq!(list.remove(0), Ok("a"));
        assert_eq!(list.remove(0), Ok("B"));
        assert_eq!(list.remove(0), Ok("c"));
        assert_eq!(list.remove(0), Err(Error::OutOfBounds { index: 0, len: 0 }));
        assert!(list.is_empty());
    }

    #[test]
    fn test_growable_sequence_satisfies_list() {
        let mut s = GrowableSequence::new();
        fill_and_drain(&mut s);

        let mut tight = GrowableSequence::with_capacity(0);
        fill_and_drain(&mut tight);
    }

    #[test]
    fn test_other_implementations_satisfy_list() {
        let mut b = Bounded { items: Vec::new(), limit: 3 };
        fill_and_drain(&mut b);
        assert!(List::is_empty(&b));
    }

    #[test]
    #[should_panic(expected = "bounded list is full")]
    fn test_push_failures_are_not_swallowed() {
        let mut b = Bounded { items: Vec::new(), limit: 1 };
        b.push("a");
        b.push("b");
    }

    #[test]
    fn test_trait_push_grows_a_full_sequence() {
        let mut s: GrowableSequence<i32> = GrowableSequence::with_capacity(1);
        List::push(&mut s, 1);
        List::push(&mut s, 2);
        assert_eq!(s.as_slice(), &[1, 2]);
        assert_eq!(s.capacity(), 3);
    }

    #[test]
    fn test_trait_objects_work() {
        let mut s: GrowableSequence<i32> = GrowableSequence::new();
        let list: &mut dyn List<i32> = &mut s;
        list.push(1);
        list.push(2);
        assert_eq!(list.len(), 2);
        assert_eq!(s.as_slice(), &[1, 2]);
    }

    #[derive(Debug, Clone)]
    enum Op {
        Push(i32),
        Insert(usize, i32),
        Set(usize, i32),
        Remove(usize),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            any::<i32>().prop_map(Op::Push),
            (0usize..12, any::<i32>()).prop_map(|(i, v)| Op::Insert(i, v)),
            (0usize..12, any::<i32>()).prop_map(|(i, v)| Op::Set(i, v)),
            (0usize..12).prop_map(Op::Remove),
        ]
    }

    proptest! {
        /// Every operation agrees with `Vec` on both results and contents,
        /// including which indices are rejected.
        #[test]
        fn prop_matches_vec_model(ops in prop::collection::vec(op(), 0..64)) {
            let mut s: GrowableSequence<i32> = GrowableSequence::with_capacity(0);
            let mut model: alloc::vec::Vec<i32> = alloc::vec::Vec::new();

            for op in ops {
                match op {
                    Op::Push(v) => {
                        let before = s.len();
                        List::push(&mut s, v);
                        model.push(v);
                        prop_assert_eq!(s.len(), before + 1);
                        prop_assert_eq!(s.get(s.len() - 1), Ok(&v));
                    }
                    Op::Insert(i, v) => {
                        let res = s.insert(i, v);
                        if i <= model.len() {
                            prop_assert!(res.is_ok());
                            model.insert(i, v);
                        } else {
                            prop_assert_eq!(res, Err(Error::InsertOutOfBounds { index: i, len: model.len() }));
                        }
                    }
                    Op::Set(i, v) => {
                        let res = s.set(i, v);
                        if i < model.len() {
                            prop_assert_eq!(res, Ok(core::mem::replace(&mut model[i], v)));
                            prop_assert_eq!(s.get(i), Ok(&v));
                        } else {
                            prop_assert!(res.is_err());
                        }
                    }
                    Op::Remove(i) => {
                        let res = s.remove(i);
                        if i < model.len() {
                            prop_assert_eq!(res, Ok(model.remove(i)));
                        } else {
                            prop_assert_eq!(res, Err(Error::OutOfBounds { index: i, len: model.len() }));
                        }
                    }
                }
                prop_assert_eq!(s.as_slice(), &model[..]);
                prop_assert!(s.len() <= s.capacity());
            }
        }
    }
}
