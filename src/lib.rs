// This file is part of growable-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `growable-seq`
//!
//! A `no_std` (+ `alloc`), heap-backed growable sequence with checked
//! positional access and a set of non-mutating structural operations,
//! **with no `unsafe` by default**.
//!
//! The core type, [`GrowableSequence<T>`], stores its elements in a single
//! backing buffer and tracks a logical length `len <= capacity`. It offers:
//!
//! - `O(1)` checked access: [`get`](GrowableSequence::get),
//!   [`get_mut`](GrowableSequence::get_mut), [`set`](GrowableSequence::set);
//! - amortized `O(1)` [`push`](GrowableSequence::push);
//! - `O(len)` [`insert`](GrowableSequence::insert) and
//!   [`remove`](GrowableSequence::remove) at any position;
//! - structural operations that return a **new** sequence and leave their
//!   inputs untouched: [`concat`](GrowableSequence::concat),
//!   [`insert_copy`](GrowableSequence::insert_copy),
//!   [`prefix`](GrowableSequence::prefix), [`suffix`](GrowableSequence::suffix),
//!   [`delete_range`](GrowableSequence::delete_range),
//!   [`extract_range`](GrowableSequence::extract_range).
//!
//! The positional contract itself is the [`List`] trait.
//!
//! ## Growth
//!
//! When an operation needs more room, the buffer is reallocated to
//! `max(required, 2 * capacity + 1)` slots and the existing elements are moved
//! over in order. Capacity never shrinks. [`GrowableSequence::new`] starts with
//! [`GrowableSequence::DEFAULT_CAPACITY`] (10) slots.
//!
//! ## Index rules and errors
//!
//! - `get`, `get_mut`, `set`, `remove`: `index < len`, otherwise
//!   [`Error::OutOfBounds`].
//! - `insert`, `insert_copy`, `prefix`, `suffix`: `index <= len`, otherwise
//!   [`Error::InsertOutOfBounds`].
//! - `delete_range`, `extract_range`: `start <= end <= len`, otherwise
//!   [`Error::InvalidRange`].
//!
//! Arguments are validated before anything is modified, so an `Err` leaves the
//! sequence unchanged. Slice-style indexing (`s[i]`, `s[a..b]`) panics on
//! out-of-bounds exactly like built-in slices.
//!
//! ## Backends and safety
//!
//! Two internal backends are selected by the `unsafe-maybe-uninit`
//! feature flag:
//!
//! - **Default backend (safe)**:
//!   - Storage is an `alloc::vec::Vec<T>` used as a raw buffer: the crate
//!     allocates it with exactly `capacity` slots and makes every growth
//!     decision itself, so the `Vec` never reallocates on its own.
//!   - The crate is `#![forbid(unsafe_code)]`.
//!   - Any element type works.
//!
//! - **`unsafe-maybe-uninit` backend**:
//!   - Storage is `Box<[core::mem::MaybeUninit<T>]>`.
//!   - A small amount of internal `unsafe` treats only the `[0..len)` prefix as
//!     initialized; elements are moved bit for bit on growth and shifts.
//!   - Any element type works.
//!
//! In both backends the **public API is fully safe** and identical, with no
//! bounds on `T` beyond `Clone` for the operations that copy elements.
//!
//! ## Features
//!
//! - `unsafe-maybe-uninit`: see above.
//! - `log`: emits a `trace`-level record (target `growable_seq`) through the
//!   [`log`](https://docs.rs/log) facade each time the buffer grows.
//!
//! ## Example
//!
//! ```rust
//! use growable_seq::GrowableSequence;
//!
//! let s: GrowableSequence<char> = "abcdef".chars().collect();
//! let middle = s.extract_range(1..4).unwrap();
//! let rest = s.delete_range(1..4).unwrap();
//! assert_eq!(middle.to_string(), "[b, c, d]");
//! assert_eq!(rest.to_string(), "[a, e, f]");
//!
//! // Putting the extracted part back restores the original.
//! assert_eq!(rest.insert_copy(1, &middle).unwrap(), s);
//! ```

#![cfg_attr(not(feature = "unsafe-maybe-uninit"), forbid(unsafe_code))]
#![cfg_attr(not(test), no_std)]

extern crate alloc;

// Modules
mod error;
mod index;
mod iter;
mod list;
mod vec;

// Public exports (crate API surface)
pub use error::Error;
pub use iter::IntoIter;
pub use list::List;
pub use vec::GrowableSequence;
