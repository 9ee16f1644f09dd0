// This file is part of growable-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::GrowableSequence;

/// Capacity to grow to when `required` slots are needed but only `capacity` exist.
///
/// Doubling plus one keeps pushes amortized `O(1)` and still makes progress from a
/// capacity of zero.
#[inline]
pub(crate) const fn grown_capacity(capacity: usize, required: usize) -> usize {
    let doubled = capacity.saturating_mul(2).saturating_add(1);
    if required > doubled {
        required
    } else {
        doubled
    }
}

impl<T> GrowableSequence<T> {
    /// Ensures the backing buffer has at least `required` slots.
    ///
    /// Existing elements keep their positions; nothing is reallocated when the
    /// buffer is already large enough.
    #[inline]
    pub(crate) fn grow_for(&mut self, required: usize) {
        let capacity = self.capacity();
        if required <= capacity {
            return;
        }
        let new_capacity = grown_capacity(capacity, required);

        #[cfg(feature = "log")]
        log::trace!(
            target: "growable_seq",
            "growing storage from {capacity} to {new_capacity} slots (len {})",
            self.len()
        );

        self.reallocate(new_capacity);
    }
}
