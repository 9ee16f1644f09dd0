// This file is part of growable-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::GrowableSequence;

impl<T> Drop for GrowableSequence<T> {
    fn drop(&mut self) {
        self.truncate(0);
    }
}
