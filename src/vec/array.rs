// Invariants for the default (safe) backend:
// - `buf` is a `Vec<T>` used only as a raw buffer: `buf.len()` is the logical
//   length and `buf[..]` are the logical elements, in order.
// - `cap` is the logical capacity: `buf.len() <= cap <= buf.capacity()`.
// - `buf` is allocated with `Vec::with_capacity(cap)` and only pushed to while
//   `buf.len() < cap`, so it never reallocates on its own. Growth always goes
//   through `reallocate`.
// - Removed elements are moved out of `buf`; nothing is left behind in the
//   spare room.

mod insert;
mod into_vec;
mod new;
mod reallocate;
mod remove;
mod slice;
mod truncate;

#[cfg(test)]
mod tests {
    // Imports
    use crate::GrowableSequence;
    use alloc::{rc::Rc, string::String};

    #[test]
    fn test_buffer_is_allocated_up_front() {
        let s: GrowableSequence<String> = GrowableSequence::with_capacity(3);
        assert!(s.buf.is_empty());
        assert_eq!(s.cap, 3);
        assert!(s.buf.capacity() >= 3);
    }

    #[test]
    fn test_buffer_never_outgrows_tracked_capacity() {
        let mut s: GrowableSequence<u8> = GrowableSequence::with_capacity(0);
        for i in 0..50 {
            s.push(i);
            assert!(s.buf.len() <= s.cap);
            assert!(s.cap <= s.buf.capacity());
        }
        // 0 -> 1 -> 3 -> 7 -> 15 -> 31 -> 63
        assert_eq!(s.capacity(), 63);
    }

    #[test]
    fn test_reallocate_moves_without_cloning() {
        let shared = Rc::new(());
        let mut s = GrowableSequence::with_capacity(1);
        s.push(Rc::clone(&shared));
        s.push(Rc::clone(&shared));
        s.push(Rc::clone(&shared));
        assert_eq!(s.capacity(), 3);
        assert_eq!(Rc::strong_count(&shared), 4);
    }

    #[test]
    fn test_removed_elements_are_released() {
        let shared = Rc::new(());
        let mut s = GrowableSequence::with_capacity(4);
        for _ in 0..3 {
            s.push(Rc::clone(&shared));
        }
        drop(s.remove(0).unwrap());
        assert_eq!(Rc::strong_count(&shared), 3);

        s.truncate(1);
        assert_eq!(Rc::strong_count(&shared), 2);
        assert_eq!(s.capacity(), 4);

        s.clear();
        assert_eq!(Rc::strong_count(&shared), 1);
    }
}
