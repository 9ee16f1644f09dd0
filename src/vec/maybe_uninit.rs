// Invariants for the `unsafe-maybe-uninit` backend:
// - `0 <= len <= buf.len()` always holds.
// - Elements in `buf[..len]` are initialized `T` values.
// - Elements in `buf[len..]` are logically uninitialized and must never be
//   read as `T`.
// - Each initialized element is owned exactly once: shifting and reallocation
//   move bits, they never duplicate or drop them.
// - All public methods maintain these invariants.

mod drop;
mod insert;
mod into_vec;
mod new;
mod reallocate;
mod remove;
mod slice;
mod truncate;
