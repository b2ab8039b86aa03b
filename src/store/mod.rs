//! The two backing representations a [`PolySet`](crate::PolySet) switches
//! between.
//!
//! Both types are internal: §6.2 treats the integer-array store and the
//! hash-indexed store as external collaborators with a fixed contract, and
//! these are this crate's concrete instances of that contract. They are not
//! generic over element type — a `PolySet` always stores byte strings (or,
//! in `INT` encoding, the `i64` values those byte strings denote) — so there
//! is no benefit to exposing them as public traits with only one
//! implementation each.

mod hash_index;
mod int_array;

pub(crate) use hash_index::HashIndex;
pub(crate) use int_array::IntArray;
