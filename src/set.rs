//! [`PolySet`] is the dual-encoding set value type: it holds either a
//! compact sorted array of integers or a hash-indexed set of byte strings,
//! switching transparently from the former to the latter as needed.
//!
//! **Unlike** a generic hash set, `PolySet` is not parameterized over its
//! element type — a set's members are always byte strings — only over the
//! `BuildHasher` its `HASH` encoding uses, mirroring how a generic set type
//! would be parameterized over a hasher.

pub mod iter;

use core::hash::BuildHasher;

#[cfg(feature = "std")]
use std::collections::hash_map::RandomState;

use crate::config::Config;
use crate::elem::Elem;
use crate::element::{parse_canonical_i64, Element};
use crate::store::{HashIndex, IntArray};

use self::iter::{BorrowingIter, MaterializingIter};

/// Which of the two backing representations a [`PolySet`] currently uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// A compact sorted array of `i64`s.
    Int,
    /// A hash-indexed set of byte strings.
    Hash,
}

#[derive(Debug, Clone)]
enum Repr<S> {
    Int(IntArray),
    Hash(HashIndex<S>),
}

/// The polymorphic set value type (§4.1).
///
/// # Invariants
///
/// - Members are unique under byte-equality.
/// - While [`Encoding::Int`], every member is integer-valued and the
///   cardinality never exceeds the configured `int_max`.
/// - Encoding is monotone: once [`Encoding::Hash`], a `PolySet` never goes
///   back to `Int`.
/// - A `PolySet` is never constructed empty; callers that drain a set to
///   zero members are expected to drop the binding, not keep an empty
///   `PolySet` around (§3, invariant 6).
#[cfg(feature = "std")]
pub struct PolySet<S = RandomState> {
    config: Config,
    repr: Repr<S>,
}
#[cfg(not(feature = "std"))]
pub struct PolySet<S> {
    config: Config,
    repr: Repr<S>,
}

impl<S: BuildHasher + Default> PolySet<S> {
    /// A fresh, empty, `Int`-encoded set.
    ///
    /// Not exposed publicly: invariant 6 (a `PolySet` is never observably
    /// empty) is a contract on the *public* API, enforced by callers that
    /// bind/unbind in the key-space. Internal scratch sets built by the
    /// set-algebra and sampling engines legitimately pass through an empty
    /// state before the caller decides whether to bind or discard them.
    pub(crate) fn empty(config: Config) -> Self {
        Self {
            config,
            repr: Repr::Int(IntArray::new()),
        }
    }

    /// Create a fresh set containing only `value`. Its initial encoding is
    /// `Int` iff `value` is integer-valued, else `Hash`.
    pub fn new(config: Config, value: Element) -> Self {
        let repr = match value.as_i64() {
            Some(i) => Repr::Int(IntArray::with_first(i)),
            None => {
                let mut hash = HashIndex::with_capacity_and_hasher(1, S::default());
                hash.add(value.into_bytes());
                Repr::Hash(hash)
            }
        };
        Self { config, repr }
    }

    /// Insert `value`, promoting from `Int` to `Hash` if required. Returns
    /// `true` if `value` was newly inserted.
    pub fn add(&mut self, value: Element) -> bool {
        match &mut self.repr {
            Repr::Int(array) => match value.as_i64() {
                Some(i) => {
                    let inserted = array.add(i);
                    if inserted && array.len() > self.config.int_max {
                        self.promote();
                    }
                    inserted
                }
                None => {
                    self.promote();
                    self.insert_hash_only(value)
                }
            },
            Repr::Hash(_) => self.insert_hash_only(value),
        }
    }

    fn insert_hash_only(&mut self, value: Element) -> bool {
        match &mut self.repr {
            Repr::Hash(hash) => hash.add(value.into_bytes()),
            Repr::Int(_) => unreachable!("caller promotes before inserting a non-integer"),
        }
    }

    /// Rebuild as `Hash`, re-inserting every integer as its canonical
    /// decimal form. Idempotent; never reverses.
    pub fn convert_to_hash(&mut self) {
        self.promote();
    }

    fn promote(&mut self) {
        let Repr::Int(array) = &self.repr else {
            return;
        };
        let mut hash = HashIndex::with_capacity_and_hasher(array.len(), S::default());
        for &value in array.iter() {
            hash.add(Element::from_i64(value).into_bytes());
        }
        self.repr = Repr::Hash(hash);
    }
}

impl<S: BuildHasher> PolySet<S> {
    /// Number of members.
    pub fn size(&self) -> usize {
        match &self.repr {
            Repr::Int(array) => array.len(),
            Repr::Hash(hash) => hash.len(),
        }
    }

    /// Which encoding this set currently uses.
    pub fn encoding(&self) -> Encoding {
        match &self.repr {
            Repr::Int(_) => Encoding::Int,
            Repr::Hash(_) => Encoding::Hash,
        }
    }

    /// Remove `value`. Returns `true` if it was present. Never demotes.
    pub fn remove(&mut self, value: &[u8]) -> bool {
        match &mut self.repr {
            Repr::Int(array) => match parse_canonical_i64(value) {
                Some(i) => array.remove(i),
                None => false,
            },
            Repr::Hash(hash) => hash.remove(value),
        }
    }

    /// `true` iff an equal member is present.
    ///
    /// On `Int`, a non-integer-valued `value` returns `false` without
    /// scanning the array (§4.1).
    pub fn contains(&self, value: &[u8]) -> bool {
        match &self.repr {
            Repr::Int(array) => match parse_canonical_i64(value) {
                Some(i) => array.contains(i),
                None => false,
            },
            Repr::Hash(hash) => hash.contains(value),
        }
    }

    /// Uniformly sample one member.
    ///
    /// # Panics
    ///
    /// Panics if the set is empty. Per invariant 6 a `PolySet` is never
    /// observably empty to begin with; this only guards internal misuse
    /// (e.g. of a scratch set mid-algorithm).
    pub fn random_one(&self) -> Element {
        match &self.repr {
            Repr::Int(array) => Element::from_i64(array.random()),
            Repr::Hash(hash) => Element::new(hash.random_key()),
        }
    }

    /// A borrowing, allocation-free iterator over the set's members.
    pub fn iter(&self) -> BorrowingIter<'_, S> {
        match &self.repr {
            Repr::Int(array) => BorrowingIter::from_int(array.iter()),
            Repr::Hash(hash) => BorrowingIter::from_hash(hash.iter()),
        }
    }

    /// An iterator yielding owned byte strings, converting integers to
    /// their canonical decimal form.
    pub fn iter_materialized(&self) -> MaterializingIter<'_, S> {
        MaterializingIter::new(self.iter())
    }

    pub(crate) fn int_array(&self) -> Option<&IntArray> {
        match &self.repr {
            Repr::Int(array) => Some(array),
            Repr::Hash(_) => None,
        }
    }

    /// Remove an already-tagged element, taking the `Int` fast path when
    /// this set is still `Int`-encoded and the element is `Elem::Int`.
    pub(crate) fn remove_elem(&mut self, elem: Elem<'_>) -> bool {
        match (elem, &mut self.repr) {
            (Elem::Int(i), Repr::Int(array)) => array.remove(i),
            (Elem::Int(i), Repr::Hash(_)) => {
                let bytes = Element::from_i64(i).into_bytes();
                self.remove(&bytes)
            }
            (Elem::Bytes(b), _) => self.remove(b),
        }
    }
}

impl<S: BuildHasher> PolySet<S> {
    /// Sample and remove one member uniformly at random, returning it.
    ///
    /// Internal helper for the sampling engine; kept here because only
    /// `PolySet` knows how to translate an index pick on `Int` into a
    /// removal without a second lookup.
    pub(crate) fn pop_one(&mut self) -> Element {
        match &mut self.repr {
            Repr::Int(array) => {
                let index = fastrand::usize(..array.len());
                Element::from_i64(array.remove_at(index))
            }
            Repr::Hash(hash) => Element::new(hash.remove_random()),
        }
    }
}

impl<'a, S: BuildHasher> IntoIterator for &'a PolySet<S> {
    type Item = Elem<'a>;
    type IntoIter = BorrowingIter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<S: BuildHasher> core::fmt::Debug for PolySet<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_set()
            .entries(self.iter_materialized().map(|b| {
                core::str::from_utf8(&b)
                    .map(alloc::string::ToString::to_string)
                    .unwrap_or_else(|_| alloc::format!("{b:?}"))
            }))
            .finish()
    }
}
