//! `polyset` implements the polymorphic set value type of an in-memory
//! key/value store: an unordered collection of byte-string members with
//! amortized O(1) membership, insertion, and deletion, multi-set algebra
//! (union/intersection/difference), and randomized sampling.
//!
//! ### Dual encoding
//!
//! A [`PolySet`] holds either a compact sorted array of `i64`s (`Int`
//! encoding) or a hash-indexed set of byte strings (`Hash` encoding). While
//! every member is integer-valued and cardinality stays under a configured
//! threshold, the set stays `Int`-encoded; inserting a non-integer element,
//! or exceeding the threshold, promotes it to `Hash`. Promotion is
//! one-directional: a `PolySet` never demotes back to `Int`.
//!
//! ### Layout
//!
//! - [`set`] — [`PolySet`], its [`Encoding`], and the uniform iterator
//!   ([`set::iter`]) that yields members as either borrowed bytes or an
//!   `i64`, agnostic of which encoding produced them.
//! - [`algebra`] — union, intersection, and difference over already-resolved
//!   sets, each choosing its algorithm from the input cardinalities.
//! - [`sampling`] — `POP-COUNT` (destructive) and `RAND-COUNT`
//!   (non-destructive) sampling, each switching strategy by the ratio of
//!   the requested count to the set's size.
//! - [`commands`] — the command surface ([`commands::Commands`]) wiring the
//!   above into one method per command, against the [`keyspace::KeySpace`],
//!   [`events::EventSink`], and [`events::PropagationSink`] collaborator
//!   traits.
//! - [`keyspace`], [`events`] — the collaborator traits plus reference
//!   implementations ([`keyspace::InMemoryKeySpace`],
//!   [`events::VecEventSink`], [`events::VecPropagationSink`]) good enough
//!   to run the command surface end to end without a real server around it.
//! - [`element`], [`elem`] — [`element::Element`], the owned byte-string
//!   member type with a cached integer-valuedness check, and [`elem::Elem`],
//!   the borrowed tagged form the uniform iterator yields.
//! - [`config`] — [`config::Config`], the process-wide tuning knobs
//!   (promotion threshold, sampling strategy ratios), passed explicitly
//!   rather than read from globals.
//! - [`error`] — [`error::SetError`], the error enum every command surface
//!   method returns.
//!
//! ### Feature Flags
//!
//! * `std` (default): enables [`std::collections::hash_map::RandomState`]
//!   as [`PolySet`]'s default hasher and the bundled [`keyspace::InMemoryKeySpace`].
//!   Without it, build with `default-features = false` and supply an
//!   explicit `BuildHasher` (e.g. from `twox-hash`) to every `PolySet` and
//!   `InMemoryKeySpace` type parameter.
//! * `serde`: [`serde::Serialize`]/[`serde::Deserialize`] for [`PolySet`],
//!   as a sequence of its materialized members.
//!
//! [feature flags]: https://doc.rust-lang.org/cargo/reference/manifest.html#the-features-section
//! [`serde::Serialize`]: ::serde::Serialize
//! [`serde::Deserialize`]: ::serde::Deserialize

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
#[cfg_attr(test, macro_use)]
extern crate std;

#[macro_use]
mod macros;

pub mod algebra;
pub mod commands;
pub mod config;
pub mod elem;
pub mod element;
pub mod error;
pub mod events;
pub mod keyspace;
pub mod sampling;
pub mod set;
mod store;

#[cfg(feature = "serde")]
mod serde;

pub use crate::commands::Commands;
pub use crate::config::Config;
pub use crate::elem::Elem;
pub use crate::element::Element;
pub use crate::error::SetError;
pub use crate::set::{Encoding, PolySet};
