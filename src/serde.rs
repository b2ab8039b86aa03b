//! `serde` support for [`PolySet`], gated behind the `serde` feature.
//!
//! A `PolySet` serializes as a sequence of its materialized members —
//! useful to a persistence layer taking a snapshot, even though persistence
//! itself is out of this crate's scope (§1). Encoding (`Int` vs `Hash`) is
//! not part of the wire format: it is re-derived on deserialize from the
//! members themselves, per the lifecycle rule in §3.

#![cfg_attr(docsrs, doc(cfg(feature = "serde")))]

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::hash::BuildHasher;

use serde::de::{Deserialize, Deserializer, Error as _};
use serde::ser::{Serialize, Serializer};

use crate::config::Config;
use crate::element::Element;
use crate::set::PolySet;

impl<S: BuildHasher> Serialize for PolySet<S> {
    fn serialize<T>(&self, serializer: T) -> Result<T::Ok, T::Error>
    where
        T: Serializer,
    {
        serializer.collect_seq(self.iter_materialized())
    }
}

impl<'de, S: BuildHasher + Default> Deserialize<'de> for PolySet<S> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let members: Vec<Box<[u8]>> = Deserialize::deserialize(deserializer)?;
        let mut members = members.into_iter();
        let first = members
            .next()
            .ok_or_else(|| D::Error::custom("a PolySet must have at least one member"))?;
        let mut set = PolySet::new(Config::default(), Element::new(first));
        for bytes in members {
            set.add(Element::new(bytes));
        }
        Ok(set)
    }
}
