//! The key-space contract (KS, §6.2): how the command surface resolves a
//! name to a set, and a reference in-memory implementation good enough to
//! exercise every command in tests without a real server around it.

#[cfg(feature = "std")]
use std::collections::hash_map::RandomState;

use core::hash::BuildHasher;

use indexmap::IndexMap;

use crate::error::SetError;
use crate::set::PolySet;

/// How the command surface finds, creates, and retires set bindings.
///
/// A wrong-kind name — one that resolves to a value that isn't a set — is
/// reported by the lookup methods themselves, one layer above the set
/// algebra and sampling engines: neither of those ever has to know what a
/// "name" is, only what a `&PolySet`/`&mut PolySet` is.
pub trait KeySpace<S> {
    /// Resolve `name` for a read-only operation. `Ok(None)` means absent;
    /// `Err` means present but not a set.
    fn lookup_read(&self, name: &str) -> Result<Option<&PolySet<S>>, SetError>;

    /// Resolve `name` for a mutating operation. `Ok(None)` means absent;
    /// `Err` means present but not a set.
    fn lookup_write(&mut self, name: &str) -> Result<Option<&mut PolySet<S>>, SetError>;

    /// Whether any binding exists under `name`, of any kind. Unlike
    /// [`lookup_read`](Self::lookup_read), this never errors on a wrong-kind
    /// value — it is for callers that only care about presence, such as a
    /// store-mode command distinguishing "replaced" from "created" for its
    /// destination (§4.3), which must overwrite a non-set value there just
    /// as readily as a set one.
    fn contains(&self, name: &str) -> bool;

    /// Create a fresh binding. Callers only call this when
    /// [`lookup_write`](Self::lookup_write) returned `Ok(None)`.
    fn bind(&mut self, name: &str, set: PolySet<S>);

    /// Remove a binding entirely. Returns `true` if one was present.
    fn unbind(&mut self, name: &str) -> bool;

    /// Atomically overwrite an existing (or absent) binding — the
    /// store-mode finalization step of §4.3.
    fn replace(&mut self, name: &str, set: PolySet<S>);

    /// Record that `name`'s value changed in place, for collaborators
    /// (e.g. a persistence layer) that need to know without a full
    /// replace. A no-op is a valid implementation.
    fn mark_modified(&mut self, name: &str);
}

/// What a binding in an [`InMemoryKeySpace`] holds.
#[derive(Debug, Clone)]
pub enum Value<S> {
    /// A polymorphic set — the only kind this crate's commands operate on.
    Set(PolySet<S>),
    /// A stand-in for any other value kind a real key-space would hold,
    /// used to exercise the wrong-kind error path.
    Other,
}

/// A reference [`KeySpace`] backed by an `IndexMap`, sufficient to run the
/// command surface end to end in tests.
#[cfg(feature = "std")]
#[derive(Debug, Default)]
pub struct InMemoryKeySpace<S = RandomState> {
    bindings: IndexMap<alloc::boxed::Box<str>, Value<S>>,
}
#[cfg(not(feature = "std"))]
#[derive(Debug, Default)]
pub struct InMemoryKeySpace<S> {
    bindings: IndexMap<alloc::boxed::Box<str>, Value<S>>,
}

impl<S> InMemoryKeySpace<S> {
    /// Insert a non-set value under `name`, for tests that need to
    /// provoke [`SetError::WrongKind`].
    pub fn bind_other(&mut self, name: &str) {
        self.bindings.insert(name.into(), Value::Other);
    }
}

impl<S: BuildHasher> KeySpace<S> for InMemoryKeySpace<S> {
    fn lookup_read(&self, name: &str) -> Result<Option<&PolySet<S>>, SetError> {
        match self.bindings.get(name) {
            Some(Value::Set(set)) => Ok(Some(set)),
            Some(Value::Other) => Err(SetError::wrong_kind(name)),
            None => Ok(None),
        }
    }

    fn lookup_write(&mut self, name: &str) -> Result<Option<&mut PolySet<S>>, SetError> {
        match self.bindings.get_mut(name) {
            Some(Value::Set(set)) => Ok(Some(set)),
            Some(Value::Other) => Err(SetError::wrong_kind(name)),
            None => Ok(None),
        }
    }

    fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    fn bind(&mut self, name: &str, set: PolySet<S>) {
        self.bindings.insert(name.into(), Value::Set(set));
    }

    fn unbind(&mut self, name: &str) -> bool {
        self.bindings.swap_remove(name).is_some()
    }

    fn replace(&mut self, name: &str, set: PolySet<S>) {
        self.bindings.insert(name.into(), Value::Set(set));
    }

    fn mark_modified(&mut self, _name: &str) {}
}
