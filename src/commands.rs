//! The command surface (CS, §6.1): one method per command, each validating
//! and resolving all of its inputs before making any mutation, so a
//! rejected command leaves the key-space, event sink, and propagation sink
//! untouched (the "commit at end" discipline of §7).
//!
//! `SCAN` is intentionally absent — the [`KeySpace`] contract exposes no
//! cursor iteration, and spec.md treats it as external.

use alloc::vec::Vec;
use core::hash::BuildHasher;
use core::marker::PhantomData;

use crate::algebra;
use crate::config::Config;
use crate::element::Element;
use crate::error::SetError;
use crate::events::{EventKind, EventSink, PropagatedOp, PropagationSink};
use crate::keyspace::KeySpace;
use crate::sampling;
use crate::set::PolySet;

/// Every set command, parameterized over its three collaborators: a
/// [`KeySpace`] to resolve names, an [`EventSink`] for bookkeeping
/// notifications, and a [`PropagationSink`] for replicating destructive
/// sampling.
pub struct Commands<'a, S, K, E, P> {
    keyspace: &'a mut K,
    events: &'a mut E,
    propagation: &'a mut P,
    config: Config,
    _hasher: PhantomData<fn() -> S>,
}

impl<'a, S, K, E, P> Commands<'a, S, K, E, P>
where
    S: BuildHasher + Default,
    K: KeySpace<S>,
    E: EventSink,
    P: PropagationSink,
{
    pub fn new(keyspace: &'a mut K, events: &'a mut E, propagation: &'a mut P, config: Config) -> Self {
        Self {
            keyspace,
            events,
            propagation,
            config,
            _hasher: PhantomData,
        }
    }

    /// `ADD(name, v1, …, vm)`. Creates the binding if absent.
    pub fn add(&mut self, name: &str, values: impl IntoIterator<Item = Element>) -> Result<usize, SetError> {
        let mut values = values.into_iter();
        match self.keyspace.lookup_write(name)? {
            Some(set) => {
                let mut inserted = 0;
                for v in values {
                    if set.add(v) {
                        inserted += 1;
                    }
                }
                if inserted > 0 {
                    self.keyspace.mark_modified(name);
                    self.events.notify(EventKind::Modified, name);
                }
                Ok(inserted)
            }
            None => {
                let Some(first) = values.next() else {
                    return Ok(0);
                };
                let mut set = PolySet::new(self.config, first);
                let mut inserted = 1;
                for v in values {
                    if set.add(v) {
                        inserted += 1;
                    }
                }
                self.keyspace.bind(name, set);
                self.events.notify(EventKind::Created, name);
                Ok(inserted)
            }
        }
    }

    /// `REMOVE(name, v1, …, vm)`. Deletes the binding if it becomes empty.
    pub fn remove<'v>(
        &mut self,
        name: &str,
        values: impl IntoIterator<Item = &'v [u8]>,
    ) -> Result<usize, SetError> {
        let Some(set) = self.keyspace.lookup_write(name)? else {
            return Ok(0);
        };
        let mut removed = 0;
        for v in values {
            if set.remove(v) {
                removed += 1;
            }
        }
        if removed == 0 {
            return Ok(0);
        }
        if set.size() == 0 {
            self.keyspace.unbind(name);
            self.events.notify(EventKind::Deleted, name);
        } else {
            self.keyspace.mark_modified(name);
            self.events.notify(EventKind::Modified, name);
        }
        Ok(removed)
    }

    /// `MOVE(src, dst, v)`. A no-op (but still reports presence) when
    /// `src == dst`, since removing and re-adding the same element to the
    /// same set has no observable effect.
    pub fn move_member(&mut self, src: &str, dst: &str, value: &[u8]) -> Result<bool, SetError> {
        if src == dst {
            return Ok(self
                .keyspace
                .lookup_read(src)?
                .is_some_and(|set| set.contains(value)));
        }

        // Validate dst's kind before touching src, so a wrong-kind dst
        // aborts with no mutation at all.
        self.keyspace.lookup_read(dst)?;

        let Some(set) = self.keyspace.lookup_write(src)? else {
            return Ok(false);
        };
        if !set.remove(value) {
            return Ok(false);
        }
        if set.size() == 0 {
            self.keyspace.unbind(src);
            self.events.notify(EventKind::Deleted, src);
        } else {
            self.keyspace.mark_modified(src);
            self.events.notify(EventKind::Modified, src);
        }

        match self.keyspace.lookup_write(dst)? {
            Some(dst_set) => {
                dst_set.add(Element::new(value));
                self.keyspace.mark_modified(dst);
                self.events.notify(EventKind::Modified, dst);
            }
            None => {
                self.keyspace.bind(dst, PolySet::new(self.config, Element::new(value)));
                self.events.notify(EventKind::Created, dst);
            }
        }
        Ok(true)
    }

    /// `ISMEMBER(name, v)`.
    pub fn is_member(&self, name: &str, value: &[u8]) -> Result<bool, SetError> {
        Ok(self.keyspace.lookup_read(name)?.is_some_and(|set| set.contains(value)))
    }

    /// `CARDINALITY(name)`.
    pub fn cardinality(&self, name: &str) -> Result<usize, SetError> {
        Ok(self.keyspace.lookup_read(name)?.map_or(0, PolySet::size))
    }

    /// `POP(name, k)`. Destructive; unbinds `name` if emptied. A negative
    /// `k` is a range error.
    pub fn pop(&mut self, name: &str, k: i64) -> Result<Vec<Element>, SetError> {
        let k = non_negative_count(k, "POP count must not be negative")?;

        let Some(set) = self.keyspace.lookup_write(name)? else {
            return Ok(Vec::new());
        };

        let mut emitted = Vec::new();
        let propagation = &mut *self.propagation;
        sampling::pop_count(&mut *set, k, self.config, |elem| {
            propagation.propagate(PropagatedOp::Remove, name, core::slice::from_ref(&elem));
            emitted.push(Element::from(elem));
        });

        if emitted.is_empty() {
            return Ok(emitted);
        }
        if set.size() == 0 {
            self.keyspace.unbind(name);
            self.events.notify(EventKind::Deleted, name);
        } else {
            self.keyspace.mark_modified(name);
            self.events.notify(EventKind::Modified, name);
        }
        Ok(emitted)
    }

    /// `RAND(name, k)`. Non-destructive. A negative `k` requests `|k|`
    /// samples with replacement; a non-negative `k` requests `k`
    /// pairwise-distinct samples.
    pub fn rand(&self, name: &str, k: i64) -> Result<Vec<Element>, SetError> {
        let (count, unique) = if k < 0 {
            (k.unsigned_abs() as usize, false)
        } else {
            (k as usize, true)
        };

        let Some(set) = self.keyspace.lookup_read(name)? else {
            return Ok(Vec::new());
        };

        let mut emitted = Vec::new();
        sampling::rand_count(set, count, unique, self.config, |elem| {
            emitted.push(Element::from(elem));
        });
        Ok(emitted)
    }

    /// `UNION(name1, …)`.
    pub fn union(&self, names: &[&str]) -> Result<Vec<Element>, SetError> {
        let inputs = self.resolve_all(names)?;
        Ok(algebra::union(&inputs, self.config).iter().map(Element::from).collect())
    }

    /// `INTERSECTION(name1, …)`.
    pub fn intersection(&self, names: &[&str]) -> Result<Vec<Element>, SetError> {
        let inputs = self.resolve_all(names)?;
        Ok(algebra::intersection(&inputs, self.config)
            .iter()
            .map(Element::from)
            .collect())
    }

    /// `DIFFERENCE(name1, …)`.
    pub fn difference(&self, names: &[&str]) -> Result<Vec<Element>, SetError> {
        let inputs = self.resolve_all(names)?;
        Ok(algebra::difference(&inputs, self.config)
            .iter()
            .map(Element::from)
            .collect())
    }

    /// `UNIONSTORE(dst, name1, …)`.
    pub fn union_store(&mut self, dst: &str, names: &[&str]) -> Result<usize, SetError> {
        let inputs = self.resolve_all(names)?;
        let result = algebra::union(&inputs, self.config);
        self.finalize_store(dst, result)
    }

    /// `INTERSTORE(dst, name1, …)`.
    pub fn inter_store(&mut self, dst: &str, names: &[&str]) -> Result<usize, SetError> {
        let inputs = self.resolve_all(names)?;
        let result = algebra::intersection(&inputs, self.config);
        self.finalize_store(dst, result)
    }

    /// `DIFFSTORE(dst, name1, …)`.
    pub fn diff_store(&mut self, dst: &str, names: &[&str]) -> Result<usize, SetError> {
        let inputs = self.resolve_all(names)?;
        let result = algebra::difference(&inputs, self.config);
        self.finalize_store(dst, result)
    }

    /// `RAND-STORE(dst, name, k)`: equivalent to `RAND(name, k)` with
    /// sampling forced unique, materialized into `dst` (§9's resolution of
    /// the ambiguous `srandmemberstoreCommand` source behavior). A negative
    /// `k` is a range error here, unlike plain `RAND`, since there is no
    /// well-defined "with replacement, store mode" semantics to fall back
    /// on.
    pub fn rand_store(&mut self, dst: &str, name: &str, k: i64) -> Result<usize, SetError> {
        let k = non_negative_count(k, "RAND-STORE count must not be negative")?;

        let mut result = PolySet::empty(self.config);
        if let Some(set) = self.keyspace.lookup_read(name)? {
            sampling::rand_count(set, k, true, self.config, |elem| {
                result.add(Element::from(elem));
            });
        }
        self.finalize_store(dst, result)
    }

    fn resolve_all(&self, names: &[&str]) -> Result<Vec<Option<&PolySet<S>>>, SetError> {
        names.iter().map(|&name| self.keyspace.lookup_read(name)).collect()
    }

    /// Store-mode finalization (§4.3, invariant 14): an empty result
    /// unbinds `dst`; a non-empty result atomically replaces it.
    ///
    /// `dst` is overwritten unconditionally, even if it currently holds a
    /// non-set value: §4.3 says the destination "supplants any prior value
    /// under that name", and the source command never type-checks its own
    /// destination key, only its inputs. `KeySpace::contains` (rather than
    /// `lookup_read`) is used here so a wrong-kind `dst` doesn't abort the
    /// store with `SetError::WrongKind` — it's only consulted to pick the
    /// right event kind.
    fn finalize_store(&mut self, dst: &str, result: PolySet<S>) -> Result<usize, SetError> {
        let size = result.size();
        if size == 0 {
            if self.keyspace.unbind(dst) {
                self.events.notify(EventKind::Deleted, dst);
            }
        } else {
            let existed = self.keyspace.contains(dst);
            self.keyspace.replace(dst, result);
            self.events
                .notify(if existed { EventKind::Modified } else { EventKind::Created }, dst);
        }
        Ok(size)
    }
}

fn non_negative_count(k: i64, what: &'static str) -> Result<usize, SetError> {
    if k < 0 {
        Err(SetError::Range { what })
    } else {
        Ok(k as usize)
    }
}
