//! The sampling engine (SE, §4.4): `POP-COUNT` (destructive) and
//! `RAND-COUNT` (non-destructive), each choosing between two strategies by
//! the ratio of the requested count to the set's cardinality.
//!
//! Both primitives take an `emit` callback rather than returning a buffer:
//! the command surface passes a closure that forwards each element to the
//! caller's reply and, for `pop_count`, doubles as the per-element
//! propagation hook (§6.2) — this module never touches an event sink or a
//! key-space directly.

use core::hash::BuildHasher;

use crate::config::Config;
use crate::elem::Elem;
use crate::element::Element;
use crate::set::PolySet;

/// Remove `k` members of `set`, chosen uniformly without replacement,
/// calling `emit` once per removed element.
///
/// `k` is clamped to `set.size()`; a caller-side negative count is a range
/// error to be rejected before this is called, not a concern of the engine
/// itself. If `k` meets or exceeds cardinality, `set` is left empty — the
/// caller (holding the binding) is expected to unbind it.
pub fn pop_count<S: BuildHasher + Default>(
    set: &mut PolySet<S>,
    k: usize,
    config: Config,
    mut emit: impl FnMut(Elem<'_>),
) {
    let n = set.size();
    if k == 0 {
        return;
    }
    if k >= n {
        for elem in set.iter() {
            emit(elem);
        }
        *set = PolySet::empty(config);
        return;
    }

    let remainder = n - k;
    if (config.pop_strategy_ratio as usize).saturating_mul(remainder) > k {
        pop_pick_and_remove(set, k, &mut emit);
    } else {
        pop_keep_survivors(set, remainder, config, &mut emit);
    }
}

/// Strategy A: sample-and-remove `k` times. Cheap when few elements are
/// being removed relative to what stays behind.
fn pop_pick_and_remove<S: BuildHasher>(
    set: &mut PolySet<S>,
    k: usize,
    emit: &mut impl FnMut(Elem<'_>),
) {
    for _ in 0..k {
        let picked = set.pop_one();
        emit(picked.as_elem());
    }
}

/// Strategy B: pick the `remainder` elements that will *survive*, removing
/// each from `set` as it's picked. Whatever is left in `set` afterwards —
/// exactly the `k` elements never chosen as a survivor — is the emission;
/// the survivors become the set's new contents. This is what avoids
/// spending `O(k)` unique picks against a set that strategy A would have
/// whittled down to mostly-already-removed members.
fn pop_keep_survivors<S: BuildHasher + Default>(
    set: &mut PolySet<S>,
    remainder: usize,
    config: Config,
    emit: &mut impl FnMut(Elem<'_>),
) {
    let mut survivors = PolySet::empty(config);
    for _ in 0..remainder {
        let picked = set.pop_one();
        survivors.add(picked);
    }
    for elem in set.iter() {
        emit(elem);
    }
    *set = survivors;
}

/// Sample `k` members of `set` without mutating it, calling `emit` once per
/// drawn element.
///
/// `unique = false` draws `k` independent samples with replacement
/// (duplicates allowed); `unique = true` draws `k` pairwise-distinct
/// members, or the whole set if `k` meets or exceeds its cardinality.
pub fn rand_count<S: BuildHasher + Default>(
    set: &PolySet<S>,
    k: usize,
    unique: bool,
    config: Config,
    mut emit: impl FnMut(Elem<'_>),
) {
    if k == 0 {
        return;
    }
    if !unique {
        for _ in 0..k {
            let picked = set.random_one();
            emit(picked.as_elem());
        }
        return;
    }

    let n = set.size();
    if k >= n {
        for elem in set.iter() {
            emit(elem);
        }
        return;
    }

    if (config.rand_strategy_ratio as usize).saturating_mul(k) > n {
        rand_down_sample(set, k, config, &mut emit);
    } else {
        rand_up_sample(set, k, config, &mut emit);
    }
}

/// Strategy C: copy the whole set into a scratch set, then remove down to
/// exactly `k` members. Cheap when `k` is a large fraction of `|S|`, since
/// up-sampling would need many draws to avoid re-hitting already-picked
/// members.
fn rand_down_sample<S: BuildHasher + Default>(
    set: &PolySet<S>,
    k: usize,
    config: Config,
    emit: &mut impl FnMut(Elem<'_>),
) {
    let mut scratch = PolySet::empty(config);
    for elem in set.iter() {
        scratch.add(Element::from(elem));
    }
    let to_drop = scratch.size() - k;
    for _ in 0..to_drop {
        scratch.pop_one();
    }
    for elem in scratch.iter() {
        emit(elem);
    }
}

/// Strategy D: repeatedly draw from `set` (with replacement) into a scratch
/// set that only grows on a first sighting, until `k` distinct members
/// have accumulated. Cheap when `k` is a small fraction of `|S|`, since
/// re-hits are rare.
fn rand_up_sample<S: BuildHasher + Default>(
    set: &PolySet<S>,
    k: usize,
    config: Config,
    emit: &mut impl FnMut(Elem<'_>),
) {
    let mut scratch = PolySet::empty(config);
    while scratch.size() < k {
        let picked = set.random_one();
        scratch.add(picked);
    }
    for elem in scratch.iter() {
        emit(elem);
    }
}
