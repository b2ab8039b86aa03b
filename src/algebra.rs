//! The set algebra engine (SAE, §4.3): union, intersection, and difference
//! over already-resolved inputs, with input-adaptive algorithm selection.
//!
//! Resolving names to `&PolySet` (and turning a wrong-kind name into an
//! error) is the command surface's job, not this module's — SAE only ever
//! sees sets or absences, so it can be tested without a key-space double
//! and so a resolution failure aborts a command before SAE does any work.

use alloc::vec::Vec;
use core::cmp::Reverse;
use core::hash::BuildHasher;

use crate::config::Config;
use crate::elem::Elem;
use crate::element::Element;
use crate::set::PolySet;

/// `A ∪ B ∪ … `. Missing inputs contribute nothing.
///
/// Builds the result the way §4.3 describes regardless of whether the
/// caller wants a reply stream or a store: start empty and `Int`-encoded
/// (so an all-integer union stays compact), then insert every element of
/// every input.
pub fn union<S: BuildHasher + Default>(inputs: &[Option<&PolySet<S>>], config: Config) -> PolySet<S> {
    let mut result = PolySet::empty(config);
    for set in inputs.iter().filter_map(|input| *input) {
        for elem in set.iter() {
            result.add(Element::from(elem));
        }
    }
    result
}

/// `A ∩ B ∩ …`. Empty if any input is missing/empty, or if there are no
/// inputs at all.
pub fn intersection<S: BuildHasher + Default>(
    inputs: &[Option<&PolySet<S>>],
    config: Config,
) -> PolySet<S> {
    let mut result = PolySet::empty(config);

    let Some(resolved): Option<Vec<&PolySet<S>>> = inputs.iter().copied().collect() else {
        return result;
    };
    if resolved.is_empty() {
        return result;
    }

    // Iterate the smallest input; probing membership in the others is the
    // whole cost of this algorithm, so shrinking the outer loop dominates.
    let mut order: Vec<usize> = (0..resolved.len()).collect();
    order.sort_by_key(|&i| resolved[i].size());
    let smallest = resolved[order[0]];
    let others: Vec<&PolySet<S>> = order[1..].iter().map(|&i| resolved[i]).collect();

    for elem in smallest.iter() {
        let present_everywhere = others.iter().all(|&other| {
            // A literal duplicate of `smallest` elsewhere in the input list
            // trivially contains every candidate; skip the redundant probe.
            core::ptr::eq(other, smallest) || contains_elem(other, elem)
        });
        if present_everywhere {
            result.add(Element::from(elem));
        }
    }
    result
}

/// `K[0] \ (K[1] ∪ K[2] ∪ …)`. A missing `K[0]` makes the result empty; a
/// missing later input simply contributes nothing to subtract.
pub fn difference<S: BuildHasher + Default>(
    inputs: &[Option<&PolySet<S>>],
    config: Config,
) -> PolySet<S> {
    let mut result = PolySet::empty(config);

    let Some(Some(first)) = inputs.first().copied() else {
        return result;
    };

    let subtrahends: Vec<&PolySet<S>> = inputs[1..].iter().filter_map(|input| *input).collect();
    if subtrahends.is_empty() {
        for elem in first.iter() {
            result.add(Element::from(elem));
        }
        return result;
    }

    // Algo-1 per-element-probe cost, with the 0.5x credit for short-circuit
    // hits folded in as `cost1 <= 2 * cost2` to stay in integer arithmetic.
    let cost1 = first.size().saturating_mul(subtrahends.len());
    let cost2: usize = subtrahends.iter().map(|s| s.size()).sum();

    if cost1 <= cost2.saturating_mul(2) {
        probe_difference(first, &subtrahends, &mut result);
    } else {
        accumulate_difference(first, &subtrahends, &mut result);
    }
    result
}

/// Algo-1: iterate `first`, short-circuiting on the first subtrahend that
/// contains the candidate. Subtrahends are probed in decreasing-cardinality
/// order so common elements are eliminated sooner.
fn probe_difference<S: BuildHasher>(
    first: &PolySet<S>,
    subtrahends: &[&PolySet<S>],
    result: &mut PolySet<S>,
) {
    let mut ordered: Vec<&PolySet<S>> = subtrahends.to_vec();
    if ordered.len() > 1 {
        ordered.sort_by_key(|s| Reverse(s.size()));
    }

    'candidates: for elem in first.iter() {
        for &other in &ordered {
            if contains_elem(other, elem) {
                continue 'candidates;
            }
        }
        result.add(Element::from(elem));
    }
}

/// Algo-2: seed the result with all of `first`, then remove each
/// subtrahend's elements, exiting as soon as the result empties out.
fn accumulate_difference<S: BuildHasher>(
    first: &PolySet<S>,
    subtrahends: &[&PolySet<S>],
    result: &mut PolySet<S>,
) {
    for elem in first.iter() {
        result.add(Element::from(elem));
    }
    for &other in subtrahends {
        for elem in other.iter() {
            result.remove_elem(elem);
        }
        if result.size() == 0 {
            break;
        }
    }
}

/// Membership test used by both the intersection fast path and difference's
/// Algo-1: when `elem` is an integer and `set` is still `Int`-encoded, this
/// never allocates a byte-string form of `elem`.
fn contains_elem<S: BuildHasher>(set: &PolySet<S>, elem: Elem<'_>) -> bool {
    match elem {
        Elem::Int(i) => match set.int_array() {
            Some(array) => array.contains(i),
            None => set.contains(Element::from_i64(i).as_bytes()),
        },
        Elem::Bytes(bytes) => set.contains(bytes),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::RandomState;

    fn set(values: &[&str]) -> PolySet<RandomState> {
        let mut iter = values.iter();
        let mut s = PolySet::new(Config::default(), Element::from(*iter.next().unwrap()));
        for v in iter {
            s.add(Element::from(*v));
        }
        s
    }

    fn members(set: &PolySet<RandomState>) -> alloc::vec::Vec<alloc::boxed::Box<[u8]>> {
        let mut v: alloc::vec::Vec<_> = set.iter_materialized().collect();
        v.sort();
        v
    }

    #[test]
    fn scenario_s3() {
        let a = set(&["1", "2", "3"]);
        let b = set(&["2", "3", "4"]);
        let inputs = [Some(&a), Some(&b)];

        assert_eq!(
            members(&intersection(&inputs, Config::default())),
            alloc::vec![Box::from(b"2".as_slice()), Box::from(b"3".as_slice())]
        );
        assert_eq!(
            members(&union(&inputs, Config::default())),
            alloc::vec![
                Box::from(b"1".as_slice()),
                Box::from(b"2".as_slice()),
                Box::from(b"3".as_slice()),
                Box::from(b"4".as_slice())
            ]
        );
        assert_eq!(
            members(&difference(&inputs, Config::default())),
            alloc::vec![Box::from(b"1".as_slice())]
        );
        let inputs_rev = [Some(&b), Some(&a)];
        assert_eq!(
            members(&difference(&inputs_rev, Config::default())),
            alloc::vec![Box::from(b"4".as_slice())]
        );
    }

    #[test]
    fn difference_with_one_input_is_unchanged() {
        let a = set(&["1", "2", "3"]);
        let inputs = [Some(&a)];
        assert_eq!(members(&difference(&inputs, Config::default())), members(&a));
    }

    #[test]
    fn missing_first_input_makes_difference_empty() {
        let b = set(&["1"]);
        let inputs: [Option<&PolySet<RandomState>>; 2] = [None, Some(&b)];
        assert_eq!(difference(&inputs, Config::default()).size(), 0);
    }

    #[test]
    fn missing_input_makes_intersection_empty() {
        let a = set(&["1", "2"]);
        let inputs: [Option<&PolySet<RandomState>>; 2] = [Some(&a), None];
        assert_eq!(intersection(&inputs, Config::default()).size(), 0);
    }

    #[test]
    fn union_and_intersection_are_commutative_as_multisets() {
        let a = set(&["1", "2", "3"]);
        let b = set(&["2", "3", "4"]);
        assert_eq!(
            members(&union(&[Some(&a), Some(&b)], Config::default())),
            members(&union(&[Some(&b), Some(&a)], Config::default()))
        );
        assert_eq!(
            members(&intersection(&[Some(&a), Some(&b)], Config::default())),
            members(&intersection(&[Some(&b), Some(&a)], Config::default()))
        );
    }

    #[test]
    fn inclusion_exclusion_holds() {
        let a = set(&["1", "2", "3", "4"]);
        let b = set(&["3", "4", "5", "6"]);
        let union_size = union(&[Some(&a), Some(&b)], Config::default()).size();
        let inter_size = intersection(&[Some(&a), Some(&b)], Config::default()).size();
        assert_eq!(union_size + inter_size, a.size() + b.size());
    }
}
