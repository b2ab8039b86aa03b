//! Property-based coverage of the invariants listed in spec.md §8, run over
//! randomized sequences of operations rather than the fixed literal
//! scenarios (which live as direct `#[test]`s alongside the modules they
//! exercise).

use std::collections::hash_map::RandomState;
use std::collections::HashSet;

use polyset::config::Config;
use polyset::element::Element;
use polyset::events::{VecEventSink, VecPropagationSink};
use polyset::keyspace::InMemoryKeySpace;
use polyset::{Commands, Encoding, PolySet};
use proptest::prelude::*;

fn element_value() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => (-1000_i64..1000).prop_map(|v| v.to_string()),
        1 => "[a-z]{1,8}".prop_map(|s| s),
    ]
}

fn set_with(values: &[String]) -> PolySet<RandomState> {
    let mut iter = values.iter();
    let mut set = PolySet::new(Config::default(), Element::from(iter.next().unwrap().as_str()));
    for v in iter {
        set.add(Element::from(v.as_str()));
    }
    set
}

proptest! {
    #[test]
    fn invariant_1_and_2_add_then_remove(values in prop::collection::vec(element_value(), 1..20)) {
        let mut set = set_with(&values[..1]);
        for v in &values {
            prop_assert!(set.add(Element::from(v.as_str())) || set.contains(v.as_bytes()));
            prop_assert!(set.contains(v.as_bytes()));
        }
        for v in &values {
            set.remove(v.as_bytes());
            prop_assert!(!set.contains(v.as_bytes()));
        }
    }

    #[test]
    fn invariant_3_iteration_yields_size_distinct_elements(values in prop::collection::vec(element_value(), 1..30)) {
        let set = set_with(&values);
        let materialized: Vec<_> = set.iter_materialized().collect();
        prop_assert_eq!(materialized.len(), set.size());
        let distinct: HashSet<_> = materialized.iter().cloned().collect();
        prop_assert_eq!(distinct.len(), set.size());
    }

    #[test]
    fn invariant_4_int_encoding_stays_integer_valued_and_bounded(values in prop::collection::vec((-1000_i64..1000), 1..50)) {
        let strings: Vec<String> = values.iter().map(i64::to_string).collect();
        let set = set_with(&strings);
        if set.encoding() == Encoding::Int {
            prop_assert!(set.size() <= Config::default().int_max);
            for elem in set.iter_materialized() {
                prop_assert!(std::str::from_utf8(&elem).unwrap().parse::<i64>().is_ok());
            }
        }
    }

    #[test]
    fn invariant_5_non_integer_insert_promotes(ints in prop::collection::vec((-100_i64..100), 1..10), word in "[a-z]{1,8}") {
        let strings: Vec<String> = ints.iter().map(i64::to_string).collect();
        let mut set = set_with(&strings);
        prop_assume!(set.encoding() == Encoding::Int);
        set.add(Element::from(word.as_str()));
        prop_assert_eq!(set.encoding(), Encoding::Hash);
    }

    #[test]
    fn invariant_6_encoding_is_monotone(values in prop::collection::vec(element_value(), 1..30)) {
        let mut set = set_with(&values[..1]);
        let mut saw_hash = false;
        for v in &values {
            set.add(Element::from(v.as_str()));
            if set.encoding() == Encoding::Hash {
                saw_hash = true;
            } else {
                prop_assert!(!saw_hash, "encoding went back to Int after reaching Hash");
            }
        }
    }

    #[test]
    fn invariant_7_inclusion_exclusion(a in prop::collection::vec(element_value(), 1..15), b in prop::collection::vec(element_value(), 1..15)) {
        let set_a = set_with(&a);
        let set_b = set_with(&b);
        let inputs = [Some(&set_a), Some(&set_b)];
        let union_size = polyset::algebra::union(&inputs, Config::default()).size();
        let inter_size = polyset::algebra::intersection(&inputs, Config::default()).size();
        prop_assert_eq!(union_size + inter_size, set_a.size() + set_b.size());
    }

    #[test]
    fn invariant_8_difference_is_disjoint_subset(a in prop::collection::vec(element_value(), 1..15), b in prop::collection::vec(element_value(), 1..15)) {
        let set_a = set_with(&a);
        let set_b = set_with(&b);
        let diff = polyset::algebra::difference(&[Some(&set_a), Some(&set_b)], Config::default());
        for member in diff.iter_materialized() {
            prop_assert!(set_a.contains(&member));
            prop_assert!(!set_b.contains(&member));
        }
    }

    #[test]
    fn invariant_9_difference_with_one_input_is_unchanged(values in prop::collection::vec(element_value(), 1..20)) {
        let set = set_with(&values);
        let diff = polyset::algebra::difference(&[Some(&set)], Config::default());
        prop_assert_eq!(diff.size(), set.size());
        for member in set.iter_materialized() {
            prop_assert!(diff.contains(&member));
        }
    }

    #[test]
    fn invariant_10_union_and_intersection_are_commutative(a in prop::collection::vec(element_value(), 1..15), b in prop::collection::vec(element_value(), 1..15)) {
        let set_a = set_with(&a);
        let set_b = set_with(&b);
        let mut u1: Vec<_> = polyset::algebra::union(&[Some(&set_a), Some(&set_b)], Config::default()).iter_materialized().collect();
        let mut u2: Vec<_> = polyset::algebra::union(&[Some(&set_b), Some(&set_a)], Config::default()).iter_materialized().collect();
        u1.sort();
        u2.sort();
        prop_assert_eq!(u1, u2);

        let mut i1: Vec<_> = polyset::algebra::intersection(&[Some(&set_a), Some(&set_b)], Config::default()).iter_materialized().collect();
        let mut i2: Vec<_> = polyset::algebra::intersection(&[Some(&set_b), Some(&set_a)], Config::default()).iter_materialized().collect();
        i1.sort();
        i2.sort();
        prop_assert_eq!(i1, i2);
    }

    #[test]
    fn invariant_11_rand_unique_returns_distinct_members(values in prop::collection::vec((-1000_i64..1000), 2..30), k in 0_usize..30) {
        let strings: Vec<String> = values.iter().map(i64::to_string).collect();
        let set = set_with(&strings);
        let k = k.min(set.size());
        let mut drawn = Vec::new();
        polyset::sampling::rand_count(&set, k, true, Config::default(), |elem| drawn.push(elem.to_owned_bytes()));
        prop_assert_eq!(drawn.len(), k);
        let distinct: HashSet<_> = drawn.iter().cloned().collect();
        prop_assert_eq!(distinct.len(), k);
        for member in &drawn {
            prop_assert!(set.contains(member));
        }
    }

    #[test]
    fn invariant_12_pop_partial_reduces_by_exactly_k(values in prop::collection::vec((-1000_i64..1000), 2..30), k in 0_usize..30) {
        let strings: Vec<String> = values.iter().map(i64::to_string).collect();
        let mut set = set_with(&strings);
        let n = set.size();
        let k = k.min(n.saturating_sub(1)); // keep strictly below n to stay in the "partial" branch
        let mut emitted = Vec::new();
        polyset::sampling::pop_count(&mut set, k, Config::default(), |elem| emitted.push(elem.to_owned_bytes()));
        prop_assert_eq!(emitted.len(), k);
        prop_assert_eq!(set.size(), n - k);
        let distinct: HashSet<_> = emitted.iter().cloned().collect();
        prop_assert_eq!(distinct.len(), k);
        for member in &emitted {
            prop_assert!(!set.contains(member));
        }
    }

    #[test]
    fn invariant_13_pop_all_empties_and_unbinds(values in prop::collection::vec(element_value(), 1..20)) {
        let mut ks: InMemoryKeySpace<RandomState> = InMemoryKeySpace::default();
        let mut events = VecEventSink::default();
        let mut propagation = VecPropagationSink::default();
        let mut cmd = Commands::new(&mut ks, &mut events, &mut propagation, Config::default());
        let elems: Vec<Element> = values.iter().map(|v| Element::from(v.as_str())).collect();
        cmd.add("s", elems).unwrap();
        let n = cmd.cardinality("s").unwrap();

        let popped = cmd.pop("s", n as i64).unwrap();
        prop_assert_eq!(popped.len(), n);
        prop_assert_eq!(cmd.cardinality("s").unwrap(), 0);
    }

    #[test]
    fn invariant_14_store_mode_binds_or_unbinds(a in prop::collection::vec(element_value(), 1..10), b in prop::collection::vec(element_value(), 1..10)) {
        let mut ks: InMemoryKeySpace<RandomState> = InMemoryKeySpace::default();
        let mut events = VecEventSink::default();
        let mut propagation = VecPropagationSink::default();
        let mut cmd = Commands::new(&mut ks, &mut events, &mut propagation, Config::default());

        let a_elems: Vec<Element> = a.iter().map(|v| Element::from(v.as_str())).collect();
        let b_elems: Vec<Element> = b.iter().map(|v| Element::from(v.as_str())).collect();
        cmd.add("a", a_elems).unwrap();
        cmd.add("b", b_elems).unwrap();
        cmd.add("dst", [Element::from("stale")]).unwrap();

        let size = cmd.inter_store("dst", &["a", "b"]).unwrap();
        prop_assert_eq!(cmd.cardinality("dst").unwrap(), size);
        if size == 0 {
            prop_assert!(!cmd.is_member("dst", b"stale").unwrap());
        }
    }
}
