#![cfg(test)]

use polyset::config::Config;
use polyset::element::Element;
use polyset::PolySet;
use serde_test::{assert_tokens, Token};
use std::collections::hash_map::RandomState;

fn int_set(values: &[i64]) -> PolySet<RandomState> {
    let mut iter = values.iter();
    let mut set = PolySet::new(Config::default(), Element::from(*iter.next().unwrap()));
    for &v in iter {
        set.add(Element::from(v));
    }
    set
}

#[test]
fn int_encoded_set_serializes_in_sorted_order() {
    // `Int` encoding keeps members sorted, so the wire format's element
    // order is deterministic: one single-byte digit per member.
    let set = int_set(&[1, 2, 3, 4]);
    assert_tokens(
        &set,
        &[
            Token::Seq { len: Some(4) },
            Token::Seq { len: Some(1) },
            Token::U8(b'1'),
            Token::SeqEnd,
            Token::Seq { len: Some(1) },
            Token::U8(b'2'),
            Token::SeqEnd,
            Token::Seq { len: Some(1) },
            Token::U8(b'3'),
            Token::SeqEnd,
            Token::Seq { len: Some(1) },
            Token::U8(b'4'),
            Token::SeqEnd,
            Token::SeqEnd,
        ],
    );
}

#[test]
fn hash_encoded_set_round_trips_through_json() {
    let mut set: PolySet<RandomState> = PolySet::new(Config::default(), Element::from("hello"));
    set.add(Element::from("world"));
    set.add(Element::from(42_i64));

    let json = serde_json::to_string(&set).unwrap();
    let restored: PolySet<RandomState> = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.size(), set.size());
    for member in set.iter_materialized() {
        assert!(restored.contains(&member));
    }
}

#[test]
fn deserializing_an_empty_sequence_is_an_error() {
    let err = serde_json::from_str::<PolySet<RandomState>>("[]").unwrap_err();
    assert!(err.to_string().contains("at least one member"));
}
