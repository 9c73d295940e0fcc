//! Integration tests for mixed-radix flattening and decoding.

use action_counts::common::CountError;
use action_counts::model::{checked_decode, checked_flatten, decode, flatten, Action};

/// Cardinality vectors exercised by the round-trip tests.
fn cardinality_cases() -> Vec<Vec<usize>> {
    vec![
        vec![],
        vec![1],
        vec![7],
        vec![4, 3],
        vec![3, 4],
        vec![2, 1, 5],
        vec![2, 3, 2, 4],
    ]
}

/// Enumerates every argument tuple of `cards` with argument 0 varying fastest.
fn all_tuples(cards: &[usize]) -> Vec<Vec<usize>> {
    let mut tuples = vec![Vec::new()];
    for &card in cards {
        let mut next = Vec::new();
        for value in 0..card {
            for tuple in &tuples {
                let mut t: Vec<usize> = tuple.clone();
                t.push(value);
                next.push(t);
            }
        }
        tuples = next;
    }
    tuples
}

/// Tests decode followed by flatten returns the original index.
#[test]
fn test_flatten_decode_round_trip() {
    for cards in cardinality_cases() {
        let size: usize = cards.iter().product();
        for idx in 0..size {
            assert_eq!(flatten(&decode(idx, &cards), &cards), idx, "cards {:?}", cards);
        }
    }
}

/// Tests flatten followed by decode returns the original tuple.
#[test]
fn test_decode_flatten_round_trip() {
    for cards in cardinality_cases() {
        for tuple in all_tuples(&cards) {
            assert_eq!(decode(flatten(&tuple, &cards), &cards), tuple);
        }
    }
}

/// Tests argument 0 varies fastest.
#[test]
fn test_little_endian_order() {
    let cards = [2, 3, 2];
    let decoded: Vec<Vec<usize>> = (0..12).map(|i| decode(i, &cards)).collect();
    assert_eq!(decoded, all_tuples(&cards));
    assert_eq!(decode(1, &cards), vec![1, 0, 0]);
    assert_eq!(decode(2, &cards), vec![0, 1, 0]);
    assert_eq!(decode(6, &cards), vec![0, 0, 1]);
}

/// Tests three or more arguments decode correctly, including the last one.
#[test]
fn test_decode_high_arity() {
    let cards = [4, 3, 5];
    let idx = flatten(&[3, 2, 4], &cards);
    assert_eq!(idx, 3 + 2 * 4 + 4 * 12);
    assert_eq!(decode(idx, &cards), vec![3, 2, 4]);
}

/// Tests checked flattening validates arity and bounds.
#[test]
fn test_checked_flatten() {
    let access = Action::new("access", vec![4, 3]).unwrap();
    assert_eq!(checked_flatten(&access, &[2, 1]).unwrap(), 6);
    assert!(matches!(
        checked_flatten(&access, &[2, 1, 0]),
        Err(CountError::ArityMismatch { expected: 2, actual: 3, .. })
    ));
    assert!(matches!(
        checked_flatten(&access, &[2, 3]),
        Err(CountError::IndexOutOfRange { position: 1, value: 3, limit: 3, .. })
    ));
}

/// Tests checked decoding rejects indices past the table.
#[test]
fn test_checked_decode() {
    let access = Action::new("access", vec![4, 3]).unwrap();
    assert_eq!(checked_decode(&access, 11).unwrap(), vec![3, 2]);
    assert!(matches!(
        checked_decode(&access, 12),
        Err(CountError::IndexOutOfRange { value: 12, limit: 12, .. })
    ));

    let idle = Action::simple("idle");
    assert!(checked_decode(&idle, 0).unwrap().is_empty());
    assert!(checked_decode(&idle, 1).is_err());
}
