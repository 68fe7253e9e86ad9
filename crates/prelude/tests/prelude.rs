//! End-to-end checks of the prelude operations as plainlang programs call them.

use plainlang_prelude::{
    delete_first, equals, intersect, is_member, lookup, not_equals, nub, seed_randoms, shuffle,
    structural_eq, union, Value,
};
use proptest::prelude::*;
use serde_json::json;

#[derive(Debug, Clone)]
struct Student {
    name: String,
    scores: Vec<f64>,
}
structural_eq!(struct Student { name, scores });

fn student(name: &str, scores: &[f64]) -> Student {
    Student {
        name: name.to_owned(),
        scores: scores.to_vec(),
    }
}

#[test]
fn equality_over_records() {
    assert!(equals((student("ada", &[1.0, 2.0]), student("ada", &[1.0, 2.0]))));
    assert!(not_equals((student("ada", &[1.0, 2.0]), student("ada", &[2.0, 1.0]))));
}

#[test]
fn equality_over_references() {
    let a = vec![Some((1, "x")), None];
    let b = vec![Some((1, "x")), None];
    assert!(equals((&a, &b)));
}

#[test]
fn nub_of_records_keeps_first() {
    let roster = vec![
        student("ada", &[1.0]),
        student("bob", &[2.0]),
        student("ada", &[1.0]),
        student("ada", &[3.0]),
    ];
    let unique = nub(roster);
    assert_eq!(unique.len(), 3);
    assert_eq!(unique[0].name, "ada");
    assert_eq!(unique[2].scores, vec![3.0]);
}

#[test]
fn membership_and_lookup_over_dynamic_values() {
    let xs = vec![Value::from(json!({"a": 1})), Value::from(json!([1, 2]))];
    assert!(is_member((&xs, Value::from(json!({"a": 1.0})))));
    assert!(!is_member((&xs, Value::from(json!([2, 1])))));

    let pairs = vec![(Value::from("k"), 1), (Value::from(json!(null)), 2)];
    assert_eq!(lookup((&pairs, Value::from(json!(null)))), Some(2));
    assert_eq!(lookup((&pairs, Value::from("missing"))), None);
}

#[test]
fn supplementary_list_operations() {
    assert_eq!(delete_first((vec![3, 1, 3], 3)), vec![1, 3]);
    assert_eq!(union((vec![1, 2], vec![2, 3, 3])), vec![1, 2, 3]);
    assert_eq!(intersect((vec![1, 2, 3], vec![3, 1])), vec![1, 3]);
}

#[test]
fn seed_randoms_is_deterministic_and_in_range() {
    for seed in [0.0, 0.25, 0.999_999, 1.0 - f64::EPSILON / 2.0] {
        let a: Vec<f64> = seed_randoms(seed).take(10_000).collect();
        let b: Vec<f64> = seed_randoms(seed).take(10_000).collect();
        assert_eq!(a, b);
        assert!(a.iter().all(|x| (0.0..1.0).contains(x)));
    }
}

#[test]
fn seed_randoms_accepts_any_number() {
    for seed in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY, f64::MAX, -1e-300] {
        assert!(seed_randoms(seed).take(100).all(|x| (0.0..1.0).contains(&x)));
    }
}

#[test]
fn shuffle_one_to_five() {
    let out = shuffle((vec![1, 2, 3, 4, 5], 0.42));
    assert_eq!(out, shuffle((vec![1, 2, 3, 4, 5], 0.42)));
    let mut sorted = out;
    sorted.sort();
    assert_eq!(sorted, vec![1, 2, 3, 4, 5]);
    assert_eq!(shuffle((Vec::<i32>::new(), 0.42)), Vec::<i32>::new());
}

#[test]
fn memoized_stream_rereads_values() {
    let randoms = seed_randoms(0.8).memoized();
    let tenth = randoms.get(9);
    assert_eq!(randoms.get(9), tenth);
    assert_eq!(randoms.prefix(10)[9], tenth.unwrap());
}

proptest! {
    #[test]
    fn nub_is_idempotent(xs in prop::collection::vec(0_u8..6, 0..30)) {
        let once = nub(xs);
        prop_assert!(equals((nub(once.clone()), once)));
    }

    #[test]
    fn lookup_of_absent_key_is_none(
        pairs in prop::collection::vec((0_i32..100, any::<bool>()), 0..20),
    ) {
        prop_assert_eq!(lookup((&pairs, 100)), None);
    }

    #[test]
    fn equality_is_symmetric(
        a in prop::collection::vec(0_i8..3, 0..4),
        b in prop::collection::vec(0_i8..3, 0..4),
    ) {
        prop_assert_eq!(equals((a.clone(), b.clone())), equals((b, a)));
    }
}
