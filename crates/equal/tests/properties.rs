//! Property tests for structural equality and the list operations built on it.

use plainlang_equal::{equals, is_member, lookup, not_equals, nub, Number, Value};
use proptest::prelude::*;

fn number() -> impl Strategy<Value = Number> {
    prop_oneof![
        any::<i64>().prop_map(Number::Integer),
        any::<u64>().prop_map(Number::Natural),
        any::<f64>().prop_map(Number::Real),
        (-50_i64..50).prop_map(|i| Number::Real(i as f64)),
    ]
}

fn value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Unit),
        Just(Value::Nothing),
        any::<bool>().prop_map(Value::Bool),
        number().prop_map(Value::Number),
        "[a-c]{0,3}".prop_map(Value::Text),
    ];
    leaf.prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Tuple),
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::List),
            inner.clone().prop_map(|v| Value::just(v)),
            inner.clone().prop_map(|v| Value::left(v)),
            inner.clone().prop_map(|v| Value::right(v)),
            ("[AB]", prop::collection::vec(inner, 0..3))
                .prop_map(|(tag, fields)| Value::constructor(tag, fields)),
        ]
    })
}

proptest! {
    #[test]
    fn equality_is_reflexive(a in value()) {
        prop_assert!(equals(&a, &a));
        prop_assert!(equals(&a, &a.clone()));
    }

    #[test]
    fn equality_is_symmetric(a in value(), b in value()) {
        prop_assert_eq!(equals(&a, &b), equals(&b, &a));
    }

    #[test]
    fn not_equals_is_negation(a in value(), b in value()) {
        prop_assert_eq!(not_equals(&a, &b), !equals(&a, &b));
    }

    #[test]
    fn number_equality_is_symmetric(a in number(), b in number()) {
        prop_assert_eq!(equals(&a, &b), equals(&b, &a));
    }

    #[test]
    fn nub_is_idempotent(xs in prop::collection::vec(value(), 0..12)) {
        let once = nub(xs);
        let twice = nub(once.clone());
        prop_assert!(equals(&once, &twice));
    }

    #[test]
    fn nub_leaves_no_duplicates(xs in prop::collection::vec(0_i32..5, 0..20)) {
        let unique = nub(xs.clone());
        for (i, x) in unique.iter().enumerate() {
            prop_assert!(!is_member(&unique[i + 1..], x));
        }
        for x in &xs {
            prop_assert!(is_member(&unique, x));
        }
    }

    #[test]
    fn lookup_misses_absent_keys(
        pairs in prop::collection::vec(("[a-m]{1,3}", any::<i32>()), 0..10),
        key in "[n-z]{1,3}",
    ) {
        prop_assert_eq!(lookup(&pairs, &key), None);
    }

    #[test]
    fn lookup_finds_first_binding(
        pairs in prop::collection::vec((0_u8..4, any::<i32>()), 1..10),
    ) {
        let key = pairs[0].0;
        prop_assert_eq!(lookup(&pairs, &key), Some(&pairs[0].1));
    }
}
