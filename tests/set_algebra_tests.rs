//! Set algebra and distinct tests

use seqquery::operators::filter::distinct_with;
use seqquery::operators::set::{except_with, intersect_with, union_with};
use seqquery::prelude::*;

#[test]
fn test_distinct_preserves_first_occurrence() {
    assert_eq!(vec![3, 1, 3, 2, 1].distinct(), vec![3, 1, 2]);
    assert_eq!(vec!["b", "a", "b"].distinct(), vec!["b", "a"]);
}

#[test]
fn test_union_except_intersect() {
    let a = vec![1, 2, 3];
    let b = vec![2, 3, 4];
    assert_eq!(a.union(&b), vec![1, 2, 3, 4]);
    assert_eq!(a.except(&b), vec![1]);
    assert_eq!(a.intersect(&b), vec![2, 3]);
}

#[test]
fn test_contains_uses_value_equality() {
    let names = vec!["ada".to_string(), "".to_string()];
    assert!(names.contains_element(&"ada".to_string()));
    assert!(names.contains_element(&String::new()));
    assert!(!names.contains_element(&"Ada".to_string()));
}

#[test]
fn test_identity_values_are_not_deep_equal() {
    let a = Identity::new(vec![1, 2]);
    let b = Identity::new(vec![1, 2]);
    let seq = vec![a.clone(), b.clone(), a.clone()];

    // a and b have equal contents but are different values
    assert_eq!(seq.distinct().len(), 2);
    assert!(seq.contains_element(&b));
    assert!(!vec![a.clone()].contains_element(&b));
    assert_eq!(vec![a.clone()].except(&[b.clone()]).len(), 1);
}

#[test]
fn test_scalar_keys_do_not_coerce() {
    let mixed = vec![Scalar::from(1), Scalar::from("1"), Scalar::from(true)];
    assert_eq!(mixed.distinct().len(), 3);
    assert!(mixed.intersect(&[Scalar::from("1")]) == vec![Scalar::from("1")]);
}

#[test]
fn test_strategies_agree_on_large_inputs() {
    let linear = QueryConfig::default().with_strategy(Strategy::Linear);
    let hashed = QueryConfig::default().with_strategy(Strategy::Hashed);
    let a: Vec<i64> = range(0, 300).select(|x| x % 37);
    let b: Vec<i64> = range(20, 50);

    assert_eq!(distinct_with(&a, &linear), distinct_with(&a, &hashed));
    assert_eq!(union_with(&a, &b, &linear), union_with(&a, &b, &hashed));
    assert_eq!(intersect_with(&a, &b, &linear), intersect_with(&a, &b, &hashed));
    assert_eq!(except_with(&a, &b, &linear), except_with(&a, &b, &hashed));
}

#[test]
fn test_threshold_from_config() {
    let cfg = QueryConfig::from_lookup(|name| match name {
        "SEQQUERY_HASH_THRESHOLD" => Some("4".to_string()),
        _ => None,
    })
    .unwrap();
    assert_eq!(cfg.strategy_for(3), Strategy::Linear);
    assert_eq!(cfg.strategy_for(4), Strategy::Hashed);
    assert_eq!(union_with(&[1, 1, 2], &[2, 3], &cfg), vec![1, 2, 3]);
}
