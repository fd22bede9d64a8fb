//! Set algebra over sequences under the element type's equality.
//!
//! `union` deduplicates; `intersect` and `except` keep `left`'s duplicates and
//! order, since they are filters over `left`.

use std::collections::HashSet;
use std::hash::Hash;

use seqquery_core::config::QueryConfig;

use crate::filter::{distinct_with, filter};
use crate::plan::plan_set;

pub fn union<T: Clone + Eq + Hash>(left: &[T], right: &[T]) -> Vec<T> {
    union_with(left, right, &QueryConfig::default())
}

/// `left` followed by `right`, then `distinct`: left's unique elements first,
/// then right's novel ones.
pub fn union_with<T: Clone + Eq + Hash>(left: &[T], right: &[T], config: &QueryConfig) -> Vec<T> {
    let mut all = Vec::with_capacity(left.len() + right.len());
    all.extend_from_slice(left);
    all.extend_from_slice(right);
    distinct_with(&all, config)
}

pub fn intersect<T: Clone + Eq + Hash>(left: &[T], right: &[T]) -> Vec<T> {
    intersect_with(left, right, &QueryConfig::default())
}

/// Elements of `left` that have an equal counterpart in `right`.
pub fn intersect_with<T: Clone + Eq + Hash>(
    left: &[T],
    right: &[T],
    config: &QueryConfig,
) -> Vec<T> {
    retain_by_membership("intersect", left, right, true, config)
}

pub fn except<T: Clone + Eq + Hash>(left: &[T], right: &[T]) -> Vec<T> {
    except_with(left, right, &QueryConfig::default())
}

/// Elements of `left` with no equal counterpart in `right`.
pub fn except_with<T: Clone + Eq + Hash>(left: &[T], right: &[T], config: &QueryConfig) -> Vec<T> {
    retain_by_membership("except", left, right, false, config)
}

/// True iff some element equals `item`.
pub fn contains<T: PartialEq>(seq: &[T], item: &T) -> bool {
    seq.iter().any(|x| x == item)
}

fn retain_by_membership<T: Clone + Eq + Hash>(
    op: &'static str,
    left: &[T],
    right: &[T],
    keep_members: bool,
    config: &QueryConfig,
) -> Vec<T> {
    let plan = plan_set(op, left.len(), right.len(), config);
    if plan.is_hashed() {
        let members: HashSet<&T> = right.iter().collect();
        filter(left, |x| members.contains(x) == keep_members)
    } else {
        filter(left, |x| contains(right, x) == keep_members)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seqquery_core::config::Strategy;

    fn configs() -> [QueryConfig; 2] {
        [
            QueryConfig::default().with_strategy(Strategy::Linear),
            QueryConfig::default().with_strategy(Strategy::Hashed),
        ]
    }

    #[test]
    fn set_laws_on_small_inputs() {
        let a = vec![1, 2, 3];
        let b = vec![2, 3, 4];
        for cfg in configs() {
            assert_eq!(union_with(&a, &b, &cfg), vec![1, 2, 3, 4]);
            assert_eq!(except_with(&a, &b, &cfg), vec![1]);
            assert_eq!(intersect_with(&a, &b, &cfg), vec![2, 3]);
        }
    }

    #[test]
    fn intersect_and_except_keep_left_duplicates() {
        let a = vec![2, 1, 2, 5, 1];
        let b = vec![1, 2];
        for cfg in configs() {
            assert_eq!(intersect_with(&a, &b, &cfg), vec![2, 1, 2, 1]);
            assert_eq!(except_with(&a, &b, &cfg), vec![5]);
        }
    }

    #[test]
    fn union_deduplicates_both_sides() {
        let a = vec!["x", "x", "y"];
        let b = vec!["z", "y", "z"];
        assert_eq!(union(&a, &b), vec!["x", "y", "z"]);
    }

    #[test]
    fn empty_operands() {
        let a = vec![1, 2];
        let e: Vec<i32> = vec![];
        assert_eq!(union(&e, &a), vec![1, 2]);
        assert!(intersect(&a, &e).is_empty());
        assert_eq!(except(&a, &e), vec![1, 2]);
        assert!(except(&e, &a).is_empty());
        assert!(!contains(&e, &1));
        assert!(contains(&a, &2));
    }
}
