//! Inner join and group join.
//!
//! Output order is left-major, right-minor: every match for the first left
//! element (in right's order) comes before any match for the second. The
//! nested-loop and grouped hash strategies both honor it.

use std::collections::HashMap;
use std::hash::Hash;

use seqquery_core::config::QueryConfig;

use crate::plan::plan_join;

pub fn inner_join<T, U, K, R>(
    left: &[T],
    right: &[U],
    left_key: impl FnMut(&T) -> K,
    right_key: impl FnMut(&U) -> K,
    result: impl FnMut(&T, &U) -> R,
) -> Vec<R>
where
    K: Eq + Hash,
{
    inner_join_with(left, right, left_key, right_key, result, &QueryConfig::default())
}

/// One `result(a, b)` for every pair with `left_key(a) == right_key(b)`.
/// Unmatched elements on either side produce nothing.
pub fn inner_join_with<T, U, K, R>(
    left: &[T],
    right: &[U],
    mut left_key: impl FnMut(&T) -> K,
    mut right_key: impl FnMut(&U) -> K,
    mut result: impl FnMut(&T, &U) -> R,
    config: &QueryConfig,
) -> Vec<R>
where
    K: Eq + Hash,
{
    let plan = plan_join("inner_join", left.len(), right.len(), config);
    let mut out = Vec::new();
    if plan.is_hashed() {
        let buckets = bucket_by_key(right, &mut right_key);
        for a in left {
            if let Some(matches) = buckets.get(&left_key(a)) {
                out.extend(matches.iter().map(|b| result(a, b)));
            }
        }
    } else {
        let right_keys: Vec<K> = right.iter().map(&mut right_key).collect();
        for a in left {
            let key = left_key(a);
            for (b, kb) in right.iter().zip(&right_keys) {
                if *kb == key {
                    out.push(result(a, b));
                }
            }
        }
    }
    out
}

pub fn group_join<T, U, K, R>(
    left: &[T],
    right: &[U],
    left_key: impl FnMut(&T) -> K,
    right_key: impl FnMut(&U) -> K,
    result: impl FnMut(&T, &[&U]) -> R,
) -> Vec<R>
where
    K: Eq + Hash,
{
    group_join_with(left, right, left_key, right_key, result, &QueryConfig::default())
}

/// Exactly one `result(a, matches)` per left element. `matches` holds the
/// right elements with an equal key, in right's order, and is empty when
/// there are none.
pub fn group_join_with<T, U, K, R>(
    left: &[T],
    right: &[U],
    mut left_key: impl FnMut(&T) -> K,
    mut right_key: impl FnMut(&U) -> K,
    mut result: impl FnMut(&T, &[&U]) -> R,
    config: &QueryConfig,
) -> Vec<R>
where
    K: Eq + Hash,
{
    let plan = plan_join("group_join", left.len(), right.len(), config);
    if plan.is_hashed() {
        let buckets = bucket_by_key(right, &mut right_key);
        left.iter()
            .map(|a| match buckets.get(&left_key(a)) {
                Some(matches) => result(a, matches),
                None => result(a, &[]),
            })
            .collect()
    } else {
        let right_keys: Vec<K> = right.iter().map(&mut right_key).collect();
        left.iter()
            .map(|a| {
                let key = left_key(a);
                let matches: Vec<&U> = right
                    .iter()
                    .zip(&right_keys)
                    .filter(|(_, kb)| **kb == key)
                    .map(|(b, _)| b)
                    .collect();
                result(a, &matches)
            })
            .collect()
    }
}

/// Right side grouped by key; each bucket keeps right's order.
fn bucket_by_key<'u, U, K: Eq + Hash>(
    right: &'u [U],
    right_key: &mut impl FnMut(&U) -> K,
) -> HashMap<K, Vec<&'u U>> {
    let mut buckets: HashMap<K, Vec<&U>> = HashMap::new();
    for b in right {
        buckets.entry(right_key(b)).or_default().push(b);
    }
    buckets
}
