//! Filtering: `filter` (where), `take`, `skip`, and `distinct`.
//!
//! All of these copy the kept elements into a new `Vec` in source order.

use std::collections::HashSet;
use std::hash::Hash;

use seqquery_core::config::QueryConfig;

use crate::plan::plan_set;

/// Elements matching `pred`, in source order.
pub fn filter<T: Clone>(seq: &[T], mut pred: impl FnMut(&T) -> bool) -> Vec<T> {
    seq.iter().filter(|x| pred(x)).cloned().collect()
}

/// Like [`filter`], but the predicate also receives the index and the whole
/// sequence.
pub fn filter_indexed<T: Clone>(
    seq: &[T],
    mut pred: impl FnMut(&T, usize, &[T]) -> bool,
) -> Vec<T> {
    seq.iter()
        .enumerate()
        .filter(|(i, x)| pred(x, *i, seq))
        .map(|(_, x)| x.clone())
        .collect()
}

/// The first `n` elements. `n` is clamped to `[0, len]`.
pub fn take<T: Clone>(seq: &[T], n: isize) -> Vec<T> {
    seq[..clamp_count(n, seq.len())].to_vec()
}

/// Everything after the first `n` elements. `n` is clamped to `[0, len]`.
pub fn skip<T: Clone>(seq: &[T], n: isize) -> Vec<T> {
    seq[clamp_count(n, seq.len())..].to_vec()
}

pub fn distinct<T: Clone + Eq + Hash>(seq: &[T]) -> Vec<T> {
    distinct_with(seq, &QueryConfig::default())
}

/// First occurrence of each equality class, in source order.
pub fn distinct_with<T: Clone + Eq + Hash>(seq: &[T], config: &QueryConfig) -> Vec<T> {
    let plan = plan_set("distinct", seq.len(), 0, config);
    if plan.is_hashed() {
        let mut seen = HashSet::with_capacity(seq.len());
        seq.iter().filter(|x| seen.insert(*x)).cloned().collect()
    } else {
        filter_indexed(seq, |x, i, all| all.iter().position(|y| y == x) == Some(i))
    }
}

fn clamp_count(n: isize, len: usize) -> usize {
    if n <= 0 {
        0
    } else {
        (n as usize).min(len)
    }
}
