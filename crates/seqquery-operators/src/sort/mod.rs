//! Stable ordering by derived keys.
//!
//! Every operation here copies the input and sorts the copy; the caller's
//! sequence is never reordered. Keys are computed once per element, paired
//! with the source index, and sorted with a stable sort, so elements whose
//! keys compare equal keep their source order (also under `descending`).

pub mod spec;

use std::cmp::Ordering;

pub use spec::SortSpec;

/// Ascending stable sort by `key`.
pub fn order_by<T: Clone, K: Ord>(seq: &[T], key: impl FnMut(&T) -> K) -> Vec<T> {
    order_by_direction(seq, key, false)
}

/// Descending stable sort by `key`. Ties keep source order.
pub fn order_by_descending<T: Clone, K: Ord>(seq: &[T], key: impl FnMut(&T) -> K) -> Vec<T> {
    order_by_direction(seq, key, true)
}

/// Sort by `primary`, breaking ties with `secondary`, both ascending.
///
/// This is one combined sort: `secondary` only matters among elements whose
/// primary keys compare equal.
pub fn then_by<T: Clone, K1: Ord, K2: Ord>(
    seq: &[T],
    primary: impl FnMut(&T) -> K1,
    secondary: impl FnMut(&T) -> K2,
) -> Vec<T> {
    then_by_direction(seq, primary, secondary, false)
}

/// Same as [`then_by`] with both keys descending.
pub fn then_by_descending<T: Clone, K1: Ord, K2: Ord>(
    seq: &[T],
    primary: impl FnMut(&T) -> K1,
    secondary: impl FnMut(&T) -> K2,
) -> Vec<T> {
    then_by_direction(seq, primary, secondary, true)
}

/// Three-way key comparison, flipped when `descending`. Equal stays equal.
pub fn compare_keys<K: Ord>(a: &K, b: &K, descending: bool) -> Ordering {
    let ord = a.cmp(b);
    if descending {
        ord.reverse()
    } else {
        ord
    }
}

fn order_by_direction<T: Clone, K: Ord>(
    seq: &[T],
    mut key: impl FnMut(&T) -> K,
    descending: bool,
) -> Vec<T> {
    let mut keyed: Vec<(K, usize)> = seq.iter().enumerate().map(|(i, x)| (key(x), i)).collect();
    keyed.sort_by(|(a, _), (b, _)| compare_keys(a, b, descending));
    gather(seq, keyed.into_iter().map(|(_, i)| i))
}

fn then_by_direction<T: Clone, K1: Ord, K2: Ord>(
    seq: &[T],
    mut primary: impl FnMut(&T) -> K1,
    mut secondary: impl FnMut(&T) -> K2,
    descending: bool,
) -> Vec<T> {
    let mut keyed: Vec<(K1, K2, usize)> = seq
        .iter()
        .enumerate()
        .map(|(i, x)| (primary(x), secondary(x), i))
        .collect();
    keyed.sort_by(|(a1, a2, _), (b1, b2, _)| {
        compare_keys(a1, b1, descending).then_with(|| compare_keys(a2, b2, descending))
    });
    gather(seq, keyed.into_iter().map(|(_, _, i)| i))
}

/// Copy `seq` in the order given by `indices`.
fn gather<T: Clone>(seq: &[T], indices: impl Iterator<Item = usize>) -> Vec<T> {
    indices.map(|i| seq[i].clone()).collect()
}
