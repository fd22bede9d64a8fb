//! Reducers: fold a sequence down to a scalar.
//!
//! Seedless folds (`aggregate`, `minimum`, `maximum`) fail on empty input;
//! everything with a natural identity (`count`, `sum`, `average`) does not.
//!
//! Callbacks receive only the element. When a reducer needs the position,
//! select or filter through `select_indexed` / `filter_indexed` first.

use std::ops::Add;

use num_traits::{ToPrimitive, Zero};
use seqquery_core::error::{QueryError, Result};

/// Left fold seeded with the first element; folding starts at the second.
pub fn aggregate<T: Clone>(seq: &[T], f: impl FnMut(T, &T) -> T) -> Result<T> {
    fold_first(seq, "aggregate", f)
}

/// Left fold starting at `seed`. Returns `seed` for an empty sequence.
pub fn aggregate_with<T, U>(seq: &[T], seed: U, f: impl FnMut(U, &T) -> U) -> U {
    seq.iter().fold(seed, f)
}

pub fn count<T>(seq: &[T]) -> usize {
    seq.len()
}

/// Number of elements matching `pred`; same as `filter(pred).count()`.
pub fn count_where<T>(seq: &[T], mut pred: impl FnMut(&T) -> bool) -> usize {
    seq.iter().filter(|x| pred(x)).count()
}

/// Sum of the elements; zero for an empty sequence.
pub fn sum<T>(seq: &[T]) -> T
where
    T: Clone + Zero + Add<Output = T>,
{
    aggregate_with(seq, T::zero(), |acc, x| acc + x.clone())
}

pub fn sum_of<T, N>(seq: &[T], mut f: impl FnMut(&T) -> N) -> N
where
    N: Zero + Add<Output = N>,
{
    aggregate_with(seq, N::zero(), |acc, x| acc + f(x))
}

/// Smallest element by `>`. On ties (or incomparable pairs) the earlier
/// element is kept.
pub fn minimum<T: Clone + PartialOrd>(seq: &[T]) -> Result<T> {
    fold_first(seq, "minimum", |acc, x| if acc > *x { x.clone() } else { acc })
}

/// Largest element by `>`. On ties (or incomparable pairs) the later element
/// wins.
pub fn maximum<T: Clone + PartialOrd>(seq: &[T]) -> Result<T> {
    fold_first(seq, "maximum", |acc, x| if acc > *x { acc } else { x.clone() })
}

/// Smallest projected value; returns the projection, not the element.
pub fn minimum_of<T, K: PartialOrd>(seq: &[T], f: impl FnMut(&T) -> K) -> Result<K> {
    let mut keys = seq.iter().map(f);
    let first = keys
        .next()
        .ok_or(QueryError::EmptySequence { op: "minimum_of" })?;
    Ok(keys.fold(first, |acc, k| if acc > k { k } else { acc }))
}

/// Largest projected value; returns the projection, not the element.
pub fn maximum_of<T, K: PartialOrd>(seq: &[T], f: impl FnMut(&T) -> K) -> Result<K> {
    let mut keys = seq.iter().map(f);
    let first = keys
        .next()
        .ok_or(QueryError::EmptySequence { op: "maximum_of" })?;
    Ok(keys.fold(first, |acc, k| if acc > k { acc } else { k }))
}

/// Arithmetic mean as `f64`.
///
/// An empty sequence averages to `0.0` rather than `NaN`. Elements that have
/// no `f64` representation contribute `NaN`.
pub fn average<T: ToPrimitive>(seq: &[T]) -> f64 {
    average_of(seq, |x| x.to_f64().unwrap_or(f64::NAN))
}

pub fn average_of<T>(seq: &[T], f: impl FnMut(&T) -> f64) -> f64 {
    if seq.is_empty() {
        return 0.0;
    }
    sum_of(seq, f) / seq.len() as f64
}

fn fold_first<T: Clone>(seq: &[T], op: &'static str, f: impl FnMut(T, &T) -> T) -> Result<T> {
    let (head, tail) = seq.split_first().ok_or(QueryError::EmptySequence { op })?;
    Ok(tail.iter().fold(head.clone(), f))
}
