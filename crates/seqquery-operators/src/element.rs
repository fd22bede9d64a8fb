//! Element selection and existence tests.
//!
//! `first`/`last` fail with `EmptySequence` on empty input and with `NoMatch`
//! when a predicate matches nothing. The `_or` variants signal absence
//! explicitly, so a present `0`, `""` or `false` is returned as found.
//!
//! Predicates see only the element; position-aware lookups go through
//! `filter_indexed` and then `first`/`last`.

use seqquery_core::error::{QueryError, Result};

pub fn first<T>(seq: &[T]) -> Result<&T> {
    seq.first().ok_or(QueryError::EmptySequence { op: "first" })
}

pub fn first_where<T>(seq: &[T], pred: impl FnMut(&T) -> bool) -> Result<&T> {
    if seq.is_empty() {
        return Err(QueryError::EmptySequence { op: "first_where" });
    }
    find_first(seq, pred).ok_or(QueryError::NoMatch { op: "first_where" })
}

pub fn first_or<T: Clone>(seq: &[T], default: T) -> T {
    seq.first().cloned().unwrap_or(default)
}

pub fn first_where_or<T: Clone>(seq: &[T], pred: impl FnMut(&T) -> bool, default: T) -> T {
    find_first(seq, pred).cloned().unwrap_or(default)
}

pub fn first_or_default<T: Clone + Default>(seq: &[T]) -> T {
    seq.first().cloned().unwrap_or_default()
}

pub fn last<T>(seq: &[T]) -> Result<&T> {
    seq.last().ok_or(QueryError::EmptySequence { op: "last" })
}

pub fn last_where<T>(seq: &[T], pred: impl FnMut(&T) -> bool) -> Result<&T> {
    if seq.is_empty() {
        return Err(QueryError::EmptySequence { op: "last_where" });
    }
    find_last(seq, pred).ok_or(QueryError::NoMatch { op: "last_where" })
}

pub fn last_or<T: Clone>(seq: &[T], default: T) -> T {
    seq.last().cloned().unwrap_or(default)
}

pub fn last_where_or<T: Clone>(seq: &[T], pred: impl FnMut(&T) -> bool, default: T) -> T {
    find_last(seq, pred).cloned().unwrap_or(default)
}

pub fn last_or_default<T: Clone + Default>(seq: &[T]) -> T {
    seq.last().cloned().unwrap_or_default()
}

/// True for any non-empty sequence.
pub fn any<T>(seq: &[T]) -> bool {
    !seq.is_empty()
}

pub fn any_where<T>(seq: &[T], pred: impl FnMut(&T) -> bool) -> bool {
    seq.iter().any(pred)
}

/// True iff every element matches; vacuously true when empty.
pub fn all<T>(seq: &[T], pred: impl FnMut(&T) -> bool) -> bool {
    seq.iter().all(pred)
}

fn find_first<T>(seq: &[T], mut pred: impl FnMut(&T) -> bool) -> Option<&T> {
    seq.iter().find(|x| pred(x))
}

fn find_last<T>(seq: &[T], mut pred: impl FnMut(&T) -> bool) -> Option<&T> {
    seq.iter().rev().find(|x| pred(x))
}
