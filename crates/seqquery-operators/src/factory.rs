//! Sequence factories.

/// `count` consecutive integers starting at `start`. Empty when `count <= 0`.
///
/// Stops at `i64::MAX`, so the result is shorter than `count` when the run
/// would overflow.
pub fn range(start: i64, count: i64) -> Vec<i64> {
    if count <= 0 {
        return Vec::new();
    }
    (0..count).map_while(|i| start.checked_add(i)).collect()
}

/// `count` copies of `element`. Empty when `count <= 0`.
pub fn repeat<T: Clone>(element: T, count: i64) -> Vec<T> {
    if count <= 0 {
        return Vec::new();
    }
    vec![element; count as usize]
}
