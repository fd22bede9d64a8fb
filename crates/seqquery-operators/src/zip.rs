//! Pairwise combination of two sequences.

/// `result(left[i], right[i])` for `i` in `0..min(left.len(), right.len())`.
///
/// Arguments are always passed as `(left, right)`, whichever side is shorter.
pub fn zip_with<T, U, R>(
    left: &[T],
    right: &[U],
    mut result: impl FnMut(&T, &U) -> R,
) -> Vec<R> {
    left.iter().zip(right).map(|(a, b)| result(a, b)).collect()
}
