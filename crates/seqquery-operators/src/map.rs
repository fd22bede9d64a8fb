//! Projection: `select`, `select_many`, and `cast`.

/// Element-wise transform, preserving length and order.
pub fn select<T, U>(seq: &[T], f: impl FnMut(&T) -> U) -> Vec<U> {
    seq.iter().map(f).collect()
}

/// Like [`select`], but the transform also receives the index and the whole
/// sequence.
pub fn select_indexed<T, U>(seq: &[T], mut f: impl FnMut(&T, usize, &[T]) -> U) -> Vec<U> {
    seq.iter().enumerate().map(|(i, x)| f(x, i, seq)).collect()
}

/// Project each element to zero or more values and concatenate them in order.
pub fn select_many<T, I>(seq: &[T], f: impl FnMut(&T) -> I) -> Vec<I::Item>
where
    I: IntoIterator,
{
    seq.iter().flat_map(f).collect()
}

/// Convert every element with `Into`.
pub fn cast<T, U>(seq: &[T]) -> Vec<U>
where
    T: Clone + Into<U>,
{
    seq.iter().cloned().map(Into::into).collect()
}
