//! Multi-key sort specification.
//!
//! Generalizes `then_by` to any number of keys, each with its own direction.
//! Keys are compared lexicographically: the second key is consulted only when
//! the first compares equal, and so on. A stable sort resolves full ties by
//! source order.

use std::cmp::Ordering;

use super::compare_keys;

/// Compares two rows of a precomputed key column by index.
type Column<'a> = Box<dyn Fn(usize, usize) -> Ordering + 'a>;
/// Evaluates one key selector over every item, once per item.
type KeyColumn<'a, T> = Box<dyn Fn(&[&T]) -> Column<'a> + 'a>;

pub struct SortSpec<'a, T> {
    keys: Vec<KeyColumn<'a, T>>,
}

impl<'a, T: 'a> SortSpec<'a, T> {
    /// Start with an ascending primary key.
    pub fn by<K: Ord + 'a>(key: impl Fn(&T) -> K + 'a) -> Self {
        Self { keys: Vec::new() }.then_by(key)
    }

    /// Start with a descending primary key.
    pub fn by_descending<K: Ord + 'a>(key: impl Fn(&T) -> K + 'a) -> Self {
        Self { keys: Vec::new() }.then_by_descending(key)
    }

    pub fn then_by<K: Ord + 'a>(self, key: impl Fn(&T) -> K + 'a) -> Self {
        self.push(key, false)
    }

    pub fn then_by_descending<K: Ord + 'a>(self, key: impl Fn(&T) -> K + 'a) -> Self {
        self.push(key, true)
    }

    fn push<K: Ord + 'a>(mut self, key: impl Fn(&T) -> K + 'a, descending: bool) -> Self {
        self.keys.push(Box::new(move |items: &[&T]| -> Column<'a> {
            let column: Vec<K> = items.iter().map(|&x| key(x)).collect();
            Box::new(move |a: usize, b: usize| compare_keys(&column[a], &column[b], descending))
        }));
        self
    }
}

impl<'a, T> SortSpec<'a, T> {
    /// Number of keys in the specification.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Lexicographic comparison over all keys.
    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        let pair = [a, b];
        for key in &self.keys {
            match key(&pair[..])(0, 1) {
                Ordering::Equal => continue,
                other => return other,
            }
        }
        Ordering::Equal
    }

    /// Sorted copy of `seq`.
    ///
    /// Every key selector runs once per element; the sort itself only
    /// compares the precomputed key columns.
    pub fn sort(&self, seq: &[T]) -> Vec<T>
    where
        T: Clone,
    {
        let items: Vec<&T> = seq.iter().collect();
        let columns: Vec<Column<'a>> = self.keys.iter().map(|key| key(&items[..])).collect();
        let mut order: Vec<usize> = (0..seq.len()).collect();
        order.sort_by(|&a, &b| {
            columns
                .iter()
                .map(|cmp| cmp(a, b))
                .find(|ord| ord.is_ne())
                .unwrap_or(Ordering::Equal)
        });
        order.into_iter().map(|i| seq[i].clone()).collect()
    }
}

impl<T> std::fmt::Debug for SortSpec<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SortSpec").field("keys", &self.keys.len()).finish()
    }
}
