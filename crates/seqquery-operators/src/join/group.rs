//! Grouping: partition a sequence into key -> values buckets.

use std::hash::Hash;

use indexmap::map::{IntoIter, Iter};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Result of `group_by`.
///
/// Groups are ordered by the first occurrence of their key in the source;
/// values within a group keep source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "K: Serialize + Eq + Hash, V: Serialize",
    deserialize = "K: Deserialize<'de> + Eq + Hash, V: Deserialize<'de>"
))]
#[serde(transparent)]
pub struct Grouping<K: Eq + Hash, V> {
    groups: IndexMap<K, Vec<V>>,
}

impl<K: Eq + Hash, V> Grouping<K, V> {
    pub fn new() -> Self {
        Self {
            groups: IndexMap::new(),
        }
    }

    /// Append `value` to the group for `key`, creating it if needed.
    pub fn push(&mut self, key: K, value: V) {
        self.groups.entry(key).or_default().push(value);
    }

    pub fn get(&self, key: &K) -> Option<&[V]> {
        self.groups.get(key).map(Vec::as_slice)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.groups.contains_key(key)
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.groups.keys()
    }

    pub fn iter(&self) -> Iter<'_, K, Vec<V>> {
        self.groups.iter()
    }

    pub fn into_inner(self) -> IndexMap<K, Vec<V>> {
        self.groups
    }
}

impl<K: Eq + Hash, V> Default for Grouping<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash, V> IntoIterator for Grouping<K, V> {
    type Item = (K, Vec<V>);
    type IntoIter = IntoIter<K, Vec<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

impl<'g, K: Eq + Hash, V> IntoIterator for &'g Grouping<K, V> {
    type Item = (&'g K, &'g Vec<V>);
    type IntoIter = Iter<'g, K, Vec<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

/// Group elements by `key`.
pub fn group_by<T: Clone, K: Eq + Hash>(seq: &[T], key: impl FnMut(&T) -> K) -> Grouping<K, T> {
    group_by_select(seq, key, T::clone)
}

/// Group `value(x)` by `key(x)`.
pub fn group_by_select<T, K: Eq + Hash, V>(
    seq: &[T],
    mut key: impl FnMut(&T) -> K,
    mut value: impl FnMut(&T) -> V,
) -> Grouping<K, V> {
    let mut grouping = Grouping::new();
    for x in seq {
        grouping.push(key(x), value(x));
    }
    grouping
}
