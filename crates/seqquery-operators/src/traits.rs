//! `Sequence`: extension trait exposing every operator as a method on slices.
//!
//! Implemented for `[T]`, so `Vec<T>`, arrays, and slices all get the methods
//! through auto-deref. Operators that produce sequences return a new `Vec`,
//! which can be queried again:
//!
//! ```
//! use seqquery_operators::Sequence;
//!
//! let v = vec![5, 3, 8, 3, 1];
//! let top = v.filter(|x| *x > 2).distinct().order_by_descending(|x| *x).take(2);
//! assert_eq!(top, vec![8, 5]);
//! ```
//!
//! A few names differ from their query-language spelling because slices (or
//! `Ord`) already have a method of that name: `first_item`, `last_item`,
//! `minimum`, `maximum`, `contains_element`.
//!
//! Set algebra, `distinct`, and joins run with `QueryConfig::default()`; the
//! `*_with` free functions in each module take an explicit config.

use std::hash::Hash;
use std::ops::Add;

use num_traits::{ToPrimitive, Zero};
use seqquery_core::error::Result;

use crate::join::Grouping;
use crate::sort::SortSpec;
use crate::{aggregate, element, filter, join, map, set, sort, zip};

pub trait Sequence {
    type Item;

    fn as_items(&self) -> &[Self::Item];

    // ---- reducers ----

    /// Seedless left fold; `EmptySequence` when empty.
    fn aggregate(&self, f: impl FnMut(Self::Item, &Self::Item) -> Self::Item) -> Result<Self::Item>
    where
        Self::Item: Clone,
    {
        aggregate::aggregate(self.as_items(), f)
    }

    fn aggregate_with<U>(&self, seed: U, f: impl FnMut(U, &Self::Item) -> U) -> U {
        aggregate::aggregate_with(self.as_items(), seed, f)
    }

    fn count(&self) -> usize {
        aggregate::count(self.as_items())
    }

    fn count_where(&self, pred: impl FnMut(&Self::Item) -> bool) -> usize {
        aggregate::count_where(self.as_items(), pred)
    }

    fn sum(&self) -> Self::Item
    where
        Self::Item: Clone + Zero + Add<Output = Self::Item>,
    {
        aggregate::sum(self.as_items())
    }

    fn sum_of<N: Zero + Add<Output = N>>(&self, f: impl FnMut(&Self::Item) -> N) -> N {
        aggregate::sum_of(self.as_items(), f)
    }

    fn minimum(&self) -> Result<Self::Item>
    where
        Self::Item: Clone + PartialOrd,
    {
        aggregate::minimum(self.as_items())
    }

    fn maximum(&self) -> Result<Self::Item>
    where
        Self::Item: Clone + PartialOrd,
    {
        aggregate::maximum(self.as_items())
    }

    fn minimum_of<K: PartialOrd>(&self, f: impl FnMut(&Self::Item) -> K) -> Result<K> {
        aggregate::minimum_of(self.as_items(), f)
    }

    fn maximum_of<K: PartialOrd>(&self, f: impl FnMut(&Self::Item) -> K) -> Result<K> {
        aggregate::maximum_of(self.as_items(), f)
    }

    /// Mean as `f64`; `0.0` for an empty sequence.
    fn average(&self) -> f64
    where
        Self::Item: ToPrimitive,
    {
        aggregate::average(self.as_items())
    }

    fn average_of(&self, f: impl FnMut(&Self::Item) -> f64) -> f64 {
        aggregate::average_of(self.as_items(), f)
    }

    // ---- filtering / projection ----

    #[doc(alias = "where")]
    fn filter(&self, pred: impl FnMut(&Self::Item) -> bool) -> Vec<Self::Item>
    where
        Self::Item: Clone,
    {
        filter::filter(self.as_items(), pred)
    }

    fn filter_indexed(
        &self,
        pred: impl FnMut(&Self::Item, usize, &[Self::Item]) -> bool,
    ) -> Vec<Self::Item>
    where
        Self::Item: Clone,
    {
        filter::filter_indexed(self.as_items(), pred)
    }

    fn select<U>(&self, f: impl FnMut(&Self::Item) -> U) -> Vec<U> {
        map::select(self.as_items(), f)
    }

    fn select_indexed<U>(&self, f: impl FnMut(&Self::Item, usize, &[Self::Item]) -> U) -> Vec<U> {
        map::select_indexed(self.as_items(), f)
    }

    fn select_many<I: IntoIterator>(&self, f: impl FnMut(&Self::Item) -> I) -> Vec<I::Item> {
        map::select_many(self.as_items(), f)
    }

    fn cast<U>(&self) -> Vec<U>
    where
        Self::Item: Clone + Into<U>,
    {
        map::cast(self.as_items())
    }

    fn take(&self, n: isize) -> Vec<Self::Item>
    where
        Self::Item: Clone,
    {
        filter::take(self.as_items(), n)
    }

    fn skip(&self, n: isize) -> Vec<Self::Item>
    where
        Self::Item: Clone,
    {
        filter::skip(self.as_items(), n)
    }

    fn distinct(&self) -> Vec<Self::Item>
    where
        Self::Item: Clone + Eq + Hash,
    {
        filter::distinct(self.as_items())
    }

    // ---- ordering ----

    fn order_by<K: Ord>(&self, key: impl FnMut(&Self::Item) -> K) -> Vec<Self::Item>
    where
        Self::Item: Clone,
    {
        sort::order_by(self.as_items(), key)
    }

    fn order_by_descending<K: Ord>(&self, key: impl FnMut(&Self::Item) -> K) -> Vec<Self::Item>
    where
        Self::Item: Clone,
    {
        sort::order_by_descending(self.as_items(), key)
    }

    fn then_by<K1: Ord, K2: Ord>(
        &self,
        primary: impl FnMut(&Self::Item) -> K1,
        secondary: impl FnMut(&Self::Item) -> K2,
    ) -> Vec<Self::Item>
    where
        Self::Item: Clone,
    {
        sort::then_by(self.as_items(), primary, secondary)
    }

    fn then_by_descending<K1: Ord, K2: Ord>(
        &self,
        primary: impl FnMut(&Self::Item) -> K1,
        secondary: impl FnMut(&Self::Item) -> K2,
    ) -> Vec<Self::Item>
    where
        Self::Item: Clone,
    {
        sort::then_by_descending(self.as_items(), primary, secondary)
    }

    fn sort_with(&self, spec: &SortSpec<'_, Self::Item>) -> Vec<Self::Item>
    where
        Self::Item: Clone,
    {
        spec.sort(self.as_items())
    }

    // ---- set algebra ----

    fn union(&self, other: &[Self::Item]) -> Vec<Self::Item>
    where
        Self::Item: Clone + Eq + Hash,
    {
        set::union(self.as_items(), other)
    }

    fn intersect(&self, other: &[Self::Item]) -> Vec<Self::Item>
    where
        Self::Item: Clone + Eq + Hash,
    {
        set::intersect(self.as_items(), other)
    }

    fn except(&self, other: &[Self::Item]) -> Vec<Self::Item>
    where
        Self::Item: Clone + Eq + Hash,
    {
        set::except(self.as_items(), other)
    }

    fn contains_element(&self, item: &Self::Item) -> bool
    where
        Self::Item: PartialEq,
    {
        set::contains(self.as_items(), item)
    }

    // ---- relational composition ----

    fn group_by<K: Eq + Hash>(&self, key: impl FnMut(&Self::Item) -> K) -> Grouping<K, Self::Item>
    where
        Self::Item: Clone,
    {
        join::group_by(self.as_items(), key)
    }

    fn group_by_select<K: Eq + Hash, V>(
        &self,
        key: impl FnMut(&Self::Item) -> K,
        value: impl FnMut(&Self::Item) -> V,
    ) -> Grouping<K, V> {
        join::group_by_select(self.as_items(), key, value)
    }

    fn inner_join<U, K: Eq + Hash, R>(
        &self,
        other: &[U],
        self_key: impl FnMut(&Self::Item) -> K,
        other_key: impl FnMut(&U) -> K,
        result: impl FnMut(&Self::Item, &U) -> R,
    ) -> Vec<R> {
        join::inner_join(self.as_items(), other, self_key, other_key, result)
    }

    fn group_join<U, K: Eq + Hash, R>(
        &self,
        other: &[U],
        self_key: impl FnMut(&Self::Item) -> K,
        other_key: impl FnMut(&U) -> K,
        result: impl FnMut(&Self::Item, &[&U]) -> R,
    ) -> Vec<R> {
        join::group_join(self.as_items(), other, self_key, other_key, result)
    }

    fn zip_with<U, R>(&self, other: &[U], result: impl FnMut(&Self::Item, &U) -> R) -> Vec<R> {
        zip::zip_with(self.as_items(), other, result)
    }

    // ---- element selection ----

    fn first_item(&self) -> Result<&Self::Item> {
        element::first(self.as_items())
    }

    fn first_where(&self, pred: impl FnMut(&Self::Item) -> bool) -> Result<&Self::Item> {
        element::first_where(self.as_items(), pred)
    }

    fn first_or(&self, default: Self::Item) -> Self::Item
    where
        Self::Item: Clone,
    {
        element::first_or(self.as_items(), default)
    }

    fn first_where_or(
        &self,
        pred: impl FnMut(&Self::Item) -> bool,
        default: Self::Item,
    ) -> Self::Item
    where
        Self::Item: Clone,
    {
        element::first_where_or(self.as_items(), pred, default)
    }

    fn first_or_default(&self) -> Self::Item
    where
        Self::Item: Clone + Default,
    {
        element::first_or_default(self.as_items())
    }

    fn last_item(&self) -> Result<&Self::Item> {
        element::last(self.as_items())
    }

    fn last_where(&self, pred: impl FnMut(&Self::Item) -> bool) -> Result<&Self::Item> {
        element::last_where(self.as_items(), pred)
    }

    fn last_or(&self, default: Self::Item) -> Self::Item
    where
        Self::Item: Clone,
    {
        element::last_or(self.as_items(), default)
    }

    fn last_where_or(
        &self,
        pred: impl FnMut(&Self::Item) -> bool,
        default: Self::Item,
    ) -> Self::Item
    where
        Self::Item: Clone,
    {
        element::last_where_or(self.as_items(), pred, default)
    }

    fn last_or_default(&self) -> Self::Item
    where
        Self::Item: Clone + Default,
    {
        element::last_or_default(self.as_items())
    }

    fn any(&self) -> bool {
        element::any(self.as_items())
    }

    fn any_where(&self, pred: impl FnMut(&Self::Item) -> bool) -> bool {
        element::any_where(self.as_items(), pred)
    }

    fn all(&self, pred: impl FnMut(&Self::Item) -> bool) -> bool {
        element::all(self.as_items(), pred)
    }
}

impl<T> Sequence for [T] {
    type Item = T;

    fn as_items(&self) -> &[T] {
        self
    }
}
