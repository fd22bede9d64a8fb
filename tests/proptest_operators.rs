//! Property tests for query operators.
//!
//! Checks ordering stability, set-algebra laws, and that the linear and
//! hashed strategies always agree.

use proptest::prelude::*;
use std::collections::HashSet;

use seqquery::operators::filter::distinct_with;
use seqquery::operators::join::{group_join_with, inner_join_with};
use seqquery::operators::set::{except_with, intersect_with, union_with};
use seqquery::{QueryConfig, Sequence, SortSpec};

fn linear() -> QueryConfig {
    QueryConfig::default().with_strategy(seqquery::Strategy::Linear)
}

fn hashed() -> QueryConfig {
    QueryConfig::default().with_strategy(seqquery::Strategy::Hashed)
}

fn small_vec() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(0i32..12, 0..40)
}

proptest! {
    /// order_by is a stable sort: equal keys keep source order
    #[test]
    fn order_by_is_stable(values in prop::collection::vec((0u8..4, any::<u16>()), 0..60)) {
        let tagged: Vec<(u8, u16, usize)> = values
            .iter()
            .enumerate()
            .map(|(i, (k, v))| (*k, *v, i))
            .collect();
        let sorted = tagged.order_by(|t| t.0);

        prop_assert_eq!(sorted.len(), tagged.len());
        for w in sorted.windows(2) {
            prop_assert!(w[0].0 <= w[1].0);
            if w[0].0 == w[1].0 {
                prop_assert!(w[0].2 < w[1].2);
            }
        }
    }

    /// then_by equals a SortSpec with the same two keys
    #[test]
    fn then_by_matches_sort_spec(values in prop::collection::vec((0u8..3, 0u8..3), 0..40)) {
        let spec = SortSpec::by(|t: &(u8, u8)| t.0).then_by(|t| t.1);
        prop_assert_eq!(values.then_by(|t| t.0, |t| t.1), values.sort_with(&spec));
    }

    /// distinct keeps exactly one of each value, in first-occurrence order
    #[test]
    fn distinct_is_first_occurrence(values in small_vec()) {
        let d = values.distinct();
        let unique: HashSet<i32> = values.iter().copied().collect();
        prop_assert_eq!(d.len(), unique.len());
        for x in &d {
            let first = values.iter().position(|v| v == x).unwrap();
            let earlier: HashSet<i32> = values[..first].iter().copied().collect();
            prop_assert!(d.iter().take_while(|y| *y != x).all(|y| earlier.contains(y)));
        }
    }

    /// intersect and except partition the left side
    #[test]
    fn intersect_except_partition(a in small_vec(), b in small_vec()) {
        let inter = a.intersect(&b);
        let diff = a.except(&b);
        prop_assert_eq!(inter.len() + diff.len(), a.len());
        prop_assert!(inter.iter().all(|x| b.contains(x)));
        prop_assert!(diff.iter().all(|x| !b.contains(x)));
    }

    /// union is distinct(a ++ b)
    #[test]
    fn union_is_distinct_concat(a in small_vec(), b in small_vec()) {
        let mut concat = a.clone();
        concat.extend_from_slice(&b);
        prop_assert_eq!(a.union(&b), concat.distinct());
    }

    /// set operations give identical output under both strategies
    #[test]
    fn set_strategies_agree(a in small_vec(), b in small_vec()) {
        prop_assert_eq!(distinct_with(&a, &linear()), distinct_with(&a, &hashed()));
        prop_assert_eq!(union_with(&a, &b, &linear()), union_with(&a, &b, &hashed()));
        prop_assert_eq!(intersect_with(&a, &b, &linear()), intersect_with(&a, &b, &hashed()));
        prop_assert_eq!(except_with(&a, &b, &linear()), except_with(&a, &b, &hashed()));
    }

    /// joins give identical output under both strategies
    #[test]
    fn join_strategies_agree(a in small_vec(), b in small_vec()) {
        let pair = |x: &i32, y: &i32| (*x, *y);
        prop_assert_eq!(
            inner_join_with(&a, &b, |x| x % 5, |y| y % 5, pair, &linear()),
            inner_join_with(&a, &b, |x| x % 5, |y| y % 5, pair, &hashed())
        );
        let count = |_: &i32, ms: &[&i32]| ms.len();
        let lin = group_join_with(&a, &b, |x| x % 5, |y| y % 5, count, &linear());
        prop_assert_eq!(lin.len(), a.len());
        prop_assert_eq!(lin, group_join_with(&a, &b, |x| x % 5, |y| y % 5, count, &hashed()));
    }

    /// join output size equals the sum of group_join match counts
    #[test]
    fn join_size_matches_group_join(a in small_vec(), b in small_vec()) {
        let joined = a.inner_join(&b, |x| *x, |y| *y, |x, y| (*x, *y));
        let counts = a.group_join(&b, |x| *x, |y| *y, |_, ms| ms.len());
        prop_assert_eq!(joined.len(), counts.sum());
    }

    /// take(n) ++ skip(n) reproduces the input for any n
    #[test]
    fn take_skip_split(values in small_vec(), n in -5isize..50) {
        let mut rejoined = values.take(n);
        rejoined.extend(values.skip(n));
        prop_assert_eq!(rejoined, values);
    }
}
