//! Relational composition: inner join, group join, and grouping.
//!
//! Keys are compared with `Eq` on the selector's return type. Nothing is
//! coerced to strings, so `1` and `"1"` never land in the same bucket.

pub mod group;
pub mod hash;

pub use group::{group_by, group_by_select, Grouping};
pub use hash::{group_join, group_join_with, inner_join, inner_join_with};
