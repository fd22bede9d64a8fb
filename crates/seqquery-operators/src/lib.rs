#![forbid(unsafe_code)]
//! seqquery-operators: query operators over in-memory sequences
//! (filter/select/sort/set/join/group/aggregate).
//!
//! Design intent:
//! - Pure and synchronous. Every operator evaluates eagerly and never mutates
//!   its input; sequence-producing operators return a new `Vec`.
//! - Each operator is a free function in its module; `Sequence` exposes the
//!   same operators as methods on slices.
//! - Operators that look up equal elements (set algebra, `distinct`, joins)
//!   pick a linear or hashed strategy through `plan`, with identical output.

pub mod plan;
pub mod traits;

pub mod aggregate;
pub mod element;
pub mod factory;
pub mod filter;
pub mod map;
pub mod set;
pub mod zip;

pub mod join;
pub mod sort;

pub use factory::{range, repeat};
pub use join::Grouping;
pub use plan::OpPlan;
pub use sort::SortSpec;
pub use traits::Sequence;
