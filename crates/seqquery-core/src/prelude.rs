//! Convenient re-exports for downstream crates.

pub use crate::config::{QueryConfig, Strategy};
pub use crate::error::{QueryError, Result};
pub use crate::types::{Identity, Scalar};
pub use ordered_float::OrderedFloat;
