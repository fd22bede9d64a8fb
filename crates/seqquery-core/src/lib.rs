#![forbid(unsafe_code)]
//! seqquery-core: error taxonomy, configuration, and key types shared by the
//! query operators.
//!
//! No operators live here; see `seqquery-operators`.

pub mod config;
pub mod error;
pub mod prelude;
pub mod types;

pub use config::{QueryConfig, Strategy};
pub use error::{QueryError, Result};
pub use types::{Identity, Scalar};
