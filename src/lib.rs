#![forbid(unsafe_code)]
//! seqquery: declarative query operators over in-memory sequences.
//!
//! Facade over `seqquery-core` (errors, config, key types) and
//! `seqquery-operators` (the operators and the `Sequence` extension trait).

pub use seqquery_operators as operators;

pub use seqquery_core::{Identity, QueryConfig, QueryError, Result, Scalar, Strategy};
pub use seqquery_operators::{range, repeat, Grouping, Sequence, SortSpec};

pub mod prelude {
    //! Everything needed to write queries: `use seqquery::prelude::*;`
    pub use seqquery_core::prelude::*;
    pub use seqquery_operators::{range, repeat, Grouping, Sequence, SortSpec};
}
