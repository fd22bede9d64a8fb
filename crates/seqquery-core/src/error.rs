use thiserror::Error;

/// Canonical result for query operations.
pub type Result<T> = std::result::Result<T, QueryError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The operation needs at least one element and the sequence had none.
    #[error("{op}: sequence contains no elements")]
    EmptySequence { op: &'static str },

    /// The sequence was non-empty but no element satisfied the predicate.
    #[error("{op}: no element satisfies the predicate")]
    NoMatch { op: &'static str },

    #[error("Unsupported key: {0}")]
    UnsupportedKey(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Invalid JSON: {0}")]
    InvalidJson(String),
}

impl QueryError {
    pub fn is_empty_sequence(&self) -> bool {
        matches!(self, QueryError::EmptySequence { .. })
    }

    pub fn is_no_match(&self) -> bool {
        matches!(self, QueryError::NoMatch { .. })
    }

    /// Name of the operation that raised the error, when it came from one.
    pub fn op(&self) -> Option<&'static str> {
        match self {
            QueryError::EmptySequence { op } | QueryError::NoMatch { op } => Some(op),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for QueryError {
    fn from(e: serde_json::Error) -> Self {
        QueryError::InvalidJson(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_are_distinguishable() {
        let empty = QueryError::EmptySequence { op: "first" };
        let none = QueryError::NoMatch { op: "first" };
        assert!(empty.is_empty_sequence());
        assert!(!empty.is_no_match());
        assert!(none.is_no_match());
        assert_ne!(empty, none);
        assert_eq!(empty.op(), Some("first"));
        assert_eq!(QueryError::Config("x".into()).op(), None);
    }

    #[test]
    fn display_names_the_operation() {
        let err = QueryError::EmptySequence { op: "maximum" };
        assert_eq!(err.to_string(), "maximum: sequence contains no elements");
    }
}
