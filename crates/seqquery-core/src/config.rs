//! Query configuration that downstream crates can serialize/deserialize.

use serde::{Deserialize, Serialize};

use crate::error::{QueryError, Result};

/// How set algebra, `distinct`, and joins look up equal elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Linear scans / nested loops. No hashing, no auxiliary allocation.
    Linear,
    /// Hash sets / grouped hash join.
    Hashed,
}

impl std::str::FromStr for Strategy {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linear" => Ok(Strategy::Linear),
            "hashed" | "hash" => Ok(Strategy::Hashed),
            other => Err(QueryError::Config(format!("unknown strategy '{}'", other))),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryConfig {
    /// Work size at which the hashed strategy takes over. For set operations
    /// this is the combined input length; for joins, the product of both sides.
    pub hash_threshold: usize,

    /// Optional override of the threshold decision.
    pub force_strategy: Option<Strategy>,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            hash_threshold: 32,
            force_strategy: None,
        }
    }
}

impl QueryConfig {
    /// Create a config from environment variables, falling back to defaults.
    ///
    /// Environment variables:
    /// - `SEQQUERY_HASH_THRESHOLD`: work size at which hashing is used
    /// - `SEQQUERY_FORCE_STRATEGY`: `linear` or `hashed`
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(s) = std::env::var("SEQQUERY_HASH_THRESHOLD") {
            if let Ok(v) = s.parse::<usize>() {
                cfg.hash_threshold = v;
            }
        }

        if let Ok(s) = std::env::var("SEQQUERY_FORCE_STRATEGY") {
            if let Ok(v) = s.parse::<Strategy>() {
                cfg.force_strategy = Some(v);
            }
        }

        cfg
    }

    /// Like [`QueryConfig::from_env`], but unparsable values are errors.
    pub fn try_from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut cfg = Self::default();

        if let Some(s) = lookup("SEQQUERY_HASH_THRESHOLD") {
            cfg.hash_threshold = s.trim().parse::<usize>().map_err(|_| {
                QueryError::Config(format!("SEQQUERY_HASH_THRESHOLD: '{}' is not a count", s))
            })?;
        }

        if let Some(s) = lookup("SEQQUERY_FORCE_STRATEGY") {
            cfg.force_strategy = Some(s.parse::<Strategy>()?);
        }

        Ok(cfg)
    }

    pub fn with_hash_threshold(mut self, threshold: usize) -> Self {
        self.hash_threshold = threshold;
        self
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.force_strategy = Some(strategy);
        self
    }

    /// Pick a strategy for an operation whose work size is `work`.
    pub fn strategy_for(&self, work: usize) -> Strategy {
        match self.force_strategy {
            Some(s) => s,
            None if work >= self.hash_threshold => Strategy::Hashed,
            None => Strategy::Linear,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn threshold_picks_strategy() {
        let cfg = QueryConfig::default().with_hash_threshold(10);
        assert_eq!(cfg.strategy_for(9), Strategy::Linear);
        assert_eq!(cfg.strategy_for(10), Strategy::Hashed);
        let forced = cfg.with_strategy(Strategy::Linear);
        assert_eq!(forced.strategy_for(1_000), Strategy::Linear);
    }

    #[test]
    fn lookup_parses_values() {
        let vars: HashMap<&str, &str> = [
            ("SEQQUERY_HASH_THRESHOLD", "128"),
            ("SEQQUERY_FORCE_STRATEGY", "Hashed"),
        ]
        .into_iter()
        .collect();
        let cfg = QueryConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string())).unwrap();
        assert_eq!(cfg.hash_threshold, 128);
        assert_eq!(cfg.force_strategy, Some(Strategy::Hashed));
    }

    #[test]
    fn lookup_rejects_garbage() {
        let err = QueryConfig::from_lookup(|k| {
            (k == "SEQQUERY_HASH_THRESHOLD").then(|| "lots".to_string())
        })
        .unwrap_err();
        assert!(matches!(err, QueryError::Config(_)));

        let err = QueryConfig::from_lookup(|k| {
            (k == "SEQQUERY_FORCE_STRATEGY").then(|| "quantum".to_string())
        })
        .unwrap_err();
        assert!(matches!(err, QueryError::Config(_)));
    }

    #[test]
    fn config_serde_roundtrip() {
        let cfg = QueryConfig::default().with_strategy(Strategy::Linear);
        let json = serde_json::to_string(&cfg).unwrap();
        assert!(json.contains("\"linear\""));
        let back: QueryConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.force_strategy, Some(Strategy::Linear));
        assert_eq!(back.hash_threshold, 32);
    }
}
