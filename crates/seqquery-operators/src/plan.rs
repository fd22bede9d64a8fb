//! Strategy planning for operators that look up equal elements.
//!
//! Set algebra, `distinct`, and joins have a linear (nested-loop) form and a
//! hashed form. Both produce identical output; the plan only decides which
//! one runs, based on `QueryConfig`.

use seqquery_core::config::{QueryConfig, Strategy};
use serde::Serialize;

/// Decision record for one operator invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OpPlan {
    pub op: &'static str,
    pub strategy: Strategy,
    /// Work size the decision was based on.
    pub work: usize,
}

impl OpPlan {
    pub fn new(op: &'static str, work: usize, config: &QueryConfig) -> Self {
        let plan = Self {
            op,
            strategy: config.strategy_for(work),
            work,
        };
        plan.trace();
        plan
    }

    pub fn is_hashed(&self) -> bool {
        self.strategy == Strategy::Hashed
    }

    #[cfg(feature = "tracing")]
    fn trace(&self) {
        tracing::trace!(op = self.op, work = self.work, strategy = ?self.strategy, "query plan");
    }

    #[cfg(not(feature = "tracing"))]
    fn trace(&self) { /* no-op */
    }
}

/// Set operations scan `left` once per element of `right` (or vice versa), so
/// the combined length is the work size.
pub fn plan_set(op: &'static str, left: usize, right: usize, config: &QueryConfig) -> OpPlan {
    OpPlan::new(op, left.saturating_add(right), config)
}

/// Joins compare every pair, so the product of both sides is the work size.
pub fn plan_join(op: &'static str, left: usize, right: usize, config: &QueryConfig) -> OpPlan {
    OpPlan::new(op, left.saturating_mul(right), config)
}
