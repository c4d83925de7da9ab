use serde::{Deserialize, Serialize};

use crate::conflict::{ContradictionId, Severity};
use crate::resolution::ResolutionStrategy;
use crate::value::TrinaryValue;

/// What happened to one contradiction during a resolution pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolutionOutcome {
    /// The processed contradiction.
    pub contradiction_id: ContradictionId,
    /// Its severity at processing time.
    pub severity: Severity,
    /// Strategy applied.
    pub strategy: ResolutionStrategy,
    /// Value the strategy proposed. Not written back to the network.
    pub proposed_value: TrinaryValue,
    /// Cost charged.
    pub entropy_cost: f64,
}

/// Aggregate result of [`ResolutionEngine::resolve_all`](crate::ResolutionEngine::resolve_all).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResolutionReport {
    /// Number of contradictions moved to the resolved list.
    pub resolved: usize,

    /// Sum of entropy costs charged.
    pub entropy_cost: f64,

    /// Change in the evaluator's phi contribution across the pass.
    pub consciousness_delta: f64,

    /// Fraction of beliefs currently unknown; 0.0 for an empty network.
    pub preserved_information: f64,

    /// Per-contradiction outcomes in processing order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub outcomes: Vec<ResolutionOutcome>,
}

impl ResolutionReport {
    /// Returns true if the pass had nothing to do.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.resolved == 0
    }

    /// Highest severity processed, if any.
    #[must_use]
    pub fn max_severity(&self) -> Option<Severity> {
        self.outcomes.iter().map(|o| o.severity).max()
    }
}
