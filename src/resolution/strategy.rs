//! Severity-specific resolution strategies.
//!
//! Each severity maps to exactly one strategy. Strategies are pure: they
//! propose a value and an entropy cost but never touch the belief network.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::conflict::{Contradiction, Severity};
use crate::value::TrinaryValue;

/// Outcome proposed by a strategy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Resolution {
    /// Value the strategy settles on.
    pub value: TrinaryValue,
    /// Certainty sacrificed to reach it.
    pub entropy_cost: f64,
}

/// How a contradiction of a given severity is settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionStrategy {
    /// Keep unknown; nothing is lost.
    PreserveUncertainty,
    /// Adopt whichever side is certain.
    CommitToCertain,
    /// Retreat from direct opposition to unknown.
    RetreatToUnknown,
    /// Force unknown at maximal cost.
    ProtectIntegrity,
}

impl ResolutionStrategy {
    /// The strategy for a severity.
    #[must_use]
    pub const fn for_severity(severity: Severity) -> Self {
        match severity {
            Severity::Soft => Self::PreserveUncertainty,
            Severity::Medium => Self::CommitToCertain,
            Severity::Hard => Self::RetreatToUnknown,
            Severity::Critical => Self::ProtectIntegrity,
        }
    }

    /// Entropy cost charged by this strategy.
    #[must_use]
    pub const fn entropy_cost(self) -> f64 {
        match self {
            Self::PreserveUncertainty => 0.0,
            Self::CommitToCertain => 0.3,
            Self::RetreatToUnknown => 0.5,
            Self::ProtectIntegrity => 1.0,
        }
    }

    /// Short stable identifier suitable for logging.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::PreserveUncertainty => "preserve_uncertainty",
            Self::CommitToCertain => "commit_to_certain",
            Self::RetreatToUnknown => "retreat_to_unknown",
            Self::ProtectIntegrity => "protect_integrity",
        }
    }

    /// Applies the strategy to a contradiction.
    #[must_use]
    pub fn apply(self, contradiction: &Contradiction) -> Resolution {
        let value = match self {
            Self::CommitToCertain => contradiction
                .certain_value()
                .unwrap_or(TrinaryValue::Unknown),
            Self::PreserveUncertainty | Self::RetreatToUnknown | Self::ProtectIntegrity => {
                TrinaryValue::Unknown
            }
        };
        Resolution {
            value,
            entropy_cost: self.entropy_cost(),
        }
    }
}

impl fmt::Display for ResolutionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolves a single contradiction with the strategy for its severity.
#[must_use]
pub fn resolve(contradiction: &Contradiction) -> Resolution {
    ResolutionStrategy::for_severity(contradiction.severity).apply(contradiction)
}

/// Total entropy cost of resolving a batch, without resolving it.
#[must_use]
pub fn total_entropy_cost(contradictions: &[Contradiction]) -> f64 {
    contradictions.iter().map(|c| resolve(c).entropy_cost).sum()
}
