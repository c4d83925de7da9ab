//! System-level metrics derived from a belief network and its
//! contradiction history.
//!
//! All metrics are defined for the empty network and never fail.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::conflict::Severity;
use crate::value::TrinaryValue;

const RESOLVED_BONUS: f64 = 0.05;
const ACTIVE_PENALTY: f64 = 0.1;

const ACTIVE_WEIGHT: f64 = 0.2;
const RESOLVED_WEIGHT: f64 = 0.1;
const UNKNOWN_WEIGHT: f64 = 0.15;

const SOFT_ROUTING_THRESHOLD: usize = 3;

/// Counts a metric computation needs, captured at one point in time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkSnapshot {
    /// Number of beliefs.
    pub beliefs: usize,
    /// Beliefs currently valued unknown.
    pub unknown_beliefs: usize,
    /// Unresolved contradictions.
    pub active_contradictions: usize,
    /// Resolved contradictions.
    pub resolved_contradictions: usize,
}

impl NetworkSnapshot {
    /// Builds a snapshot from belief values and contradiction counts.
    #[must_use]
    pub fn from_values(
        values: impl IntoIterator<Item = TrinaryValue>,
        active_contradictions: usize,
        resolved_contradictions: usize,
    ) -> Self {
        let (beliefs, unknown_beliefs) = values
            .into_iter()
            .fold((0, 0), |(n, u), v| (n + 1, u + usize::from(v.is_unknown())));
        Self {
            beliefs,
            unknown_beliefs,
            active_contradictions,
            resolved_contradictions,
        }
    }

    /// Mean certainty plus a resolution bonus minus an unresolved penalty,
    /// clamped to [0.0, 1.0]. Exactly 1.0 for an empty network.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn coherence_score(&self) -> f64 {
        if self.beliefs == 0 {
            return 1.0;
        }
        let certain = (self.beliefs - self.unknown_beliefs) as f64;
        let base = certain / self.beliefs as f64;
        let bonus = self.resolved_contradictions as f64 * RESOLVED_BONUS;
        let penalty = self.active_contradictions as f64 * ACTIVE_PENALTY;
        (base + bonus - penalty).clamp(0.0, 1.0)
    }

    /// Additive, unbounded measure of how much contradiction handling the
    /// network is doing.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn enhancement_factor(&self) -> f64 {
        self.active_contradictions as f64 * ACTIVE_WEIGHT
            + self.resolved_contradictions as f64 * RESOLVED_WEIGHT
            + self.unknown_beliefs as f64 * UNKNOWN_WEIGHT
    }

    /// Fraction of beliefs valued unknown; 0.0 for an empty network.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn preserved_information(&self) -> f64 {
        self.unknown_beliefs as f64 / self.beliefs.max(1) as f64
    }
}

/// Processing substrate suggested for a batch of contradictions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Substrate {
    /// Many soft contradictions.
    Chemical,
    /// At least one hard contradiction.
    Quantum,
    /// Everything else.
    Electronic,
}

impl Substrate {
    /// Stable lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Chemical => "chemical",
            Self::Quantum => "quantum",
            Self::Electronic => "electronic",
        }
    }
}

impl fmt::Display for Substrate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Picks a substrate from a severity distribution.
///
/// More than three soft contradictions routes to `Chemical`; otherwise any
/// hard contradiction routes to `Quantum`; otherwise `Electronic`. The
/// soft check runs first. `_contradiction_count` does not affect the choice.
#[must_use]
pub fn route_substrate(
    _contradiction_count: usize,
    severity_counts: &HashMap<Severity, usize>,
) -> Substrate {
    let count = |s: Severity| severity_counts.get(&s).copied().unwrap_or(0);
    if count(Severity::Soft) > SOFT_ROUTING_THRESHOLD {
        Substrate::Chemical
    } else if count(Severity::Hard) > 0 {
        Substrate::Quantum
    } else {
        Substrate::Electronic
    }
}
