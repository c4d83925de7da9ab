//! Contradiction record types.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::value::TrinaryValue;

/// Unique identifier for a contradiction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContradictionId(Uuid);

impl ContradictionId {
    /// Creates a new random contradiction ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ContradictionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ContradictionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How serious a contradiction is.
///
/// The derived ordering is the resolution priority: `Soft < Medium < Hard < Critical`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Both observations are unknown.
    Soft,
    /// One observation is certain, the other unknown.
    Medium,
    /// Direct opposition between certain observations.
    Hard,
    /// System-threatening inconsistency. Never produced by detection;
    /// callers escalate to it explicitly.
    Critical,
}

impl Severity {
    /// All severities, lowest first.
    pub const ALL: [Self; 4] = [Self::Soft, Self::Medium, Self::Hard, Self::Critical];

    /// Numeric rank, 1 for soft through 4 for critical.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Soft => 1,
            Self::Medium => 2,
            Self::Hard => 3,
            Self::Critical => 4,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Soft => write!(f, "soft"),
            Self::Medium => write!(f, "medium"),
            Self::Hard => write!(f, "hard"),
            Self::Critical => write!(f, "critical"),
        }
    }
}

/// A detected conflict between two named belief observations.
///
/// The record references beliefs by name only; it does not own them.
/// Once created it is never altered except for `resolution_attempts`,
/// which the resolution engine bumps each time it processes the record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contradiction {
    /// Unique identifier for this contradiction.
    pub id: ContradictionId,

    /// Name of the first (existing) belief.
    pub belief_a: String,

    /// Name of the second (incoming) belief.
    pub belief_b: String,

    /// Value observed for `belief_a`.
    pub value_a: TrinaryValue,

    /// Value observed for `belief_b`.
    pub value_b: TrinaryValue,

    /// Severity classification.
    pub severity: Severity,

    /// Creation marker. Zero until an engine files the record, then a
    /// per-engine monotonic sequence number.
    pub sequence: u64,

    /// Free-form context.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub context: String,

    /// Number of times the record has been processed.
    pub resolution_attempts: u32,
}

impl Contradiction {
    /// Creates a contradiction with a placeholder creation marker.
    #[must_use]
    pub fn new(
        belief_a: impl Into<String>,
        value_a: TrinaryValue,
        belief_b: impl Into<String>,
        value_b: TrinaryValue,
        severity: Severity,
    ) -> Self {
        Self {
            id: ContradictionId::new(),
            belief_a: belief_a.into(),
            belief_b: belief_b.into(),
            value_a,
            value_b,
            severity,
            sequence: 0,
            context: String::new(),
            resolution_attempts: 0,
        }
    }

    /// Attaches context text.
    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = context.into();
        self
    }

    /// Raises severity to at least `severity`. Never lowers it.
    #[must_use]
    pub fn escalate(mut self, severity: Severity) -> Self {
        self.severity = self.severity.max(severity);
        self
    }

    /// Returns true if either side refers to `name`.
    #[must_use]
    pub fn involves(&self, name: &str) -> bool {
        self.belief_a == name || self.belief_b == name
    }

    /// The certain operand, preferring side A. `None` when both are unknown.
    #[must_use]
    pub fn certain_value(&self) -> Option<TrinaryValue> {
        if self.value_a.is_certain() {
            Some(self.value_a)
        } else if self.value_b.is_certain() {
            Some(self.value_b)
        } else {
            None
        }
    }
}

impl PartialEq for Contradiction {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Contradiction {}

impl std::hash::Hash for Contradiction {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
