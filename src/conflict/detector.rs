//! Pairwise contradiction detection.
//!
//! Detection is a pure function of the two observations and a
//! [`SeverityPolicy`]. Equal values never conflict.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::conflict::{Contradiction, Severity};
use crate::error::ValidationError;
use crate::value::TrinaryValue;

/// Maps each kind of disagreement to a severity.
///
/// Policies are pure data so a detection result can be reproduced
/// deterministically from the same inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeverityPolicy {
    /// Both sides unknown.
    pub both_unknown: Severity,
    /// Exactly one side unknown.
    pub one_unknown: Severity,
    /// Opposite certain values.
    pub opposed: Severity,
}

impl Default for SeverityPolicy {
    fn default() -> Self {
        Self {
            both_unknown: Severity::Soft,
            one_unknown: Severity::Medium,
            opposed: Severity::Hard,
        }
    }
}

impl SeverityPolicy {
    /// Classifies a pair of values regardless of whether they are equal.
    ///
    /// Two certain values that are not opposite can only be equal in the
    /// closed trinary domain; such pairs are classified as `one_unknown`
    /// (partial disagreement) for completeness, though
    /// [`ContradictionDetector::detect`] never reports them.
    #[must_use]
    pub fn classify(&self, a: TrinaryValue, b: TrinaryValue) -> Severity {
        match (a.is_unknown(), b.is_unknown()) {
            (true, true) => self.both_unknown,
            (true, false) | (false, true) => self.one_unknown,
            (false, false) if a == -b => self.opposed,
            (false, false) => self.one_unknown,
        }
    }
}

/// Detects and classifies contradictions between belief observations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContradictionDetector {
    policy: SeverityPolicy,
}

impl ContradictionDetector {
    /// Creates a detector with the default policy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a detector with a custom policy.
    #[must_use]
    pub const fn with_policy(policy: SeverityPolicy) -> Self {
        Self { policy }
    }

    /// The policy in use.
    #[must_use]
    pub const fn policy(&self) -> &SeverityPolicy {
        &self.policy
    }

    /// Compares two observations.
    ///
    /// Returns `None` when the values are equal. Otherwise returns a
    /// contradiction classified by the policy, with a zero creation marker.
    #[must_use]
    pub fn detect(
        &self,
        name_a: &str,
        value_a: TrinaryValue,
        name_b: &str,
        value_b: TrinaryValue,
    ) -> Option<Contradiction> {
        if value_a == value_b {
            return None;
        }
        let severity = self.policy.classify(value_a, value_b);
        debug!(
            belief_a = name_a,
            belief_b = name_b,
            value_a = %value_a,
            value_b = %value_b,
            %severity,
            "contradiction detected"
        );
        Some(Contradiction::new(name_a, value_a, name_b, value_b, severity))
    }

    /// Like [`detect`](Self::detect), but with integer-encoded values.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidTrinaryValue` if either value is
    /// outside {-1, 0, 1}.
    pub fn detect_raw(
        &self,
        name_a: &str,
        value_a: i64,
        name_b: &str,
        value_b: i64,
    ) -> Result<Option<Contradiction>, ValidationError> {
        let value_a = TrinaryValue::new(value_a)?;
        let value_b = TrinaryValue::new(value_b)?;
        Ok(self.detect(name_a, value_a, name_b, value_b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use TrinaryValue::{False, True, Unknown};

    #[test]
    fn test_equal_values_never_conflict() {
        let d = ContradictionDetector::new();
        for v in TrinaryValue::ALL {
            assert!(d.detect("a", v, "b", v).is_none());
        }
    }

    #[test]
    fn test_opposition_is_hard() {
        let d = ContradictionDetector::new();
        let c = d.detect("a", True, "b", False).unwrap();
        assert_eq!(c.severity, Severity::Hard);
        assert_eq!(c.belief_a, "a");
        assert_eq!(c.value_b, False);
        assert_eq!(d.detect("a", False, "b", True).unwrap().severity, Severity::Hard);
    }

    #[test]
    fn test_one_unknown_is_medium() {
        let d = ContradictionDetector::new();
        for (a, b) in [(Unknown, True), (True, Unknown), (Unknown, False), (False, Unknown)] {
            assert_eq!(d.detect("a", a, "b", b).unwrap().severity, Severity::Medium);
        }
    }

    #[test]
    fn test_classify_both_unknown_is_soft() {
        assert_eq!(SeverityPolicy::default().classify(Unknown, Unknown), Severity::Soft);
        assert_eq!(SeverityPolicy::default().classify(True, False), Severity::Hard);
    }

    #[test]
    fn test_detect_leaves_placeholder_marker() {
        let c = ContradictionDetector::new().detect("x", Unknown, "y", True).unwrap();
        assert_eq!(c.sequence, 0);
        assert_eq!(c.resolution_attempts, 0);
    }

    #[test]
    fn test_custom_policy() {
        let policy = SeverityPolicy {
            opposed: Severity::Critical,
            ..SeverityPolicy::default()
        };
        let d = ContradictionDetector::with_policy(policy);
        assert_eq!(d.detect("a", True, "b", False).unwrap().severity, Severity::Critical);
        assert_eq!(d.detect("a", True, "b", Unknown).unwrap().severity, Severity::Medium);
    }

    #[test]
    fn test_detect_raw_validates() {
        let d = ContradictionDetector::new();
        assert!(d.detect_raw("a", 1, "b", 1).unwrap().is_none());
        assert_eq!(
            d.detect_raw("a", 1, "b", -1).unwrap().map(|c| c.severity),
            Some(Severity::Hard)
        );
        assert_eq!(
            d.detect_raw("a", 9, "b", 1).unwrap_err(),
            ValidationError::InvalidTrinaryValue { value: 9 }
        );
    }
}
