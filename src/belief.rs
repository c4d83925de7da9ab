//! Named trinary beliefs.

use serde::{Deserialize, Serialize};

use crate::value::TrinaryValue;

/// A named trinary assertion with an associated confidence.
///
/// Beliefs are created on first assertion and overwritten (not merged)
/// on every later assertion of the same name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Belief {
    /// Unique name within a network.
    pub name: String,

    /// Current truth assignment.
    pub value: TrinaryValue,

    /// Caller-supplied confidence. Conventionally in [0.0, 1.0].
    pub confidence: f64,

    /// Number of times the belief has been overwritten.
    pub revision: u32,
}

impl Belief {
    /// Creates a first-revision belief.
    #[must_use]
    pub fn new(name: impl Into<String>, value: TrinaryValue, confidence: f64) -> Self {
        Self {
            name: name.into(),
            value,
            confidence,
            revision: 0,
        }
    }

    /// Replaces value and confidence, bumping the revision.
    pub(crate) fn overwrite(&mut self, value: TrinaryValue, confidence: f64) {
        self.value = value;
        self.confidence = confidence;
        self.revision += 1;
    }

    /// Returns true if the current value is unknown.
    #[must_use]
    pub const fn is_unknown(&self) -> bool {
        self.value.is_unknown()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overwrite_replaces_and_bumps_revision() {
        let mut b = Belief::new("door_open", TrinaryValue::True, 0.9);
        assert_eq!(b.revision, 0);
        b.overwrite(TrinaryValue::Unknown, 0.2);
        assert_eq!(b.value, TrinaryValue::Unknown);
        assert!((b.confidence - 0.2).abs() < f64::EPSILON);
        assert_eq!(b.revision, 1);
        assert!(b.is_unknown());
    }
}
