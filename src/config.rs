//! Engine configuration.

use serde::{Deserialize, Serialize};

use crate::conflict::SeverityPolicy;
use crate::error::ValidationError;

/// Configuration for a [`ResolutionEngine`](crate::ResolutionEngine).
///
/// Every field has a default, so a partial JSON document is enough:
///
/// ```
/// use trireason::EngineConfig;
///
/// let cfg = EngineConfig::from_json_str(r#"{ "strict_confidence": true }"#).unwrap();
/// assert!(cfg.strict_confidence);
/// assert_eq!(cfg.default_confidence, 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Confidence recorded by [`assert_belief`](crate::ResolutionEngine::assert_belief).
    pub default_confidence: f64,

    /// Reject confidences outside [0.0, 1.0] instead of storing them as given.
    pub strict_confidence: bool,

    /// Severity assigned to each kind of disagreement.
    pub severity_policy: SeverityPolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_confidence: 1.0,
            strict_confidence: false,
            severity_policy: SeverityPolicy::default(),
        }
    }
}

impl EngineConfig {
    /// Parses a JSON document and validates it.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidConfig` if the document does not
    /// parse, or if it fails [`validate`](Self::validate).
    pub fn from_json_str(json: &str) -> Result<Self, ValidationError> {
        let cfg: Self = serde_json::from_str(json).map_err(|e| ValidationError::InvalidConfig {
            reason: e.to_string(),
        })?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Checks internal consistency.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidConfig` if `default_confidence` is
    /// not finite, or falls outside [0.0, 1.0] while strict confidence is on.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.default_confidence.is_finite() {
            return Err(ValidationError::InvalidConfig {
                reason: "default_confidence must be finite".to_string(),
            });
        }
        if self.strict_confidence && !(0.0..=1.0).contains(&self.default_confidence) {
            return Err(ValidationError::InvalidConfig {
                reason: format!(
                    "default_confidence {} is outside [0.0, 1.0] with strict_confidence enabled",
                    self.default_confidence
                ),
            });
        }
        Ok(())
    }

    /// Applies the confidence policy to a caller-supplied value.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::ConfidenceOutOfRange` in strict mode when
    /// the value is outside [0.0, 1.0] or not finite.
    pub fn check_confidence(&self, confidence: f64) -> Result<f64, ValidationError> {
        if self.strict_confidence && !(0.0..=1.0).contains(&confidence) {
            return Err(ValidationError::ConfidenceOutOfRange { value: confidence });
        }
        Ok(confidence)
    }
}
