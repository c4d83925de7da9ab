//! The three-valued truth domain.
//!
//! Every belief and every logic operand in trireason is a `TrinaryValue`.
//! The domain is closed: integers outside {-1, 0, 1} are rejected at
//! construction time, so the primitives never see a malformed operand.

use std::fmt;
use std::ops::Neg;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A truth value in {-1 (false), 0 (unknown), +1 (true)}.
///
/// The derived ordering follows the numeric encoding, so
/// `False < Unknown < True`.
///
/// # Examples
///
/// ```
/// use trireason::TrinaryValue;
///
/// let v = TrinaryValue::new(-1).unwrap();
/// assert_eq!(v, TrinaryValue::False);
/// assert_eq!(-v, TrinaryValue::True);
/// assert!(TrinaryValue::new(2).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum TrinaryValue {
    /// -1
    False,
    /// 0
    Unknown,
    /// +1
    True,
}

impl TrinaryValue {
    /// All three values in ascending order.
    pub const ALL: [Self; 3] = [Self::False, Self::Unknown, Self::True];

    /// Creates a value from its integer encoding.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidTrinaryValue` for anything outside {-1, 0, 1}.
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        match value {
            -1 => Ok(Self::False),
            0 => Ok(Self::Unknown),
            1 => Ok(Self::True),
            other => Err(ValidationError::InvalidTrinaryValue { value: other }),
        }
    }

    /// Returns the integer encoding.
    #[must_use]
    pub const fn as_i8(self) -> i8 {
        match self {
            Self::False => -1,
            Self::Unknown => 0,
            Self::True => 1,
        }
    }

    /// Returns true for the unknown value.
    #[must_use]
    pub const fn is_unknown(self) -> bool {
        matches!(self, Self::Unknown)
    }

    /// Returns true for either certain value.
    #[must_use]
    pub const fn is_certain(self) -> bool {
        !self.is_unknown()
    }

    /// Absolute value of the encoding: 1.0 when certain, 0.0 when unknown.
    #[must_use]
    pub const fn certainty(self) -> f64 {
        if self.is_unknown() {
            0.0
        } else {
            1.0
        }
    }

    /// Uncertainty content: 1.0 for unknown, 0.0 otherwise.
    #[must_use]
    pub const fn uncertainty(self) -> f64 {
        if self.is_unknown() {
            1.0
        } else {
            0.0
        }
    }

    /// Negation preserving uncertainty.
    #[must_use]
    pub const fn negate(self) -> Self {
        match self {
            Self::False => Self::True,
            Self::Unknown => Self::Unknown,
            Self::True => Self::False,
        }
    }
}

impl Default for TrinaryValue {
    fn default() -> Self {
        Self::Unknown
    }
}

impl Neg for TrinaryValue {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl fmt::Display for TrinaryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::False => write!(f, "-1"),
            Self::Unknown => write!(f, "0"),
            Self::True => write!(f, "+1"),
        }
    }
}

impl TryFrom<i64> for TrinaryValue {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<i32> for TrinaryValue {
    type Error = ValidationError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(i64::from(value))
    }
}

impl TryFrom<i8> for TrinaryValue {
    type Error = ValidationError;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        Self::new(i64::from(value))
    }
}

impl From<TrinaryValue> for i64 {
    fn from(value: TrinaryValue) -> Self {
        i64::from(value.as_i8())
    }
}

impl From<bool> for TrinaryValue {
    fn from(value: bool) -> Self {
        if value {
            Self::True
        } else {
            Self::False
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_domain() {
        assert_eq!(TrinaryValue::new(-1).unwrap(), TrinaryValue::False);
        assert_eq!(TrinaryValue::new(0).unwrap(), TrinaryValue::Unknown);
        assert_eq!(TrinaryValue::new(1).unwrap(), TrinaryValue::True);
    }

    #[test]
    fn test_new_rejects_outside_domain() {
        for raw in [-2_i64, 2, 42, i64::MIN, i64::MAX] {
            let err = TrinaryValue::new(raw).unwrap_err();
            assert_eq!(err, ValidationError::InvalidTrinaryValue { value: raw });
        }
    }

    #[test]
    fn test_ordering_matches_encoding() {
        assert!(TrinaryValue::False < TrinaryValue::Unknown);
        assert!(TrinaryValue::Unknown < TrinaryValue::True);
    }

    #[test]
    fn test_negation() {
        for v in TrinaryValue::ALL {
            assert_eq!(i64::from(-v), -i64::from(v));
        }
    }

    #[test]
    fn test_certainty_and_uncertainty_are_complements() {
        for v in TrinaryValue::ALL {
            assert!((v.certainty() + v.uncertainty() - 1.0).abs() < f64::EPSILON);
        }
        assert!((TrinaryValue::Unknown.uncertainty() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_display() {
        assert_eq!(TrinaryValue::True.to_string(), "+1");
        assert_eq!(TrinaryValue::False.to_string(), "-1");
        assert_eq!(TrinaryValue::Unknown.to_string(), "0");
    }

    #[test]
    fn test_serde_uses_integer_encoding() {
        let json = serde_json::to_string(&TrinaryValue::False).unwrap();
        assert_eq!(json, "-1");
        let back: TrinaryValue = serde_json::from_str("1").unwrap();
        assert_eq!(back, TrinaryValue::True);
        assert!(serde_json::from_str::<TrinaryValue>("3").is_err());
    }
}
