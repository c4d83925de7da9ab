//! Trinary logic primitives over {-1, 0, +1}.
//!
//! AND is the minimum and OR the maximum of the operands; NOT negates.
//! IMPLIES is asymmetric and is NOT Kleene implication:
//!
//! | a  | b  | a -> b |
//! |----|----|--------|
//! | -1 | *  | +1     |
//! | 0  | +1 | +1     |
//! | 0  | 0  | 0      |
//! | 0  | -1 | 0      |
//! | +1 | b  | b      |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::value::TrinaryValue;

/// Operator tags accepted by [`evaluate`] and reasoning chains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogicOp {
    /// Minimum of both operands.
    And,
    /// Maximum of both operands.
    Or,
    /// Negation of the left operand; the right operand is ignored.
    Not,
    /// Asymmetric trinary implication.
    Implies,
}

impl LogicOp {
    /// Returns the canonical tag.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
            Self::Not => "NOT",
            Self::Implies => "IMPLIES",
        }
    }

    /// Returns true for the unary operator.
    #[must_use]
    pub const fn is_unary(self) -> bool {
        matches!(self, Self::Not)
    }
}

impl fmt::Display for LogicOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for LogicOp {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "AND" => Ok(Self::And),
            "OR" => Ok(Self::Or),
            "NOT" => Ok(Self::Not),
            "IMPLIES" => Ok(Self::Implies),
            _ => Err(ValidationError::UnknownOperator { tag: s.to_string() }),
        }
    }
}

/// Trinary AND: minimum of inputs.
#[must_use]
pub fn and(a: TrinaryValue, b: TrinaryValue) -> TrinaryValue {
    a.min(b)
}

/// Trinary OR: maximum of inputs.
#[must_use]
pub fn or(a: TrinaryValue, b: TrinaryValue) -> TrinaryValue {
    a.max(b)
}

/// Trinary NOT.
#[must_use]
pub const fn not(a: TrinaryValue) -> TrinaryValue {
    a.negate()
}

/// Trinary implication: false implies anything, unknown only implies
/// truth when the consequent is true, true passes the consequent through.
#[must_use]
pub const fn implies(a: TrinaryValue, b: TrinaryValue) -> TrinaryValue {
    match (a, b) {
        (TrinaryValue::False, _) => TrinaryValue::True,
        (TrinaryValue::Unknown, TrinaryValue::True) => TrinaryValue::True,
        (TrinaryValue::Unknown, _) => TrinaryValue::Unknown,
        (TrinaryValue::True, b) => b,
    }
}

/// Uncertainty content of a value: 1.0 for unknown, 0.0 otherwise.
#[must_use]
pub const fn uncertainty(value: TrinaryValue) -> f64 {
    value.uncertainty()
}

/// Applies `op` to `a` and `b`. For [`LogicOp::Not`] `b` is ignored.
#[must_use]
pub fn evaluate(a: TrinaryValue, b: TrinaryValue, op: LogicOp) -> TrinaryValue {
    match op {
        LogicOp::And => and(a, b),
        LogicOp::Or => or(a, b),
        LogicOp::Not => not(a),
        LogicOp::Implies => implies(a, b),
    }
}

/// Applies `op` to integer-encoded operands, validating both first.
///
/// # Errors
///
/// Returns `ValidationError::InvalidTrinaryValue` if either operand is
/// outside {-1, 0, 1}.
pub fn evaluate_raw(a: i64, b: i64, op: LogicOp) -> Result<TrinaryValue, ValidationError> {
    let a = TrinaryValue::new(a)?;
    let b = TrinaryValue::new(b)?;
    Ok(evaluate(a, b, op))
}
