//! Error types for trireason.
//!
//! All errors are strongly typed using thiserror so callers can match
//! on the specific condition instead of parsing messages.

use thiserror::Error;

/// Validation errors raised at the API boundary.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Trinary value {value} is outside the domain {{-1, 0, 1}}")]
    InvalidTrinaryValue {
        value: i64,
    },

    #[error("Reasoning chain requires at least one premise")]
    EmptyPremiseSequence,

    #[error("Unknown logic operator '{tag}'")]
    UnknownOperator {
        tag: String,
    },

    #[error("Confidence value {value} is out of range [0.0, 1.0]")]
    ConfidenceOutOfRange {
        value: f64,
    },

    #[error("Invalid configuration: {reason}")]
    InvalidConfig {
        reason: String,
    },
}

/// Execution errors raised while an operation runs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExecutionError {
    #[error("Lock guarding {what} was poisoned")]
    LockPoisoned {
        what: String,
    },
}

/// Top-level error type for trireason.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrireasonError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Execution error: {0}")]
    Execution(#[from] ExecutionError),

    #[error("Internal error: {message}")]
    Internal {
        message: String,
    },
}

impl TrireasonError {
    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Returns true if this is a validation error.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns true if this is an execution error.
    #[must_use]
    pub const fn is_execution(&self) -> bool {
        matches!(self, Self::Execution(_))
    }

    /// Returns true if this is an internal error.
    #[must_use]
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal { .. })
    }
}

/// Result type alias for trireason operations.
pub type TrireasonResult<T> = Result<T, TrireasonError>;
