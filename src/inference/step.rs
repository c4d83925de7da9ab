use serde::{Deserialize, Serialize};

use crate::logic::LogicOp;
use crate::value::TrinaryValue;

/// One executed reasoning chain.
///
/// Steps are only ever appended to an evaluator's history; there is no
/// way to mutate one after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReasoningStep {
    premises: Vec<TrinaryValue>,
    operations: Vec<LogicOp>,
    result: TrinaryValue,
    uncertainty: f64,
}

impl ReasoningStep {
    pub(crate) fn new(
        premises: Vec<TrinaryValue>,
        operations: Vec<LogicOp>,
        result: TrinaryValue,
        uncertainty: f64,
    ) -> Self {
        Self {
            premises,
            operations,
            result,
            uncertainty,
        }
    }

    /// Premises the chain was given, in order.
    #[must_use]
    pub fn premises(&self) -> &[TrinaryValue] {
        &self.premises
    }

    /// Operations the chain was given, including any that were skipped.
    #[must_use]
    pub fn operations(&self) -> &[LogicOp] {
        &self.operations
    }

    /// Final running value.
    #[must_use]
    pub const fn result(&self) -> TrinaryValue {
        self.result
    }

    /// Uncertainty accumulated over the applied operations.
    #[must_use]
    pub const fn uncertainty(&self) -> f64 {
        self.uncertainty
    }
}
