use tracing::debug;

use crate::error::ValidationError;
use crate::inference::ReasoningStep;
use crate::logic::{evaluate, LogicOp};
use crate::value::TrinaryValue;

/// Chained trinary reasoning with uncertainty tracking.
///
/// The evaluator owns its reasoning history and a counter of the
/// contradictions it has been asked to check. Neither is shared; wrap the
/// owning engine if it must be reached from several threads.
#[derive(Debug, Clone, Default)]
pub struct TrinaryEvaluator {
    history: Vec<ReasoningStep>,
    contradiction_count: u64,
}

impl TrinaryEvaluator {
    /// Creates an evaluator with an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Executes a reasoning chain and records it.
    ///
    /// Starting from the first premise, operation `i` combines the running
    /// value with premise `i + 1`. After every applied operation the
    /// uncertainty of the new running value is added to the total.
    /// Operations beyond the last premise are skipped without error.
    ///
    /// Returns the final value and the accumulated uncertainty.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyPremiseSequence` if `premises` is empty.
    /// Nothing is recorded in that case.
    pub fn run_chain(
        &mut self,
        premises: &[TrinaryValue],
        operations: &[LogicOp],
    ) -> Result<(TrinaryValue, f64), ValidationError> {
        let (&first, rest) = premises
            .split_first()
            .ok_or(ValidationError::EmptyPremiseSequence)?;

        let mut current = first;
        let mut uncertainty = 0.0;
        for (&op, &next) in operations.iter().zip(rest) {
            current = evaluate(current, next, op);
            uncertainty += current.uncertainty();
        }

        if operations.len() > rest.len() {
            debug!(
                skipped = operations.len() - rest.len(),
                "reasoning chain ran out of premises"
            );
        }

        self.history.push(ReasoningStep::new(
            premises.to_vec(),
            operations.to_vec(),
            current,
            uncertainty,
        ));
        debug!(
            premises = premises.len(),
            operations = operations.len(),
            result = %current,
            uncertainty,
            "reasoning chain executed"
        );

        Ok((current, uncertainty))
    }

    /// Like [`run_chain`](Self::run_chain), but takes textual operator tags.
    ///
    /// All tags are parsed before anything runs, so a bad tag leaves the
    /// history untouched.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::UnknownOperator` for an unrecognised tag, or
    /// `ValidationError::EmptyPremiseSequence` if `premises` is empty.
    pub fn run_chain_tagged<S: AsRef<str>>(
        &mut self,
        premises: &[TrinaryValue],
        tags: &[S],
    ) -> Result<(TrinaryValue, f64), ValidationError> {
        let operations = tags
            .iter()
            .map(|t| t.as_ref().parse::<LogicOp>())
            .collect::<Result<Vec<_>, _>>()?;
        self.run_chain(premises, &operations)
    }

    /// Like [`run_chain_tagged`](Self::run_chain_tagged), but with
    /// integer-encoded premises.
    ///
    /// # Errors
    ///
    /// Additionally returns `ValidationError::InvalidTrinaryValue` for any
    /// premise outside {-1, 0, 1}.
    pub fn run_chain_raw<S: AsRef<str>>(
        &mut self,
        premises: &[i64],
        tags: &[S],
    ) -> Result<(TrinaryValue, f64), ValidationError> {
        let premises = premises
            .iter()
            .map(|&p| TrinaryValue::new(p))
            .collect::<Result<Vec<_>, _>>()?;
        self.run_chain_tagged(&premises, tags)
    }

    /// Damped average of recorded chain uncertainty.
    ///
    /// Sum of step uncertainties divided by `steps + 1`, so short
    /// histories are pulled toward zero. Returns 0.0 with no history.
    #[must_use]
    pub fn phi_contribution(&self) -> f64 {
        if self.history.is_empty() {
            return 0.0;
        }
        let total: f64 = self.history.iter().map(ReasoningStep::uncertainty).sum();
        #[allow(clippy::cast_precision_loss)]
        let depth = (self.history.len() + 1) as f64;
        total / depth
    }

    /// Returns true iff `a` and `b` are opposite certain values.
    ///
    /// Unknown never contradicts anything. Each detected contradiction
    /// increments [`contradiction_count`](Self::contradiction_count).
    pub fn detect_contradiction(&mut self, a: TrinaryValue, b: TrinaryValue) -> bool {
        let contradicts = a.is_certain() && b.is_certain() && a == -b;
        if contradicts {
            self.contradiction_count += 1;
        }
        contradicts
    }

    /// Number of contradictions found by [`detect_contradiction`](Self::detect_contradiction).
    #[must_use]
    pub const fn contradiction_count(&self) -> u64 {
        self.contradiction_count
    }

    /// Recorded reasoning steps, oldest first.
    #[must_use]
    pub fn history(&self) -> &[ReasoningStep] {
        &self.history
    }
}
