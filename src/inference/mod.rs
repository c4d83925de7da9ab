//! Trinary inference layer.
//!
//! Executes chains of logic primitives over ordered premises and keeps an
//! append-only log of every chain, from which an aggregate uncertainty
//! signal (`phi_contribution`) is derived.

mod evaluator;
mod step;

pub use evaluator::TrinaryEvaluator;
pub use step::ReasoningStep;
