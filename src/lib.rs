//! # trireason - Trinary belief networks with contradiction resolution
//!
//! trireason maintains a network of named beliefs, each holding a
//! three-valued truth assignment, detects conflicts as new beliefs are
//! asserted, and resolves them through severity-specific strategies that
//! trade certainty for a quantified entropy cost. A companion evaluator
//! runs chained AND / OR / NOT / IMPLIES inference and tracks how much
//! uncertainty survives each chain.
//!
//! ## Core Concepts
//!
//! - **TrinaryValue**: one of -1 (false), 0 (unknown), +1 (true)
//! - **Belief**: a named trinary assertion with a confidence
//! - **Contradiction**: a detected conflict between two beliefs, with a severity
//! - **Entropy cost**: certainty sacrificed by a resolution strategy
//! - **Phi contribution**: the evaluator's damped average chain uncertainty
//!
//! ## Usage
//!
//! ```
//! use trireason::{ResolutionEngine, Severity, TrinaryValue};
//!
//! let mut engine = ResolutionEngine::new();
//! engine.update_belief("A", TrinaryValue::True, 1.0)?;
//! let found = engine.update_belief("B", TrinaryValue::False, 1.0)?;
//! assert_eq!(found, 1);
//! assert_eq!(engine.active_contradictions()[0].severity, Severity::Hard);
//!
//! let report = engine.resolve_all();
//! assert_eq!(report.resolved, 1);
//! assert_eq!(report.entropy_cost, 0.5);
//! # Ok::<(), trireason::ValidationError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod belief;
pub mod config;
pub mod conflict;
pub mod error;
pub mod inference;
pub mod logic;
pub mod resolution;
pub mod scoring;
pub mod value;

// Re-export primary types at crate root for convenience
pub use belief::Belief;
pub use config::EngineConfig;
pub use conflict::{Contradiction, ContradictionDetector, ContradictionId, Severity, SeverityPolicy};
pub use error::{ExecutionError, TrireasonError, TrireasonResult, ValidationError};
pub use inference::{ReasoningStep, TrinaryEvaluator};
pub use logic::{evaluate, evaluate_raw, LogicOp};
pub use resolution::{
	total_entropy_cost, Resolution, ResolutionEngine, ResolutionOutcome, ResolutionReport,
	ResolutionStrategy, SharedResolutionEngine,
};
pub use scoring::{route_substrate, NetworkSnapshot, Substrate};
pub use value::TrinaryValue;
