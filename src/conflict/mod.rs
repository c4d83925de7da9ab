//! Contradiction records and detection.
//!
//! Contradictions are explicit objects, not hidden errors. When a new
//! belief disagrees with an existing one we create a `Contradiction`
//! that tracks the two observations, how severe the disagreement is,
//! and how many times it has been processed.

pub mod detector;
pub mod types;

pub use detector::{ContradictionDetector, SeverityPolicy};
pub use types::{Contradiction, ContradictionId, Severity};
