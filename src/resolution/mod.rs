//! Contradiction resolution.
//!
//! The engine owns the belief network and dispatches each contradiction
//! to the strategy for its severity. Resolution never raises: every
//! strategy is total, so a pass always drains the active list.

mod engine;
mod report;
mod shared;
pub mod strategy;

pub use engine::ResolutionEngine;
pub use report::{ResolutionOutcome, ResolutionReport};
pub use shared::SharedResolutionEngine;
pub use strategy::{total_entropy_cost, Resolution, ResolutionStrategy};
