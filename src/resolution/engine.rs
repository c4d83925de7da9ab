use std::collections::HashMap;

use tracing::{debug, info, warn};

use crate::belief::Belief;
use crate::config::EngineConfig;
use crate::conflict::{Contradiction, ContradictionDetector, ContradictionId, Severity};
use crate::error::ValidationError;
use crate::inference::TrinaryEvaluator;
use crate::logic::LogicOp;
use crate::resolution::{ResolutionOutcome, ResolutionReport, ResolutionStrategy};
use crate::scoring::{route_substrate, NetworkSnapshot, Substrate};
use crate::value::TrinaryValue;

/// In-memory belief network with contradiction tracking.
///
/// The engine owns the network, the active and resolved contradiction
/// lists, and a [`TrinaryEvaluator`] whose aggregate uncertainty is
/// sampled around every resolution pass. Nothing is shared between
/// instances; see [`SharedResolutionEngine`](crate::SharedResolutionEngine)
/// for use from several threads.
#[derive(Debug, Clone, Default)]
pub struct ResolutionEngine {
    config: EngineConfig,
    detector: ContradictionDetector,
    evaluator: TrinaryEvaluator,
    beliefs: Vec<Belief>,
    index: HashMap<String, usize>,
    active: Vec<Contradiction>,
    resolved: Vec<Contradiction>,
    next_sequence: u64,
}

impl ResolutionEngine {
    /// Creates an engine with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine with a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidConfig` if the configuration is
    /// inconsistent.
    pub fn with_config(config: EngineConfig) -> Result<Self, ValidationError> {
        config.validate()?;
        Ok(Self {
            config,
            detector: ContradictionDetector::with_policy(config.severity_policy),
            ..Self::default()
        })
    }

    /// Creates an engine around an existing evaluator.
    #[must_use]
    pub fn with_evaluator(evaluator: TrinaryEvaluator) -> Self {
        Self {
            evaluator,
            ..Self::default()
        }
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Asserts a belief and records every contradiction it introduces.
    ///
    /// The incoming value is compared against every other belief in the
    /// network before the entry is written, so a belief is never compared
    /// with its own previous value. The entry is then overwritten
    /// unconditionally. Returns the number of new contradictions.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::ConfidenceOutOfRange` when strict confidence
    /// is on and `confidence` is outside [0.0, 1.0]. The network is unchanged
    /// on error. Any string, including `""`, is a valid name.
    pub fn update_belief(
        &mut self,
        name: &str,
        value: TrinaryValue,
        confidence: f64,
    ) -> Result<usize, ValidationError> {
        let confidence = self.config.check_confidence(confidence).inspect_err(|_| {
            warn!(belief = name, confidence, "rejected out-of-range confidence");
        })?;

        let found: Vec<Contradiction> = self
            .beliefs
            .iter()
            .filter(|existing| existing.name != name)
            .filter_map(|existing| {
                self.detector
                    .detect(&existing.name, existing.value, name, value)
            })
            .collect();
        let count = found.len();
        for contradiction in found {
            self.file(contradiction);
        }

        match self.index.get(name) {
            Some(&i) => self.beliefs[i].overwrite(value, confidence),
            None => {
                self.index.insert(name.to_string(), self.beliefs.len());
                self.beliefs.push(Belief::new(name, value, confidence));
            }
        }

        debug!(belief = name, value = %value, confidence, new_contradictions = count, "belief updated");
        Ok(count)
    }

    /// Like [`update_belief`](Self::update_belief), but with an
    /// integer-encoded value.
    ///
    /// # Errors
    ///
    /// Additionally returns `ValidationError::InvalidTrinaryValue` for a
    /// value outside {-1, 0, 1}.
    pub fn update_belief_raw(
        &mut self,
        name: &str,
        value: i64,
        confidence: f64,
    ) -> Result<usize, ValidationError> {
        let value = TrinaryValue::new(value).inspect_err(|_| {
            warn!(belief = name, value, "rejected value outside trinary domain");
        })?;
        self.update_belief(name, value, confidence)
    }

    /// Asserts a belief with the configured default confidence.
    ///
    /// # Errors
    ///
    /// See [`update_belief`](Self::update_belief).
    pub fn assert_belief(&mut self, name: &str, value: TrinaryValue) -> Result<usize, ValidationError> {
        self.update_belief(name, value, self.config.default_confidence)
    }

    /// Files an externally detected contradiction as active.
    ///
    /// This is the only way to introduce a `Critical` contradiction.
    /// The record receives the next creation marker.
    pub fn record_contradiction(&mut self, contradiction: Contradiction) -> ContradictionId {
        self.file(contradiction)
    }

    fn file(&mut self, mut contradiction: Contradiction) -> ContradictionId {
        self.next_sequence += 1;
        contradiction.sequence = self.next_sequence;
        let id = contradiction.id;
        debug!(
            id = %id,
            sequence = contradiction.sequence,
            severity = %contradiction.severity,
            belief_a = %contradiction.belief_a,
            belief_b = %contradiction.belief_b,
            "contradiction filed"
        );
        self.active.push(contradiction);
        id
    }

    /// Resolves every active contradiction, most severe first.
    ///
    /// Same-severity contradictions keep their filing order. Each one has
    /// its attempt counter incremented and moves to the resolved list; the
    /// active list is left empty. Strategies only propose values, so the
    /// belief network itself is not modified.
    ///
    /// The report's `consciousness_delta` is the evaluator's phi
    /// contribution after the pass minus the value before it.
    pub fn resolve_all(&mut self) -> ResolutionReport {
        let initial_phi = self.evaluator.phi_contribution();

        let mut pending = std::mem::take(&mut self.active);
        pending.sort_by(|a, b| b.severity.cmp(&a.severity));

        let mut report = ResolutionReport {
            outcomes: Vec::with_capacity(pending.len()),
            ..ResolutionReport::default()
        };
        self.resolved.reserve(pending.len());

        for mut contradiction in pending {
            let strategy = ResolutionStrategy::for_severity(contradiction.severity);
            let resolution = strategy.apply(&contradiction);
            contradiction.resolution_attempts += 1;

            report.entropy_cost += resolution.entropy_cost;
            report.resolved += 1;
            report.outcomes.push(ResolutionOutcome {
                contradiction_id: contradiction.id,
                severity: contradiction.severity,
                strategy,
                proposed_value: resolution.value,
                entropy_cost: resolution.entropy_cost,
            });
            self.resolved.push(contradiction);
        }

        let final_phi = self.evaluator.phi_contribution();
        report.consciousness_delta = final_phi - initial_phi;
        report.preserved_information = self.snapshot().preserved_information();

        info!(
            resolved = report.resolved,
            entropy_cost = report.entropy_cost,
            preserved_information = report.preserved_information,
            "resolution pass complete"
        );
        report
    }

    /// Captures the counts the scoring layer needs.
    #[must_use]
    pub fn snapshot(&self) -> NetworkSnapshot {
        NetworkSnapshot::from_values(
            self.beliefs.iter().map(|b| b.value),
            self.active.len(),
            self.resolved.len(),
        )
    }

    /// Network coherence in [0.0, 1.0]; exactly 1.0 when empty.
    #[must_use]
    pub fn coherence_score(&self) -> f64 {
        self.snapshot().coherence_score()
    }

    /// Unbounded additive measure of contradiction-handling activity.
    #[must_use]
    pub fn enhancement_factor(&self) -> f64 {
        self.snapshot().enhancement_factor()
    }

    /// Count of active contradictions per severity.
    #[must_use]
    pub fn severity_distribution(&self) -> HashMap<Severity, usize> {
        let mut dist = HashMap::new();
        for c in &self.active {
            *dist.entry(c.severity).or_insert(0) += 1;
        }
        dist
    }

    /// Routes the current active contradictions to a substrate.
    #[must_use]
    pub fn suggest_substrate(&self) -> Substrate {
        route_substrate(self.active.len(), &self.severity_distribution())
    }

    /// Runs a reasoning chain on the owned evaluator.
    ///
    /// # Errors
    ///
    /// See [`TrinaryEvaluator::run_chain`].
    pub fn run_chain(
        &mut self,
        premises: &[TrinaryValue],
        operations: &[LogicOp],
    ) -> Result<(TrinaryValue, f64), ValidationError> {
        self.evaluator.run_chain(premises, operations)
    }

    /// The owned evaluator's phi contribution.
    #[must_use]
    pub fn phi_contribution(&self) -> f64 {
        self.evaluator.phi_contribution()
    }

    /// The owned evaluator.
    #[must_use]
    pub const fn evaluator(&self) -> &TrinaryEvaluator {
        &self.evaluator
    }

    /// Mutable access to the owned evaluator.
    pub fn evaluator_mut(&mut self) -> &mut TrinaryEvaluator {
        &mut self.evaluator
    }

    /// Looks up a belief by name.
    #[must_use]
    pub fn belief(&self, name: &str) -> Option<&Belief> {
        self.index.get(name).map(|&i| &self.beliefs[i])
    }

    /// Current value of a belief.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<TrinaryValue> {
        self.belief(name).map(|b| b.value)
    }

    /// Current confidence of a belief.
    #[must_use]
    pub fn confidence(&self, name: &str) -> Option<f64> {
        self.belief(name).map(|b| b.confidence)
    }

    /// All beliefs in first-assertion order.
    #[must_use]
    pub fn beliefs(&self) -> &[Belief] {
        &self.beliefs
    }

    /// Contradictions awaiting resolution, in filing order.
    #[must_use]
    pub fn active_contradictions(&self) -> &[Contradiction] {
        &self.active
    }

    /// Contradictions already processed, in processing order.
    #[must_use]
    pub fn resolved_contradictions(&self) -> &[Contradiction] {
        &self.resolved
    }
}
