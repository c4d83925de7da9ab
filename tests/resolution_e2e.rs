use std::collections::HashMap;

use trireason::{
    route_substrate, Contradiction, LogicOp, ResolutionEngine, ResolutionStrategy, Severity,
    Substrate, TrinaryValue, ValidationError,
};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn opposing_assertions_resolve_at_half_cost() {
    let mut engine = ResolutionEngine::new();
    assert_eq!(engine.update_belief("A", TrinaryValue::True, 1.0).unwrap(), 0);
    assert_eq!(engine.update_belief("B", TrinaryValue::False, 1.0).unwrap(), 1);
    assert_eq!(engine.active_contradictions()[0].severity, Severity::Hard);

    let report = engine.resolve_all();
    assert_eq!(report.resolved, 1);
    assert!(approx(report.entropy_cost, 0.5));
    assert!(engine.active_contradictions().is_empty());
    assert_eq!(engine.resolved_contradictions().len(), 1);
    assert_eq!(report.outcomes[0].strategy, ResolutionStrategy::RetreatToUnknown);
}

#[test]
fn mixed_network_lifecycle() {
    let mut engine = ResolutionEngine::new();
    engine.update_belief("sky_is_blue", TrinaryValue::True, 0.9).unwrap();
    engine.update_belief("weather_known", TrinaryValue::Unknown, 0.4).unwrap();
    engine.update_belief("raining", TrinaryValue::False, 0.7).unwrap();

    // weather_known vs sky_is_blue: Medium
    // raining vs sky_is_blue: Hard, raining vs weather_known: Medium
    assert_eq!(engine.active_contradictions().len(), 3);
    assert_eq!(engine.suggest_substrate(), Substrate::Quantum);

    let coherence_before = engine.coherence_score();
    // 2/3 certainty - 0.3 penalty
    assert!(approx(coherence_before, 2.0 / 3.0 - 0.3));

    let report = engine.resolve_all();
    assert_eq!(report.resolved, 3);
    assert!(approx(report.entropy_cost, 0.5 + 0.3 + 0.3));
    assert!(approx(report.preserved_information, 1.0 / 3.0));
    assert_eq!(report.outcomes[0].severity, Severity::Hard);

    let medium_values: Vec<_> = report
        .outcomes
        .iter()
        .filter(|o| o.severity == Severity::Medium)
        .map(|o| o.proposed_value)
        .collect();
    assert_eq!(medium_values, vec![TrinaryValue::True, TrinaryValue::False]);

    // 2/3 certainty + 0.15 bonus
    assert!(approx(engine.coherence_score(), 2.0 / 3.0 + 0.15));
    assert!(approx(engine.enhancement_factor(), 0.3 + 0.15));

    // A second pass has nothing to do and does not touch history.
    let again = engine.resolve_all();
    assert!(again.is_empty());
    assert_eq!(engine.resolved_contradictions().len(), 3);
}

#[test]
fn critical_contradictions_resolve_first() {
    let mut engine = ResolutionEngine::new();
    engine.update_belief("A", TrinaryValue::True, 1.0).unwrap();
    engine.update_belief("B", TrinaryValue::False, 1.0).unwrap();
    let critical = engine.record_contradiction(
        Contradiction::new("core", TrinaryValue::True, "core_copy", TrinaryValue::False, Severity::Hard)
            .with_context("replica divergence")
            .escalate(Severity::Critical),
    );

    let report = engine.resolve_all();
    assert_eq!(report.outcomes[0].contradiction_id, critical);
    assert!(approx(report.entropy_cost, 1.5));
    assert_eq!(engine.resolved_contradictions()[0].context, "replica divergence");
}

#[test]
fn consciousness_delta_reflects_interleaved_chains_only() {
    let mut engine = ResolutionEngine::new();
    engine.update_belief("A", TrinaryValue::True, 1.0).unwrap();
    engine.update_belief("B", TrinaryValue::False, 1.0).unwrap();

    let before = engine.phi_contribution();
    let report = engine.resolve_all();
    assert!(approx(report.consciousness_delta, 0.0));
    assert!(approx(engine.phi_contribution(), before));

    engine
        .evaluator_mut()
        .run_chain_tagged(&[TrinaryValue::True, TrinaryValue::Unknown], &["AND"])
        .unwrap();
    assert!(approx(engine.phi_contribution(), 0.5));
}

#[test]
fn scores_are_idempotent() {
    let mut engine = ResolutionEngine::new();
    engine.update_belief("A", TrinaryValue::True, 1.0).unwrap();
    engine.update_belief("B", TrinaryValue::Unknown, 1.0).unwrap();
    assert_eq!(engine.coherence_score().to_bits(), engine.coherence_score().to_bits());
    assert_eq!(
        engine.enhancement_factor().to_bits(),
        engine.enhancement_factor().to_bits()
    );
}

#[test]
fn invalid_values_are_rejected_at_the_boundary() {
    let mut engine = ResolutionEngine::new();
    assert_eq!(
        engine.update_belief_raw("A", 2, 1.0).unwrap_err(),
        ValidationError::InvalidTrinaryValue { value: 2 }
    );
    assert_eq!(
        engine.run_chain(&[], &[LogicOp::And]).unwrap_err(),
        ValidationError::EmptyPremiseSequence
    );
    assert!(engine.beliefs().is_empty());
    assert!(engine.evaluator().history().is_empty());
}

#[test]
fn routing_scenarios() {
    assert_eq!(
        route_substrate(4, &HashMap::from([(Severity::Soft, 4)])),
        Substrate::Chemical
    );
    assert_eq!(
        route_substrate(1, &HashMap::from([(Severity::Hard, 1)])),
        Substrate::Quantum
    );
    assert_eq!(route_substrate(0, &HashMap::new()).as_str(), "electronic");
}

#[test]
fn report_serializes_for_callers() {
    let mut engine = ResolutionEngine::new();
    engine.update_belief("A", TrinaryValue::True, 1.0).unwrap();
    engine.update_belief("B", TrinaryValue::False, 1.0).unwrap();
    let report = engine.resolve_all();

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["resolved"], 1);
    assert_eq!(json["outcomes"][0]["severity"], "hard");
    assert_eq!(json["outcomes"][0]["strategy"], "retreat_to_unknown");
    assert_eq!(json["outcomes"][0]["proposed_value"], 0);
}
