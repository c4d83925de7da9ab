use proptest::prelude::*;

use trireason::logic::{and, implies, not, or};
use trireason::{ContradictionDetector, ResolutionEngine, Severity, TrinaryValue};

fn trinary() -> impl Strategy<Value = TrinaryValue> {
    prop_oneof![
        Just(TrinaryValue::False),
        Just(TrinaryValue::Unknown),
        Just(TrinaryValue::True),
    ]
}

fn assertions() -> impl Strategy<Value = Vec<(String, TrinaryValue, f64)>> {
    prop::collection::vec(("[a-f]", trinary(), -1.0f64..2.0), 0..24)
}

proptest! {
    #[test]
    fn prop_min_max_negate(a in trinary(), b in trinary()) {
        let (ra, rb) = (i64::from(a), i64::from(b));
        prop_assert_eq!(i64::from(and(a, b)), ra.min(rb));
        prop_assert_eq!(i64::from(or(a, b)), ra.max(rb));
        prop_assert_eq!(i64::from(not(a)), -ra);
    }

    #[test]
    fn prop_true_antecedent_passes_consequent(b in trinary()) {
        prop_assert_eq!(implies(TrinaryValue::True, b), b);
        prop_assert_eq!(implies(TrinaryValue::False, b), TrinaryValue::True);
    }

    #[test]
    fn prop_detection_matches_classification(a in trinary(), b in trinary()) {
        let found = ContradictionDetector::new().detect("a", a, "b", b);
        match found {
            None => {
                prop_assert_eq!(a, b);
            }
            Some(c) => {
                prop_assert_ne!(a, b);
                let expected = if a.is_certain() && b.is_certain() {
                    Severity::Hard
                } else {
                    Severity::Medium
                };
                prop_assert_eq!(c.severity, expected);
            }
        }
    }

    #[test]
    fn prop_coherence_is_clamped(ops in assertions(), resolve_every in 1usize..6) {
        let mut engine = ResolutionEngine::new();
        for (i, (name, value, confidence)) in ops.iter().enumerate() {
            engine.update_belief(name, *value, *confidence).unwrap();
            if i % resolve_every == 0 {
                engine.resolve_all();
            }
            let score = engine.coherence_score();
            prop_assert!((0.0..=1.0).contains(&score));
            prop_assert!(engine.enhancement_factor() >= 0.0);
        }
    }

    #[test]
    fn prop_resolve_all_drains_active(ops in assertions(), more in assertions()) {
        let mut engine = ResolutionEngine::new();
        let mut filed = 0;
        for (name, value, confidence) in &ops {
            filed += engine.update_belief(name, *value, *confidence).unwrap();
        }
        prop_assert_eq!(engine.active_contradictions().len(), filed);

        let report = engine.resolve_all();
        prop_assert_eq!(report.resolved, filed);
        prop_assert!(engine.active_contradictions().is_empty());
        prop_assert_eq!(engine.resolved_contradictions().len(), filed);

        let severities: Vec<_> = report.outcomes.iter().map(|o| o.severity).collect();
        prop_assert!(severities.windows(2).all(|w| w[0] >= w[1]));
        prop_assert!(engine
            .resolved_contradictions()
            .iter()
            .all(|c| c.belief_a != c.belief_b));

        for (name, value, confidence) in &more {
            engine.update_belief(name, *value, *confidence).unwrap();
        }
        let prior_resolved = engine.resolved_contradictions().len();
        let prior_active = engine.active_contradictions().len();
        let report = engine.resolve_all();
        prop_assert_eq!(report.resolved, prior_active);
        prop_assert!(engine.active_contradictions().is_empty());
        prop_assert_eq!(
            engine.resolved_contradictions().len(),
            prior_resolved + prior_active
        );
    }
}
