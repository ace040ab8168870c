use concierge_analytics::{normalize_scores, summarize, ScoreScale};
use concierge_core::Archetype;
use proptest::prelude::*;

fn labels() -> Vec<&'static str> {
    Archetype::ALL.iter().map(|a| a.as_str()).collect()
}

// ── Normalized output is always a distribution ────────────────────────────

proptest! {
    #[test]
    fn output_sums_to_one(values in prop::collection::vec(prop::num::f64::ANY, 0..=5)) {
        let entries: Vec<_> = labels().into_iter().zip(values).collect();
        let scores = normalize_scores(entries);
        let sum: f64 = scores.weights.iter().sum();
        prop_assert!((sum - 1.0).abs() < 1e-9, "sum = {sum}");
        prop_assert!(scores.weights.iter().all(|w| (0.0..=1.0).contains(w)));
    }
}

// ── Percentage and unit encodings agree ───────────────────────────────────

proptest! {
    #[test]
    fn percentage_round_trip(raw in prop::collection::vec(0.0f64..1.0, 5)) {
        let sum: f64 = raw.iter().sum();
        prop_assume!(sum > 1e-6);
        let unit: Vec<f64> = raw.iter().map(|v| v / sum).collect();
        // Needs one value above 1.5% for the percentage map to be detected.
        prop_assume!(unit.iter().any(|&v| v * 100.0 > 1.5));

        let a = normalize_scores(labels().into_iter().zip(unit.iter().copied()));
        let b = normalize_scores(labels().into_iter().zip(unit.iter().map(|v| v * 100.0)));
        prop_assert_eq!(a.scale, ScoreScale::Unit);
        prop_assert_eq!(b.scale, ScoreScale::Percentage);
        for (x, y) in a.weights.iter().zip(b.weights.iter()) {
            prop_assert!((x - y).abs() < 1e-9);
        }
        prop_assert_eq!(summarize(&a, 0.08).winner, summarize(&b, 0.08).winner);
    }
}

// ── Confidence is never negative ──────────────────────────────────────────

proptest! {
    #[test]
    fn confidence_non_negative(values in prop::collection::vec(0.0f64..100.0, 5)) {
        let scores = normalize_scores(labels().into_iter().zip(values));
        let summary = summarize(&scores, 0.08);
        prop_assert!(summary.confidence >= 0.0);
        prop_assert_ne!(summary.leader, summary.runner_up);
    }
}
