use concierge_belief::updater::prior_scale;
use concierge_belief::{BeliefEngine, BeliefUpdater, PrimaryResolver};
use concierge_core::config::BeliefConfig;
use concierge_core::{Archetype, BeliefVector, DeltaVector, TurnContext};
use concierge_signals::SignalExtractor;

fn delta(entries: &[(Archetype, f64)]) -> DeltaVector {
    let mut d = DeltaVector::new();
    for &(a, w) in entries {
        d.add(a, w);
    }
    d
}

fn run(ctx: &TurnContext, previous: Option<&BeliefVector>) -> concierge_core::DecisionRecord {
    let extraction = SignalExtractor::new().extract(ctx);
    BeliefEngine::default().step(&extraction, previous)
}

fn assert_near_neutral(v: &BeliefVector) {
    for (a, w) in v.iter() {
        assert!((w - 0.2).abs() < 1e-12, "{a} drifted from neutral: {w}");
    }
}

// ── Prior scale ───────────────────────────────────────────────────────────

#[test]
fn prior_scale_follows_language_strength() {
    assert!((prior_scale(0.0, 0.0, 0.08) - 1.0).abs() < 1e-12);
    assert!((prior_scale(0.175, 0.0, 0.08) - 0.625).abs() < 1e-12);
    assert!((prior_scale(0.35, 0.0, 0.08) - 0.25).abs() < 1e-12);
    // Saturates: more language does not shrink further.
    assert!((prior_scale(5.0, 0.0, 0.08) - 0.25).abs() < 1e-12);
}

#[test]
fn confident_profile_resists_priors() {
    assert!((prior_scale(0.0, 0.1, 0.08) - 0.6).abs() < 1e-12);
    assert!((prior_scale(0.175, 0.08, 0.08) - 0.375).abs() < 1e-12);
    // Both effects together hit the floor.
    assert!((prior_scale(1.0, 0.5, 0.08) - 0.15).abs() < 1e-12);
}

#[test]
fn prior_scale_ignores_non_finite_mass() {
    assert!((prior_scale(f64::NAN, 0.0, 0.08) - 1.0).abs() < 1e-12);
}

// ── Smoothing ─────────────────────────────────────────────────────────────

#[test]
fn smoothing_uses_additively_perturbed_form() {
    let updater = BeliefUpdater::default();
    let outcome = updater.update(
        None,
        &DeltaVector::new(),
        &delta(&[(Archetype::Legacy, 0.2)]),
    );
    // 0.75 * 0.2 + 0.25 * (0.2 + 0.2) = 0.25, others stay 0.2; sum 1.05.
    let expected_legacy = 0.25 / 1.05;
    let expected_other = 0.2 / 1.05;
    assert!((outcome.belief.weight(Archetype::Legacy) - expected_legacy).abs() < 1e-12);
    assert!((outcome.belief.weight(Archetype::Prestige) - expected_other).abs() < 1e-12);
    assert!(outcome.belief.is_normalized());
}

#[test]
fn smoothing_factor_is_configurable() {
    let updater = BeliefUpdater::new(BeliefConfig {
        smoothing_factor: 0.5,
        ..BeliefConfig::default()
    });
    let outcome = updater.update(
        None,
        &DeltaVector::new(),
        &delta(&[(Archetype::Legacy, 0.2)]),
    );
    // 0.5 * 0.2 + 0.5 * 0.4 = 0.3; sum 1.1.
    assert!((outcome.belief.weight(Archetype::Legacy) - 0.3 / 1.1).abs() < 1e-12);
}

#[test]
fn full_memory_ignores_deltas() {
    let updater = BeliefUpdater::new(BeliefConfig {
        smoothing_factor: 1.0,
        ..BeliefConfig::default()
    });
    let outcome = updater.update(None, &DeltaVector::new(), &delta(&[(Archetype::Legacy, 0.5)]));
    assert_near_neutral(&outcome.belief);
}

// ── Per-message cap ───────────────────────────────────────────────────────

#[test]
fn combined_delta_is_capped_per_archetype() {
    let updater = BeliefUpdater::default();
    let outcome = updater.update(
        None,
        &DeltaVector::new(),
        &delta(&[(Archetype::Legacy, 2.0), (Archetype::Prestige, 0.1)]),
    );
    assert!((outcome.combined.get(Archetype::Legacy) - 0.6).abs() < 1e-12);
    assert!((outcome.combined.get(Archetype::Prestige) - 0.1).abs() < 1e-12);
    assert!((outcome.language_mass - 2.1).abs() < 1e-12);
}

#[test]
fn cap_above_one_is_honoured() {
    let updater = BeliefUpdater::new(BeliefConfig {
        max_delta_per_message: 1.5,
        ..BeliefConfig::default()
    });
    let outcome = updater.update(None, &DeltaVector::new(), &delta(&[(Archetype::Legacy, 2.0)]));
    assert!((outcome.combined.get(Archetype::Legacy) - 1.5).abs() < 1e-12);
}

#[test]
fn context_delta_is_scaled_before_combining() {
    let updater = BeliefUpdater::default();
    let outcome = updater.update(
        None,
        &delta(&[(Archetype::Prestige, 0.4)]),
        &delta(&[(Archetype::Legacy, 0.35)]),
    );
    assert!((outcome.prior_scale - 0.25).abs() < 1e-12);
    assert!((outcome.combined.get(Archetype::Prestige) - 0.1).abs() < 1e-12);
    assert!((outcome.combined.get(Archetype::Legacy) - 0.35).abs() < 1e-12);
}

#[test]
fn degenerate_previous_vector_falls_back_to_neutral() {
    let zeros: BeliefVector = serde_json::from_str(r#"{"weights":[0.0,0.0,0.0,0.0,0.0]}"#).unwrap();
    let outcome = BeliefUpdater::default().update(Some(&zeros), &DeltaVector::new(), &DeltaVector::new());
    assert!(outcome.fell_back_to_neutral);
    assert_eq!(outcome.belief, BeliefVector::neutral());
}

// ── Resolver ──────────────────────────────────────────────────────────────

#[test]
fn near_equal_vector_is_inconclusive() {
    let resolver = PrimaryResolver::default();
    let v = BeliefVector::normalized([0.21, 0.2, 0.2, 0.2, 0.19]);
    assert_eq!(resolver.primary(&v), None);
}

#[test]
fn clear_margin_resolves_to_leader() {
    let resolver = PrimaryResolver::default();
    let v = BeliefVector::normalized([0.15, 0.3, 0.2, 0.2, 0.15]);
    assert_eq!(resolver.primary(&v), Some(Archetype::Legacy));
}

#[test]
fn margin_just_under_threshold_is_inconclusive() {
    let resolver = PrimaryResolver::default();
    let v = BeliefVector::normalized([0.279, 0.2, 0.2, 0.161, 0.16]);
    assert!(v.margin() < 0.08 && v.margin() > 0.078);
    assert_eq!(resolver.primary(&v), None);
}

#[test]
fn ties_are_inconclusive_but_leader_is_canonical() {
    let v = BeliefVector::normalized([0.1, 0.35, 0.1, 0.35, 0.1]);
    assert_eq!(PrimaryResolver::default().primary(&v), None);
    assert_eq!(v.leader(), Archetype::Legacy);
}

#[test]
fn override_always_resolves() {
    let resolver = PrimaryResolver::new(&BeliefConfig {
        confidence_threshold: 0.9,
        ..BeliefConfig::default()
    });
    let record = resolver.resolve_override(Archetype::Sporting, vec!["override.sporting".into()]);
    assert_eq!(record.primary, Some(Archetype::Sporting));
    assert!(record.override_used);
    assert!((record.belief.weight(Archetype::Sporting) - 0.7).abs() < 1e-12);
    assert!((record.belief.weight(Archetype::Legacy) - 0.075).abs() < 1e-12);
    assert!(record.belief.is_normalized());
    assert!(record.reasoning.contains("manual override"));
}

// ── End-to-end through extraction ─────────────────────────────────────────

#[test]
fn heirloom_language_beats_bespoke_prior() {
    let ctx = TurnContext::new("This is an heirloom, I want to preserve it and pass it down")
        .with_mode("prospect")
        .with_page("/bespoke");
    let record = run(&ctx, Some(&BeliefVector::neutral()));

    let legacy = record.belief.weight(Archetype::Legacy);
    let prestige = record.belief.weight(Archetype::Prestige);
    assert!(legacy > prestige, "legacy {legacy} should exceed prestige {prestige}");
    assert_eq!(record.primary, Some(Archetype::Legacy));
    assert!(!record.signals.is_empty());
    assert!(record.reasoning.contains("lang.legacy.heirloom"));
    assert!(record.belief.is_normalized());
}

#[test]
fn hints_alone_nudge_but_do_not_resolve() {
    let ctx = TurnContext::new("")
        .with_intents(["restoration"])
        .with_topics(["family_history"]);
    let record = run(&ctx, None);
    assert!(record.belief.weight(Archetype::Legacy) > 0.205);
    assert_eq!(record.primary, None);
    assert!(record.reasoning.starts_with("inconclusive"));
}

#[test]
fn loyalty_program_leaves_legacy_neutral() {
    let record = run(&TurnContext::new("How does your loyalty program work?"), None);
    assert!(record.belief.weight(Archetype::Legacy) <= 0.2 + 1e-12);
    assert!(!record.signals.iter().any(|s| s == "lang.legacy.loyalty"));
}

#[test]
fn confident_profile_keeps_its_leader_against_a_weak_prior() {
    let first = run(
        &TurnContext::new("This is an heirloom, I want to preserve it and pass it down")
            .with_mode("prospect")
            .with_page("/bespoke"),
        None,
    );
    assert_eq!(first.primary, Some(Archetype::Legacy));

    let extraction = SignalExtractor::new().extract(&TurnContext::new("").with_page("/bespoke"));
    let engine = BeliefEngine::default();
    let outcome = engine.updater().update(
        Some(&first.belief),
        &extraction.context_delta,
        &extraction.language_delta,
    );
    assert!((outcome.prior_scale - 0.6).abs() < 1e-12);
    assert_eq!(outcome.belief.leader(), Archetype::Legacy);
}

#[test]
fn override_path_skips_the_update() {
    let ctx = TurnContext::new("I love engraving").with_override("legacy");
    let record = run(&ctx, Some(&BeliefVector::dominant(Archetype::Prestige, 0.9)));
    assert_eq!(record.primary, Some(Archetype::Legacy));
    assert!(record.override_used);
    assert_eq!(record.signals, vec!["override.legacy".to_string()]);
}

#[test]
fn empty_turn_keeps_neutral_and_reports_no_signals() {
    let record = run(&TurnContext::default(), None);
    assert_near_neutral(&record.belief);
    assert_eq!(record.primary, None);
    assert!(record.reasoning.contains("signals: none"));
}
