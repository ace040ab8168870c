//! Golden belief scenarios: each case threads the belief vector through its
//! turns and checks the expectations recorded after every turn.

use concierge_belief::BeliefEngine;
use concierge_core::{Archetype, BeliefVector, TurnContext};
use concierge_signals::SignalExtractor;
use serde_json::Value;

const TOLERANCE: f64 = 1e-12;

fn archetype(v: &Value) -> Archetype {
    v.as_str().unwrap().parse().unwrap()
}

fn check_turn(name: &str, turn: usize, expect: &Value, record: &concierge_core::DecisionRecord) {
    let label = format!("{name}[{turn}]");

    if let Some(primary) = expect.get("primary") {
        let expected = (!primary.is_null()).then(|| archetype(primary));
        assert_eq!(record.primary, expected, "{label}: primary");
    }
    if let Some(flag) = expect.get("override_used") {
        assert_eq!(record.override_used, flag.as_bool().unwrap(), "{label}: override_used");
    }
    if let Some(mins) = expect.get("min_weight").and_then(Value::as_object) {
        for (key, min) in mins {
            let w = record.belief.weight(key.parse().unwrap());
            assert!(w >= min.as_f64().unwrap() - TOLERANCE, "{label}: {key} = {w} below {min}");
        }
    }
    if let Some(maxes) = expect.get("max_weight").and_then(Value::as_object) {
        for (key, max) in maxes {
            let w = record.belief.weight(key.parse().unwrap());
            assert!(w <= max.as_f64().unwrap() + TOLERANCE, "{label}: {key} = {w} above {max}");
        }
    }
    if let Some(pairs) = expect.get("greater").and_then(Value::as_array) {
        for pair in pairs {
            let (hi, lo) = (archetype(&pair[0]), archetype(&pair[1]));
            assert!(
                record.belief.weight(hi) > record.belief.weight(lo),
                "{label}: expected {hi} > {lo}"
            );
        }
    }
    if let Some(ids) = expect.get("signals_include").and_then(Value::as_array) {
        for id in ids {
            let id = id.as_str().unwrap();
            assert!(record.signals.iter().any(|s| s == id), "{label}: missing signal {id}");
        }
    }
    if let Some(ids) = expect.get("signals_exclude").and_then(Value::as_array) {
        for id in ids {
            let id = id.as_str().unwrap();
            assert!(!record.signals.iter().any(|s| s == id), "{label}: unexpected signal {id}");
        }
    }
}

fn run_fixture(path: &str) {
    let extractor = SignalExtractor::new();
    let engine = BeliefEngine::default();
    for case in test_fixtures::load_cases(path) {
        let name = case["name"].as_str().unwrap();
        let mut belief: Option<BeliefVector> = None;
        for (i, turn) in case["turns"].as_array().unwrap().iter().enumerate() {
            let ctx: TurnContext = serde_json::from_value(turn["ctx"].clone()).unwrap();
            let record = engine.step(&extractor.extract(&ctx), belief.as_ref());
            assert!(record.belief.is_normalized(), "{name}[{i}]: not normalized");
            check_turn(name, i, &turn["expect"], &record);
            belief = Some(record.belief);
        }
    }
}

#[test]
fn golden_heirloom_on_bespoke() {
    run_fixture("golden/belief/heirloom_on_bespoke.json");
}

#[test]
fn golden_hints_only() {
    run_fixture("golden/belief/hints_only.json");
}

#[test]
fn golden_override() {
    run_fixture("golden/belief/override.json");
}

#[test]
fn golden_multi_turn() {
    run_fixture("golden/belief/multi_turn.json");
}
