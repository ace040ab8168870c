//! Nudges from precomputed intent and topic tags.
//!
//! Each matching tag adds [`HINT_WEIGHT`]; the total per archetype is capped
//! at [`HINT_CAP_PER_ARCHETYPE`]. Duplicate tags count once.

use std::collections::HashSet;

use concierge_core::{Archetype, DeltaVector};

use crate::catalogue::hints::{
    normalize_tag, HINT_CAP_PER_ARCHETYPE, HINT_WEIGHT, INTENT_HINTS, TOPIC_HINTS,
};
use crate::engine::{FiredSignal, SignalSource};

pub fn extract(
    intents: &[String],
    topics: &[String],
    delta: &mut DeltaVector,
    fired: &mut Vec<FiredSignal>,
) {
    let mut budget = [HINT_CAP_PER_ARCHETYPE; Archetype::COUNT];
    apply(intents, INTENT_HINTS, "intent", SignalSource::IntentHint, &mut budget, delta, fired);
    apply(topics, TOPIC_HINTS, "topic", SignalSource::TopicHint, &mut budget, delta, fired);
}

fn apply(
    tags: &[String],
    table: &[(&str, Archetype)],
    kind: &str,
    source: SignalSource,
    budget: &mut [f64; Archetype::COUNT],
    delta: &mut DeltaVector,
    fired: &mut Vec<FiredSignal>,
) {
    let mut seen = HashSet::new();
    for tag in tags {
        let tag = normalize_tag(tag);
        if tag.is_empty() || !seen.insert(tag.clone()) {
            continue;
        }
        let Some(&(name, archetype)) = table.iter().find(|(name, _)| *name == tag) else {
            continue;
        };
        let remaining = &mut budget[archetype.index()];
        let weight = HINT_WEIGHT.min(*remaining);
        if weight <= 0.0 {
            tracing::debug!(tag = name, %archetype, "hint cap reached");
            continue;
        }
        *remaining -= weight;
        delta.add(archetype, weight);
        fired.push(FiredSignal::new(
            format!("hint.{kind}.{name}"),
            archetype,
            weight,
            source,
        ));
    }
}
