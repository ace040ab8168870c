//! Static signal tables.
//!
//! Weights are tuned against the belief updater: the smallest language
//! weight is strictly larger than [`hints::HINT_WEIGHT`], and hint totals are
//! capped per archetype so hints alone cannot resolve an archetype from a
//! neutral start.

pub mod context;
pub mod hints;
pub mod language;

use concierge_core::Archetype;

use crate::engine::SignalSource;

/// Flat description of one catalogued signal.
#[derive(Debug, Clone, PartialEq)]
pub struct SignalSpec {
    pub id: String,
    pub archetype: Archetype,
    pub weight: f64,
    pub source: SignalSource,
}

/// Every signal the extractors can fire, grouped by source.
pub fn catalogue() -> Vec<SignalSpec> {
    let mut specs = Vec::new();
    for m in context::MODE_PRIORS {
        for &(archetype, weight) in m.contributions {
            specs.push(SignalSpec {
                id: format!("{}.{}", m.id, archetype),
                archetype,
                weight,
                source: SignalSource::Mode,
            });
        }
    }
    for p in context::PAGE_PRIORS {
        specs.push(SignalSpec {
            id: p.id.to_string(),
            archetype: p.archetype,
            weight: p.weight,
            source: SignalSource::Page,
        });
    }
    for m in context::MODEL_FAMILIES {
        specs.push(SignalSpec {
            id: m.id.to_string(),
            archetype: m.archetype,
            weight: m.weight,
            source: SignalSource::Model,
        });
    }
    for s in language::LANGUAGE_SIGNALS {
        specs.push(SignalSpec {
            id: s.id.to_string(),
            archetype: s.archetype,
            weight: s.weight,
            source: SignalSource::Language,
        });
    }
    for &(tag, archetype) in hints::INTENT_HINTS {
        specs.push(SignalSpec {
            id: format!("hint.intent.{tag}"),
            archetype,
            weight: hints::HINT_WEIGHT,
            source: SignalSource::IntentHint,
        });
    }
    for &(tag, archetype) in hints::TOPIC_HINTS {
        specs.push(SignalSpec {
            id: format!("hint.topic.{tag}"),
            archetype,
            weight: hints::HINT_WEIGHT,
            source: SignalSource::TopicHint,
        });
    }
    specs
}
