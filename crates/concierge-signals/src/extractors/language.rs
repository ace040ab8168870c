//! Keyword and phrase signals over the visitor's free text.

use std::sync::LazyLock;

use concierge_core::DeltaVector;

use crate::catalogue::language::{LanguageSignal, LANGUAGE_SIGNALS};
use crate::engine::{FiredSignal, SignalSource};
use crate::text::{first_match, mask_decoys, Phrase};

struct CompiledSignal {
    def: &'static LanguageSignal,
    needles: Vec<Phrase>,
    decoys: Vec<Phrase>,
}

static COMPILED: LazyLock<Vec<CompiledSignal>> = LazyLock::new(|| {
    LANGUAGE_SIGNALS
        .iter()
        .map(|def| CompiledSignal {
            def,
            needles: def.needles.iter().map(|n| Phrase::new(n)).collect(),
            decoys: def.decoys.iter().map(|d| Phrase::new(d)).collect(),
        })
        .collect()
});

/// Fire every language signal with at least one needle present in `tokens`.
/// A signal contributes its weight once, however many needles match.
pub fn extract(tokens: &[String], delta: &mut DeltaVector, fired: &mut Vec<FiredSignal>) {
    if tokens.is_empty() {
        return;
    }
    for signal in COMPILED.iter() {
        let haystack;
        let scan: &[String] = if signal.decoys.is_empty() {
            tokens
        } else {
            haystack = mask_decoys(tokens, &signal.decoys);
            &haystack
        };
        if let Some(needle) = first_match(&signal.needles, scan) {
            tracing::debug!(
                signal = signal.def.id,
                needle = %needle.tokens().join(" "),
                "language signal fired"
            );
            delta.add(signal.def.archetype, signal.def.weight);
            fired.push(FiredSignal::new(
                signal.def.id,
                signal.def.archetype,
                signal.def.weight,
                SignalSource::Language,
            ));
        }
    }
}
