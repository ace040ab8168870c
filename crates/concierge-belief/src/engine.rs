use concierge_core::config::BeliefConfig;
use concierge_core::{BeliefVector, DecisionRecord};
use concierge_signals::Extraction;

use crate::resolver::PrimaryResolver;
use crate::updater::{BeliefUpdater, UpdateOutcome};

/// Updater and resolver run in sequence over one turn's extraction.
#[derive(Debug, Clone, Copy, Default)]
pub struct BeliefEngine {
    updater: BeliefUpdater,
    resolver: PrimaryResolver,
}

impl BeliefEngine {
    pub fn new(config: BeliefConfig) -> Self {
        Self {
            updater: BeliefUpdater::new(config),
            resolver: PrimaryResolver::new(&config),
        }
    }

    pub fn updater(&self) -> &BeliefUpdater {
        &self.updater
    }

    pub fn resolver(&self) -> &PrimaryResolver {
        &self.resolver
    }

    /// Produce the next decision. `previous` is only read; the updated
    /// vector is returned inside the record.
    pub fn step(&self, extraction: &Extraction, previous: Option<&BeliefVector>) -> DecisionRecord {
        self.step_with_outcome(extraction, previous).0
    }

    /// Like [`step`](Self::step), also returning the updater diagnostics.
    /// The outcome is `None` on the override path, which skips the update.
    pub fn step_with_outcome(
        &self,
        extraction: &Extraction,
        previous: Option<&BeliefVector>,
    ) -> (DecisionRecord, Option<UpdateOutcome>) {
        let signals = extraction.signal_ids();
        if let Some(archetype) = extraction.override_archetype {
            return (self.resolver.resolve_override(archetype, signals), None);
        }
        let outcome = self.updater.update(
            previous,
            &extraction.context_delta,
            &extraction.language_delta,
        );
        let record = self.resolver.resolve(&outcome, signals);
        (record, Some(outcome))
    }
}
