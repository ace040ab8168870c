//! Aggregate view over many re-read payloads.

use std::collections::BTreeMap;

use concierge_core::Archetype;
use serde::Serialize;

use crate::payload::PayloadReading;

/// How recomputed winners spread across a set of decisions.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Distribution {
    pub winners: BTreeMap<Archetype, usize>,
    pub inconclusive: usize,
    pub overrides: usize,
    pub disagreements: usize,
    pub total: usize,
}

impl Distribution {
    pub fn from_readings<'a>(readings: impl IntoIterator<Item = &'a PayloadReading>) -> Self {
        let mut dist = Self::default();
        for reading in readings {
            dist.total += 1;
            match reading.summary.winner {
                Some(a) => *dist.winners.entry(a).or_insert(0) += 1,
                None => dist.inconclusive += 1,
            }
            if reading.payload.override_used {
                dist.overrides += 1;
            }
            if !reading.agrees {
                dist.disagreements += 1;
            }
        }
        dist
    }

    /// Share of decisions won by `archetype`, in `[0, 1]`.
    pub fn share(&self, archetype: Archetype) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.winners.get(&archetype).copied().unwrap_or(0) as f64 / self.total as f64
    }
}
