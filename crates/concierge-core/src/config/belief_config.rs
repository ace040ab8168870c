use serde::{Deserialize, Serialize};

use super::defaults;

/// Belief-state updater and resolver configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BeliefConfig {
    /// Share of the previous vector retained per turn, in [0, 1].
    pub smoothing_factor: f64,
    /// Minimum winner-minus-runner-up margin needed to resolve a primary archetype.
    pub confidence_threshold: f64,
    /// Per-archetype ceiling on one turn's combined delta. May exceed 1.0.
    pub max_delta_per_message: f64,
    /// Weight the overridden archetype receives on the override path.
    pub override_weight: f64,
}

impl Default for BeliefConfig {
    fn default() -> Self {
        Self {
            smoothing_factor: defaults::DEFAULT_SMOOTHING_FACTOR,
            confidence_threshold: defaults::DEFAULT_CONFIDENCE_THRESHOLD,
            max_delta_per_message: defaults::DEFAULT_MAX_DELTA_PER_MESSAGE,
            override_weight: defaults::DEFAULT_OVERRIDE_WEIGHT,
        }
    }
}
