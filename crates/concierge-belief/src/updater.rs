//! Belief-state updater.
//!
//! Per turn: scale the context-delta down when language is strong or the
//! profile is already confident, add the language-delta, cap each
//! archetype's combined delta, smooth against the previous vector, then
//! renormalize.

use concierge_core::config::BeliefConfig;
use concierge_core::{Archetype, BeliefVector, DeltaVector};

/// Language mass at which free text fully dominates context priors.
pub const LANGUAGE_SATURATION_MASS: f64 = 0.35;
/// How much of the context prior strong language can remove.
pub const LANGUAGE_SCALE_SLOPE: f64 = 0.75;
/// Floor on the language-driven part of the prior scale.
pub const MIN_LANGUAGE_SCALE: f64 = 0.25;
/// Prior scale multiplier once the previous vector is already confident.
pub const CONFIDENT_PROFILE_SCALE: f64 = 0.6;
/// Bounds on the final prior scale.
pub const PRIOR_SCALE_MIN: f64 = 0.15;
pub const PRIOR_SCALE_MAX: f64 = 1.0;

/// Result of one update, with the intermediate values used to reach it.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateOutcome {
    pub belief: BeliefVector,
    /// Factor applied to the context-delta.
    pub prior_scale: f64,
    /// Total language-delta mass before capping.
    pub language_mass: f64,
    /// Scaled context plus language, after the per-message cap.
    pub combined: DeltaVector,
    /// The smoothed vector could not be normalized and neutral was used.
    pub fell_back_to_neutral: bool,
}

/// Stateless updater; the belief vector is passed in and returned.
#[derive(Debug, Clone, Copy)]
pub struct BeliefUpdater {
    config: BeliefConfig,
}

impl BeliefUpdater {
    pub fn new(config: BeliefConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BeliefConfig {
        &self.config
    }

    /// Fold one turn's deltas into `previous` (neutral when `None`).
    pub fn update(
        &self,
        previous: Option<&BeliefVector>,
        context_delta: &DeltaVector,
        language_delta: &DeltaVector,
    ) -> UpdateOutcome {
        let previous = previous.copied().unwrap_or_default();
        let language_mass = language_delta.mass();
        let prior_scale = prior_scale(
            language_mass,
            previous.margin(),
            self.config.confidence_threshold,
        );

        let combined = context_delta
            .scaled(prior_scale)
            .combined(language_delta)
            .capped(self.config.max_delta_per_message);

        let s = self.config.smoothing_factor;
        let mut raw = [0.0; Archetype::COUNT];
        for archetype in Archetype::ALL {
            let prev = previous.weight(archetype);
            let delta = combined.get(archetype);
            raw[archetype.index()] = s * prev + (1.0 - s) * (prev + delta);
        }

        let sum: f64 = raw.iter().sum();
        let fell_back_to_neutral = !sum.is_finite() || sum <= 0.0;
        let belief = BeliefVector::normalized(raw);

        tracing::debug!(
            prior_scale,
            language_mass,
            combined_mass = combined.mass(),
            fell_back_to_neutral,
            "belief updated"
        );

        UpdateOutcome {
            belief,
            prior_scale,
            language_mass,
            combined,
            fell_back_to_neutral,
        }
    }
}

impl Default for BeliefUpdater {
    fn default() -> Self {
        Self::new(BeliefConfig::default())
    }
}

/// Factor in [`PRIOR_SCALE_MIN`], [`PRIOR_SCALE_MAX`] applied to the
/// context-delta.
///
/// Shrinks as language mass grows, and shrinks further when the previous
/// vector's margin already meets `threshold`.
pub fn prior_scale(language_mass: f64, previous_margin: f64, threshold: f64) -> f64 {
    let language_mass = if language_mass.is_finite() {
        language_mass.max(0.0)
    } else {
        0.0
    };
    let language_strength = (language_mass / LANGUAGE_SATURATION_MASS).min(1.0);
    let language_scale = (1.0 - LANGUAGE_SCALE_SLOPE * language_strength).max(MIN_LANGUAGE_SCALE);
    let profile_scale = if previous_margin >= threshold {
        CONFIDENT_PROFILE_SCALE
    } else {
        1.0
    };
    (language_scale * profile_scale).clamp(PRIOR_SCALE_MIN, PRIOR_SCALE_MAX)
}
