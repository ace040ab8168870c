//! Belief and delta vectors over the archetype set.
//!
//! Both are fixed-size arrays indexed by [`Archetype::index`], so every
//! archetype is always present and iteration follows canonical order.

use serde::{Deserialize, Serialize};

use crate::archetype::Archetype;
use crate::constants::{NEUTRAL_WEIGHT, WEIGHT_SUM_TOLERANCE};

/// Normalized probability distribution over archetypes.
///
/// Invariant: weights are finite, non-negative, and sum to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BeliefVector {
    weights: [f64; Archetype::COUNT],
}

impl BeliefVector {
    /// All archetypes equally likely.
    pub fn neutral() -> Self {
        Self {
            weights: [NEUTRAL_WEIGHT; Archetype::COUNT],
        }
    }

    /// Build from raw, possibly unnormalized weights.
    ///
    /// Negative and non-finite entries count as zero. Falls back to neutral
    /// when the remaining mass is zero or not finite.
    pub fn normalized(raw: [f64; Archetype::COUNT]) -> Self {
        let mut weights = raw.map(|w| if w.is_finite() && w > 0.0 { w } else { 0.0 });
        let sum: f64 = weights.iter().sum();
        if !sum.is_finite() || sum <= 0.0 {
            return Self::neutral();
        }
        for w in &mut weights {
            *w /= sum;
        }
        Self { weights }
    }

    /// `archetype` holds `weight`; the remainder is split evenly.
    /// `weight` is clamped to [0, 1].
    pub fn dominant(archetype: Archetype, weight: f64) -> Self {
        let weight = if weight.is_finite() {
            weight.clamp(0.0, 1.0)
        } else {
            1.0
        };
        let rest = (1.0 - weight) / (Archetype::COUNT - 1) as f64;
        let mut weights = [rest; Archetype::COUNT];
        weights[archetype.index()] = weight;
        Self { weights }
    }

    pub fn weight(&self, archetype: Archetype) -> f64 {
        self.weights[archetype.index()]
    }

    pub fn weights(&self) -> &[f64; Archetype::COUNT] {
        &self.weights
    }

    /// `(archetype, weight)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Archetype, f64)> + '_ {
        Archetype::ALL.into_iter().map(|a| (a, self.weights[a.index()]))
    }

    pub fn sum(&self) -> f64 {
        self.weights.iter().sum()
    }

    /// Whether the invariant holds within [`WEIGHT_SUM_TOLERANCE`].
    pub fn is_normalized(&self) -> bool {
        self.weights.iter().all(|w| w.is_finite() && *w >= 0.0)
            && (self.sum() - 1.0).abs() <= WEIGHT_SUM_TOLERANCE * Archetype::COUNT as f64
    }

    /// Archetypes sorted by weight descending; ties keep canonical order.
    pub fn ranked(&self) -> [(Archetype, f64); Archetype::COUNT] {
        let mut ranked = Archetype::ALL.map(|a| (a, self.weights[a.index()]));
        // Stable sort: equal weights stay in canonical order.
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked
    }

    /// Highest-weighted archetype, canonical order breaking ties.
    pub fn leader(&self) -> Archetype {
        self.ranked()[0].0
    }

    /// Winner weight minus runner-up weight.
    pub fn margin(&self) -> f64 {
        let ranked = self.ranked();
        ranked[0].1 - ranked[1].1
    }
}

impl Default for BeliefVector {
    fn default() -> Self {
        Self::neutral()
    }
}

/// Per-turn, non-negative contribution toward each archetype.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DeltaVector {
    weights: [f64; Archetype::COUNT],
}

impl DeltaVector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add weight toward `archetype`. Negative and non-finite amounts are
    /// ignored: deltas only ever push.
    pub fn add(&mut self, archetype: Archetype, amount: f64) {
        if amount.is_finite() && amount > 0.0 {
            self.weights[archetype.index()] += amount;
        }
    }

    pub fn get(&self, archetype: Archetype) -> f64 {
        self.weights[archetype.index()]
    }

    pub fn weights(&self) -> &[f64; Archetype::COUNT] {
        &self.weights
    }

    /// Total weight across archetypes.
    pub fn mass(&self) -> f64 {
        self.weights.iter().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.iter().all(|w| *w == 0.0)
    }

    /// Every entry multiplied by `factor` (negative factors yield zero).
    pub fn scaled(&self, factor: f64) -> Self {
        let factor = if factor.is_finite() { factor.max(0.0) } else { 0.0 };
        Self {
            weights: self.weights.map(|w| w * factor),
        }
    }

    /// Entry-wise sum.
    pub fn combined(&self, other: &DeltaVector) -> Self {
        let mut weights = self.weights;
        for (w, o) in weights.iter_mut().zip(other.weights.iter()) {
            *w += o;
        }
        Self { weights }
    }

    /// Every entry limited to at most `cap`.
    pub fn capped(&self, cap: f64) -> Self {
        let cap = cap.max(0.0);
        Self {
            weights: self.weights.map(|w| w.min(cap)),
        }
    }
}
