//! Primary-archetype resolution.
//!
//! The leader is only reported when it beats the runner-up by at least the
//! confidence threshold. Ambiguous vectors resolve to `None`.

use concierge_core::config::BeliefConfig;
use concierge_core::{Archetype, BeliefVector, DecisionRecord};

use crate::updater::UpdateOutcome;

#[derive(Debug, Clone, Copy)]
pub struct PrimaryResolver {
    confidence_threshold: f64,
    override_weight: f64,
}

impl PrimaryResolver {
    pub fn new(config: &BeliefConfig) -> Self {
        Self {
            confidence_threshold: config.confidence_threshold,
            override_weight: config.override_weight,
        }
    }

    pub fn confidence_threshold(&self) -> f64 {
        self.confidence_threshold
    }

    /// The leader, if its margin meets the threshold.
    pub fn primary(&self, belief: &BeliefVector) -> Option<Archetype> {
        let ranked = belief.ranked();
        let margin = ranked[0].1 - ranked[1].1;
        (margin >= self.confidence_threshold).then_some(ranked[0].0)
    }

    /// Build the decision record for a normal (non-override) turn.
    pub fn resolve(&self, outcome: &UpdateOutcome, signals: Vec<String>) -> DecisionRecord {
        let belief = outcome.belief;
        let margin = belief.margin();
        let primary = self.primary(&belief);

        let verdict = match primary {
            Some(archetype) => format!(
                "resolved {archetype}: margin {margin:.3} >= threshold {:.3}",
                self.confidence_threshold
            ),
            None => format!(
                "inconclusive: margin {margin:.3} < threshold {:.3} (leader {})",
                self.confidence_threshold,
                belief.leader()
            ),
        };
        let mut reasoning = format!(
            "{verdict}; prior scale {:.2}; signals: {}",
            outcome.prior_scale,
            describe_signals(&signals)
        );
        if outcome.fell_back_to_neutral {
            reasoning.push_str("; degenerate update, reset to neutral");
        }

        DecisionRecord {
            primary,
            belief,
            margin,
            reasoning,
            signals,
            override_used: false,
        }
    }

    /// Build the decision record for a manual override. The vector is fixed
    /// and always resolves to `archetype`, whatever the threshold.
    pub fn resolve_override(&self, archetype: Archetype, signals: Vec<String>) -> DecisionRecord {
        let belief = BeliefVector::dominant(archetype, self.override_weight);
        DecisionRecord {
            primary: Some(archetype),
            margin: belief.margin(),
            belief,
            reasoning: format!(
                "manual override to {archetype} (weight {:.2}); signals: {}",
                self.override_weight,
                describe_signals(&signals)
            ),
            signals,
            override_used: true,
        }
    }
}

impl Default for PrimaryResolver {
    fn default() -> Self {
        Self::new(&BeliefConfig::default())
    }
}

fn describe_signals(signals: &[String]) -> String {
    if signals.is_empty() {
        "none".to_string()
    } else {
        signals.join(", ")
    }
}
