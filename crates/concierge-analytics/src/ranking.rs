//! Winner, runner-up and confidence over normalized scores.
//!
//! Ordering is weight descending with ties broken by canonical archetype
//! order; confidence is winner minus runner-up. A winner is only reported
//! when confidence reaches the threshold.

use concierge_core::Archetype;
use serde::{Deserialize, Serialize};

use crate::normalize::NormalizedScores;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Highest-weighted archetype regardless of confidence.
    pub leader: Archetype,
    pub runner_up: Archetype,
    /// Leader weight minus runner-up weight.
    pub confidence: f64,
    /// The leader, when `confidence >= threshold`.
    pub winner: Option<Archetype>,
}

/// Rank `scores` and decide a winner under `threshold`.
pub fn summarize(scores: &NormalizedScores, threshold: f64) -> Summary {
    let mut order: Vec<usize> = (0..Archetype::COUNT).collect();
    order.sort_by(|&a, &b| {
        scores.weights[b]
            .total_cmp(&scores.weights[a])
            .then(a.cmp(&b))
    });

    let leader = Archetype::ALL[order[0]];
    let runner_up = Archetype::ALL[order[1]];
    let confidence = scores.weights[order[0]] - scores.weights[order[1]];
    Summary {
        leader,
        runner_up,
        confidence,
        winner: (confidence >= threshold).then_some(leader),
    }
}
