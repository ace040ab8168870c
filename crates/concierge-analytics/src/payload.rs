//! Re-validation of emitted decision payloads.

use concierge_core::errors::AnalyticsError;
use concierge_core::{Archetype, DecisionPayload};

use crate::normalize::{normalize_scores, NormalizedScores};
use crate::ranking::{summarize, Summary};

/// A stored payload re-read and re-judged.
#[derive(Debug, Clone, PartialEq)]
pub struct PayloadReading {
    pub payload: DecisionPayload,
    pub scores: NormalizedScores,
    pub summary: Summary,
    /// The stored primary, when it names a known archetype.
    pub stored_primary: Option<Archetype>,
    /// Stored primary and recomputed winner are the same (both `None` agrees).
    pub agrees: bool,
}

/// Parse a JSON decision payload, re-normalize its scores and check the
/// stored primary against the winner recomputed under `threshold`.
pub fn read_payload(json: &str, threshold: f64) -> Result<PayloadReading, AnalyticsError> {
    let payload: DecisionPayload =
        serde_json::from_str(json).map_err(|e| AnalyticsError::MalformedPayload {
            reason: e.to_string(),
        })?;
    Ok(judge(payload, threshold))
}

/// Re-judge an already deserialized payload.
pub fn judge(payload: DecisionPayload, threshold: f64) -> PayloadReading {
    let scores = normalize_scores(payload.scores.iter().map(|(k, v)| (k.as_str(), *v)));
    let summary = summarize(&scores, threshold);

    let stored_primary = payload.primary.as_deref().and_then(|p| p.parse().ok());
    let stored_label_unknown = payload.primary.is_some() && stored_primary.is_none();
    let agrees = !stored_label_unknown && stored_primary == summary.winner;

    if !agrees {
        tracing::debug!(
            decision_id = %payload.decision_id,
            stored = ?payload.primary,
            recomputed = ?summary.winner,
            "stored primary disagrees with recomputed winner"
        );
    }

    PayloadReading {
        payload,
        scores,
        summary,
        stored_primary,
        agrees,
    }
}
