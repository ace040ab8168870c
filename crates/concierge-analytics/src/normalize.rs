//! Score normalization for stored archetype maps.

use std::collections::BTreeMap;

use concierge_core::errors::AnalyticsError;
use concierge_core::{Archetype, BeliefVector};
use serde::{Deserialize, Serialize};

/// Any finite value above this marks the whole map as percentages.
pub const PERCENTAGE_DETECTION_THRESHOLD: f64 = 1.5;

/// Scale the stored values were written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreScale {
    Unit,
    Percentage,
}

/// A stored score map brought back to a distribution over every archetype.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedScores {
    /// Canonical archetype order; sums to 1.
    pub weights: [f64; Archetype::COUNT],
    pub scale: ScoreScale,
    /// Archetypes absent from the stored map (filled with 0 before normalizing).
    pub missing: Vec<Archetype>,
    /// Keys that did not name an archetype, or repeated one already seen.
    pub ignored_keys: Vec<String>,
    /// Every clamped value was zero, so the neutral distribution was used.
    pub fell_back_to_neutral: bool,
}

impl NormalizedScores {
    pub fn weight(&self, archetype: Archetype) -> f64 {
        self.weights[archetype.index()]
    }

    /// Snake-case label → weight, the shape payloads are stored in.
    pub fn as_map(&self) -> BTreeMap<String, f64> {
        Archetype::ALL
            .iter()
            .map(|a| (a.as_str().to_string(), self.weights[a.index()]))
            .collect()
    }

    pub fn to_belief(&self) -> BeliefVector {
        BeliefVector::normalized(self.weights)
    }
}

/// Normalize `(key, value)` pairs.
///
/// Keys are parsed case-insensitively (aliases included); the first key for
/// an archetype wins. Non-finite values count as 0. If any archetype value
/// exceeds [`PERCENTAGE_DETECTION_THRESHOLD`] every value is divided by 100.
/// Values are clamped to `[0, 1]` and re-normalized to sum to 1.
///
/// Ignored keys take no part in scale detection: stored maps carry counters
/// and metadata next to the scores (`"turns": 12`), and those must not turn
/// a unit-scale map into a percentage one.
pub fn normalize_scores<I, K>(entries: I) -> NormalizedScores
where
    I: IntoIterator<Item = (K, f64)>,
    K: AsRef<str>,
{
    let mut raw: [Option<f64>; Archetype::COUNT] = [None; Archetype::COUNT];
    let mut ignored_keys = Vec::new();

    for (key, value) in entries {
        let key = key.as_ref();
        match key.parse::<Archetype>() {
            Ok(archetype) if raw[archetype.index()].is_none() => {
                raw[archetype.index()] = Some(if value.is_finite() { value } else { 0.0 });
            }
            _ => ignored_keys.push(key.to_string()),
        }
    }

    let scale = if raw.iter().flatten().any(|&v| v > PERCENTAGE_DETECTION_THRESHOLD) {
        ScoreScale::Percentage
    } else {
        ScoreScale::Unit
    };
    let divisor = match scale {
        ScoreScale::Unit => 1.0,
        ScoreScale::Percentage => 100.0,
    };

    let missing = Archetype::ALL
        .iter()
        .copied()
        .filter(|a| raw[a.index()].is_none())
        .collect();

    let mut weights = [0.0; Archetype::COUNT];
    for (slot, value) in weights.iter_mut().zip(raw) {
        *slot = (value.unwrap_or(0.0) / divisor).clamp(0.0, 1.0);
    }

    let sum: f64 = weights.iter().sum();
    let fell_back_to_neutral = !(sum.is_finite() && sum > 0.0);
    if fell_back_to_neutral {
        weights = [1.0 / Archetype::COUNT as f64; Archetype::COUNT];
    } else {
        for w in &mut weights {
            *w /= sum;
        }
    }

    if !ignored_keys.is_empty() {
        tracing::debug!(ignored = ?ignored_keys, "ignored unknown score keys");
    }

    NormalizedScores {
        weights,
        scale,
        missing,
        ignored_keys,
        fell_back_to_neutral,
    }
}

/// Normalize a JSON object of scores. Numeric strings are accepted; any
/// other non-numeric value counts as 0.
pub fn normalize_value(value: &serde_json::Value) -> Result<NormalizedScores, AnalyticsError> {
    let object = value.as_object().ok_or(AnalyticsError::NotAnObject)?;
    Ok(normalize_scores(
        object.iter().map(|(k, v)| (k.as_str(), numeric(v))),
    ))
}

fn numeric(value: &serde_json::Value) -> f64 {
    match value {
        serde_json::Value::Number(n) => n.as_f64().unwrap_or(0.0),
        serde_json::Value::String(s) => s.trim().trim_end_matches('%').trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_strings_are_read() {
        assert_eq!(numeric(&serde_json::json!("42.5")), 42.5);
        assert_eq!(numeric(&serde_json::json!(" 40% ")), 40.0);
        assert_eq!(numeric(&serde_json::json!("n/a")), 0.0);
        assert_eq!(numeric(&serde_json::json!(null)), 0.0);
        assert_eq!(numeric(&serde_json::json!(true)), 0.0);
    }

    #[test]
    fn duplicate_archetype_keys_keep_the_first() {
        let scores = normalize_scores([("Legacy", 0.6), ("legacy", 0.1), ("prestige", 0.4)]);
        assert!((scores.weight(Archetype::Legacy) - 0.6).abs() < 1e-12);
        assert_eq!(scores.ignored_keys, vec!["legacy".to_string()]);
    }

    #[test]
    fn ignored_keys_do_not_decide_the_scale() {
        let scores = normalize_scores([("prestige", 0.6), ("legacy", 0.4), ("turns", 12.0)]);
        assert_eq!(scores.scale, ScoreScale::Unit);
        assert!((scores.weight(Archetype::Prestige) - 0.6).abs() < 1e-12);
        assert_eq!(scores.ignored_keys, vec!["turns".to_string()]);

        let percent = normalize_scores([("prestige", 60.0), ("legacy", 40.0), ("turns", 12.0)]);
        assert_eq!(percent.scale, ScoreScale::Percentage);
        assert_eq!(percent.weights, scores.weights);
    }
}
