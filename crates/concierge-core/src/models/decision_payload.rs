use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::DecisionRecord;

/// Read-only projection of a [`DecisionRecord`] emitted for analytics.
///
/// Scores are keyed by archetype label so the stored form stays readable
/// after the enum evolves; the analytics reader re-validates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DecisionPayload {
    pub decision_id: String,
    pub session_id: String,
    pub emitted_at: DateTime<Utc>,
    pub primary: Option<String>,
    pub scores: BTreeMap<String, f64>,
    pub confidence: f64,
    pub signals: Vec<String>,
    pub override_used: bool,
}

impl DecisionPayload {
    pub fn from_record(
        record: &DecisionRecord,
        session_id: impl Into<String>,
        decision_id: Uuid,
        emitted_at: DateTime<Utc>,
    ) -> Self {
        Self {
            decision_id: decision_id.to_string(),
            session_id: session_id.into(),
            emitted_at,
            primary: record.primary.map(|a| a.as_str().to_string()),
            scores: record
                .belief
                .iter()
                .map(|(a, w)| (a.as_str().to_string(), w))
                .collect(),
            confidence: record.margin,
            signals: record.signals.clone(),
            override_used: record.override_used,
        }
    }
}
