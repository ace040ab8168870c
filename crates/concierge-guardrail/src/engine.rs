use concierge_core::config::{EvidenceMode, GuardrailConfig};
use concierge_core::GuardrailVerdict;

use crate::annotate;
use crate::blocks;
use crate::degradation::DegradationTracker;
use crate::messages::safe_message;
use crate::patterns;

/// Rule id recorded when the disclosure label is added.
pub const LABEL_RULE_ID: &str = "annotation.disclosure_label";

/// Post-validates generated replies.
///
/// Stateless apart from the configured evidence mode; patterns are compiled
/// once per process and shared.
#[derive(Debug, Clone, Copy, Default)]
pub struct GuardrailEngine {
    evidence_mode: EvidenceMode,
}

impl GuardrailEngine {
    pub fn new(config: &GuardrailConfig) -> Self {
        Self {
            evidence_mode: config.evidence_mode,
        }
    }

    pub fn with_mode(evidence_mode: EvidenceMode) -> Self {
        Self { evidence_mode }
    }

    pub fn evidence_mode(&self) -> EvidenceMode {
        self.evidence_mode
    }

    /// Validate under the configured evidence mode.
    pub fn validate(&self, text: &str) -> GuardrailVerdict {
        self.validate_with_mode(text, self.evidence_mode)
    }

    pub fn validate_with_mode(&self, text: &str, mode: EvidenceMode) -> GuardrailVerdict {
        self.validate_with_tracking(text, mode).0
    }

    /// Validate and return the degradation tracker alongside the verdict so
    /// callers can report patterns that failed to compile.
    pub fn validate_with_tracking(
        &self,
        text: &str,
        mode: EvidenceMode,
    ) -> (GuardrailVerdict, DegradationTracker) {
        let mut tracker = DegradationTracker::new();
        check_pattern_health(&mut tracker);

        let hits = blocks::detect(text);
        if let Some(first) = hits.first() {
            let replacement = safe_message(first.category);
            let rule_ids = hits
                .iter()
                .flat_map(|h| h.rule_ids.iter().map(|id| id.to_string()))
                .collect();
            tracing::debug!(category = %first.category, "reply replaced with safe message");
            let verdict = GuardrailVerdict {
                text: replacement.to_string(),
                triggered: true,
                rule_ids,
                category: Some(first.category),
                replaced_with_block: true,
                label_injected: false,
                qualifier_injected: false,
                changed: text != replacement,
            };
            return (verdict, tracker);
        }

        if mode != EvidenceMode::GeneralUnsourced || text.trim().is_empty() {
            return (GuardrailVerdict::passthrough(text), tracker);
        }

        let mut verdict = GuardrailVerdict::passthrough(text);
        if let Some(labelled) = annotate::ensure_label(&verdict.text) {
            verdict.text = labelled;
            verdict.label_injected = true;
            verdict.rule_ids.push(LABEL_RULE_ID.to_string());
        }
        if let Some(topic) = annotate::sensitive_claim(&verdict.text) {
            if let Some(qualified) = annotate::ensure_qualifier(&verdict.text) {
                verdict.text = qualified;
                verdict.qualifier_injected = true;
                verdict.rule_ids.push(topic.to_string());
            }
        }
        verdict.triggered = !verdict.rule_ids.is_empty();
        verdict.changed = verdict.text != text;
        (verdict, tracker)
    }
}

/// Check which patterns failed to compile and record them in the tracker.
fn check_pattern_health(tracker: &mut DegradationTracker) {
    for (group, table) in patterns::all_groups() {
        for pat in table.iter().filter(|p| !p.is_compiled()) {
            tracker.record_failure(pat.id, group, "regex compilation failed");
        }
    }
}
