use std::path::Path;

use chrono::Utc;
use concierge_belief::BeliefEngine;
use concierge_core::config::EvidenceMode;
use concierge_core::{
    BeliefVector, ConciergeConfig, ConciergeResult, DecisionPayload, DecisionRecord,
    GuardrailVerdict, RetrievalDecision, TurnContext,
};
use concierge_guardrail::GuardrailEngine;
use concierge_observability::tracing_setup::events;
use concierge_retrieval::RetrievalGate;
use concierge_signals::SignalExtractor;
use uuid::Uuid;

/// Wires extraction, belief, retrieval gating and the guardrail together.
///
/// Holds no per-session state: the caller owns each session's belief vector
/// and passes it back in on the next turn. Safe to share across threads.
#[derive(Debug, Clone)]
pub struct DecisionEngine {
    config: ConciergeConfig,
    extractor: SignalExtractor,
    belief: BeliefEngine,
    gate: RetrievalGate,
    guardrail: GuardrailEngine,
}

impl DecisionEngine {
    /// Build from a validated configuration.
    pub fn new(config: ConciergeConfig) -> ConciergeResult<Self> {
        config.validate()?;
        Ok(Self {
            extractor: SignalExtractor::new(),
            belief: BeliefEngine::new(config.belief),
            gate: RetrievalGate::new(),
            guardrail: GuardrailEngine::new(&config.guardrail),
            config,
        })
    }

    /// Load configuration (defaults, optional TOML file, then environment)
    /// and build the engine.
    pub fn from_config_file(path: Option<&Path>) -> ConciergeResult<Self> {
        Self::new(ConciergeConfig::load(path)?)
    }

    pub fn config(&self) -> &ConciergeConfig {
        &self.config
    }

    /// Extract signals, update the belief and resolve the primary archetype.
    pub fn process_turn(
        &self,
        ctx: &TurnContext,
        previous: Option<&BeliefVector>,
    ) -> DecisionRecord {
        let extraction = self.extractor.extract(ctx);
        let (record, outcome) = self.belief.step_with_outcome(&extraction, previous);

        if let Some(outcome) = &outcome {
            events::belief_updated(
                outcome.belief.leader().as_str(),
                outcome.belief.margin(),
                outcome.prior_scale,
                outcome.language_mass,
            );
        }
        events::archetype_resolved(
            record.primary.map(|a| a.as_str()),
            record.margin,
            record.override_used,
            record.signals.len(),
        );
        record
    }

    /// Decide whether to run retrieval before generating a reply.
    pub fn gate_retrieval(&self, ctx: &TurnContext) -> RetrievalDecision {
        let decision = self.gate.decide(ctx);
        events::retrieval_gated(
            decision.retrieve,
            decision.reason.as_str(),
            decision.matched.as_deref(),
        );
        decision
    }

    /// Validate a generated reply under the configured evidence mode.
    pub fn validate_reply(&self, text: &str) -> GuardrailVerdict {
        self.validate_reply_with_mode(text, self.config.guardrail.evidence_mode)
    }

    /// Validate a generated reply under an explicit evidence mode, e.g.
    /// `Sourced` when retrieval returned documents for this turn.
    pub fn validate_reply_with_mode(&self, text: &str, mode: EvidenceMode) -> GuardrailVerdict {
        let span = concierge_observability::guardrail_span!(mode);
        let _guard = span.enter();

        let (verdict, tracker) = self.guardrail.validate_with_tracking(text, mode);
        for failure in tracker.failures() {
            events::pattern_degraded(&failure.pattern, &failure.group, &failure.reason);
        }
        if let Some(category) = verdict.category {
            events::guardrail_blocked(category.as_str(), &verdict.rule_ids);
        } else if verdict.label_injected || verdict.qualifier_injected {
            events::guardrail_annotated(
                verdict.label_injected,
                verdict.qualifier_injected,
                &verdict.rule_ids,
            );
        }
        verdict
    }

    /// Project a decision into the read-only payload stored for analytics.
    pub fn emit_payload(&self, record: &DecisionRecord, session_id: &str) -> DecisionPayload {
        DecisionPayload::from_record(record, session_id, Uuid::new_v4(), Utc::now())
    }
}

impl Default for DecisionEngine {
    fn default() -> Self {
        let config = ConciergeConfig::default();
        Self {
            extractor: SignalExtractor::new(),
            belief: BeliefEngine::new(config.belief),
            gate: RetrievalGate::new(),
            guardrail: GuardrailEngine::new(&config.guardrail),
            config,
        }
    }
}
