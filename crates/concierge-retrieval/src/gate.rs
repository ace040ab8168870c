use concierge_core::{RetrievalDecision, RetrievalReason, TurnContext};

use crate::rules::{GateInput, GateRule, RULES};

/// Ordered rule chain over a turn context.
#[derive(Debug, Clone, Copy, Default)]
pub struct RetrievalGate;

impl RetrievalGate {
    pub fn new() -> Self {
        Self
    }

    /// The rule chain in evaluation order.
    pub fn rules(&self) -> &'static [GateRule] {
        RULES
    }

    pub fn decide(&self, ctx: &TurnContext) -> RetrievalDecision {
        let input = GateInput::from_context(ctx);
        for rule in RULES {
            if let Some(matched) = (rule.check)(&input) {
                tracing::debug!(
                    rule = rule.reason.as_str(),
                    retrieve = rule.retrieve,
                    matched = %matched,
                    "retrieval rule matched"
                );
                return RetrievalDecision {
                    retrieve: rule.retrieve,
                    reason: rule.reason,
                    matched: Some(matched),
                };
            }
        }
        RetrievalDecision {
            retrieve: true,
            reason: RetrievalReason::DefaultRetrieve,
            matched: None,
        }
    }
}
