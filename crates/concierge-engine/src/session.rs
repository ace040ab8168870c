//! A single visitor's conversation state.

use concierge_core::{BeliefVector, DecisionPayload, DecisionRecord, TurnContext};

use crate::engine::DecisionEngine;

/// Belief carried between turns for one session. The engine never holds
/// it; the host stores this value wherever it keeps session data.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    id: String,
    belief: Option<BeliefVector>,
    turns: u32,
}

impl Session {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            belief: None,
            turns: 0,
        }
    }

    /// Resume a session from a stored belief vector.
    pub fn resume(id: impl Into<String>, belief: BeliefVector, turns: u32) -> Self {
        Self {
            id: id.into(),
            belief: Some(belief),
            turns,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Current belief, neutral before the first turn.
    pub fn belief(&self) -> BeliefVector {
        self.belief.unwrap_or_default()
    }

    pub fn turns(&self) -> u32 {
        self.turns
    }

    /// Run one turn and keep the updated belief.
    pub fn turn(&mut self, engine: &DecisionEngine, ctx: &TurnContext) -> DecisionRecord {
        let span = concierge_observability::turn_span!(self.id);
        let _guard = span.enter();

        let record = engine.process_turn(ctx, self.belief.as_ref());
        self.belief = Some(record.belief);
        self.turns += 1;
        record
    }

    /// Payload for `record`, tagged with this session's id.
    pub fn payload(&self, engine: &DecisionEngine, record: &DecisionRecord) -> DecisionPayload {
        engine.emit_payload(record, &self.id)
    }
}
