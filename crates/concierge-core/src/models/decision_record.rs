use serde::{Deserialize, Serialize};

use crate::archetype::Archetype;
use crate::belief::BeliefVector;

/// Outcome of one belief update and resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionRecord {
    /// Resolved archetype, `None` when the belief state is inconclusive.
    pub primary: Option<Archetype>,
    /// Updated belief vector, to be carried into the next turn.
    pub belief: BeliefVector,
    /// Winner weight minus runner-up weight.
    pub margin: f64,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
    /// Ids of the signals that fired this turn.
    pub signals: Vec<String>,
    /// Whether the manual override path produced this record.
    pub override_used: bool,
}

impl DecisionRecord {
    pub fn is_conclusive(&self) -> bool {
        self.primary.is_some()
    }
}
