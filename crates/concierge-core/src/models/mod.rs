mod decision_payload;
mod decision_record;
mod guardrail_verdict;
mod retrieval_decision;
mod turn_context;

pub use decision_payload::DecisionPayload;
pub use decision_record::DecisionRecord;
pub use guardrail_verdict::{BlockCategory, GuardrailVerdict};
pub use retrieval_decision::{RetrievalDecision, RetrievalReason};
pub use turn_context::TurnContext;
