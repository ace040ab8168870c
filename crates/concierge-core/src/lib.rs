//! # concierge-core
//!
//! Foundation crate for the concierge decision engine.
//! Defines the archetype taxonomy, belief/delta vectors, turn and verdict
//! models, errors, config, and constants. Every other crate in the
//! workspace depends on this.

pub mod archetype;
pub mod belief;
pub mod config;
pub mod constants;
pub mod errors;
pub mod models;

// Re-export the most commonly used types at the crate root.
pub use archetype::Archetype;
pub use belief::{BeliefVector, DeltaVector};
pub use config::{ConciergeConfig, EvidenceMode};
pub use errors::{ConciergeError, ConciergeResult};
pub use models::{
    BlockCategory, DecisionPayload, DecisionRecord, GuardrailVerdict, RetrievalDecision,
    RetrievalReason, TurnContext,
};
