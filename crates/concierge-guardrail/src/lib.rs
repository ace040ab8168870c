//! # concierge-guardrail
//!
//! Post-validates a generated reply before it reaches the visitor.
//!
//! Two tiers. The hard-block tier (system leakage, pricing claims, unsafe
//! procedures, legal claims, in that priority) discards the reply and
//! substitutes a fixed safe message. The soft tier only runs when nothing
//! blocked and the evidence mode is `general_unsourced`: it adds a disclosure
//! label and, for brand-adjacent claims about warranty, policy, pricing or
//! returns, a qualifier line. Both annotations are idempotent.

pub mod annotate;
pub mod blocks;
pub mod degradation;
pub mod engine;
pub mod messages;
pub mod patterns;

pub use degradation::DegradationTracker;
pub use engine::GuardrailEngine;
pub use messages::{safe_message, DISCLOSURE_LABEL, QUALIFIER_LINE};
