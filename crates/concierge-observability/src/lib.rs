//! # concierge-observability
//!
//! Subscriber setup and the structured events every turn emits: belief
//! updates, archetype resolution, retrieval gating, guardrail interventions
//! and degraded patterns.

pub mod tracing_setup;

pub use tracing_setup::{init_tracing, init_tracing_from_config, init_tracing_with_filter};
