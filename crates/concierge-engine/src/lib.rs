//! # concierge-engine
//!
//! One entry point for the host application. Each turn the host calls
//! [`DecisionEngine::process_turn`] with the previous belief it stored for
//! the session, asks [`DecisionEngine::gate_retrieval`] whether to consult
//! the knowledge base, and passes the generated reply through
//! [`DecisionEngine::validate_reply`] before showing it.

pub mod engine;
pub mod session;

pub use engine::DecisionEngine;
pub use session::Session;
