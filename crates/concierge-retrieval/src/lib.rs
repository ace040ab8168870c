//! # concierge-retrieval
//!
//! Decides, per turn and independently of the belief state, whether the
//! external retrieval step should run before generation. Rules are
//! evaluated in priority order and the first match wins; when nothing
//! matches the gate retrieves.

pub mod gate;
pub mod rules;

pub use gate::RetrievalGate;
pub use rules::{GateInput, GateRule};
