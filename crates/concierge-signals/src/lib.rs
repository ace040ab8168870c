//! # concierge-signals
//!
//! Turns a [`TurnContext`](concierge_core::TurnContext) into two delta
//! vectors: one from static context (mode, page, model) and one from the
//! visitor's language (free text and precomputed hints). Matching is token
//! aware, so "cast" never fires on "broadcast".

pub mod catalogue;
pub mod engine;
pub mod extractors;
pub mod text;

pub use engine::{Extraction, FiredSignal, SignalExtractor, SignalSource};
pub use text::{tokenize, Phrase};
