//! # concierge-belief
//!
//! Folds per-turn signal deltas into a smoothed, normalized belief vector
//! and resolves a primary archetype only when the margin is convincing.

pub mod engine;
pub mod resolver;
pub mod updater;

pub use engine::BeliefEngine;
pub use resolver::PrimaryResolver;
pub use updater::{BeliefUpdater, UpdateOutcome};
