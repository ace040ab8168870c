use crate::archetype::Archetype;

/// Engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Weight each archetype holds in the neutral belief vector.
pub const NEUTRAL_WEIGHT: f64 = 1.0 / Archetype::COUNT as f64;

/// Tolerance used when checking that a vector sums to 1.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// Prefix accepted (and stripped) in front of a manual override phrase.
pub const OVERRIDE_PREFIX: &str = "persona:";
