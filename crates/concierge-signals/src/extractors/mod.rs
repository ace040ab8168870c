//! Individual extractors. Each one is independent and additive: it only
//! ever adds weight to a delta vector and records what fired.

pub mod context;
pub mod hints;
pub mod language;
pub mod override_phrase;
