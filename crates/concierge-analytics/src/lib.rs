//! # concierge-analytics
//!
//! Read side of the decision log. Stored score maps come from many writers
//! and several schema revisions: keys may be missing or unknown, values may
//! be percentages or fractions. Everything here re-validates from scratch
//! and never trusts the stored primary.

pub mod distribution;
pub mod normalize;
pub mod payload;
pub mod ranking;

pub use distribution::Distribution;
pub use normalize::{normalize_scores, normalize_value, NormalizedScores, ScoreScale};
pub use payload::{read_payload, PayloadReading};
pub use ranking::{summarize, Summary};
