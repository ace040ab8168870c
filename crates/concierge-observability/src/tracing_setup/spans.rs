//! Span definitions for per-turn operations.

/// Span wrapping one full turn for a session.
#[macro_export]
macro_rules! turn_span {
    ($session_id:expr) => {
        tracing::info_span!("concierge.turn", session_id = %$session_id)
    };
}

/// Span wrapping reply validation.
#[macro_export]
macro_rules! guardrail_span {
    ($mode:expr) => {
        tracing::info_span!("concierge.guardrail", evidence_mode = %$mode)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const TURN: &str = "concierge.turn";
    pub const GUARDRAIL: &str = "concierge.guardrail";
}
