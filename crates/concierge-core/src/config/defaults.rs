// Single source of truth for all default values.

// --- Belief ---
pub const DEFAULT_SMOOTHING_FACTOR: f64 = 0.75;
pub const DEFAULT_CONFIDENCE_THRESHOLD: f64 = 0.08;
pub const DEFAULT_MAX_DELTA_PER_MESSAGE: f64 = 0.6;
pub const DEFAULT_OVERRIDE_WEIGHT: f64 = 0.7;

// --- Guardrail ---
pub const DEFAULT_EVIDENCE_MODE: &str = "general_unsourced";

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;
