//! Engine configuration with layered resolution.

pub mod belief_config;
pub mod defaults;
pub mod guardrail_config;
pub mod observability_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use belief_config::BeliefConfig;
pub use guardrail_config::{EvidenceMode, GuardrailConfig};
pub use observability_config::ObservabilityConfig;

use crate::errors::ConfigError;

pub const ENV_SMOOTHING_FACTOR: &str = "CONCIERGE_SMOOTHING_FACTOR";
pub const ENV_CONFIDENCE_THRESHOLD: &str = "CONCIERGE_CONFIDENCE_THRESHOLD";
pub const ENV_MAX_DELTA_PER_MESSAGE: &str = "CONCIERGE_MAX_DELTA_PER_MESSAGE";
pub const ENV_EVIDENCE_MODE: &str = "CONCIERGE_EVIDENCE_MODE";
pub const ENV_LOG_LEVEL: &str = "CONCIERGE_LOG_LEVEL";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`CONCIERGE_*`)
/// 2. TOML config file, when one is given
/// 3. Compiled defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConciergeConfig {
    pub belief: BeliefConfig,
    pub guardrail: GuardrailConfig,
    pub observability: ObservabilityConfig,
}

impl ConciergeConfig {
    /// Load configuration: defaults, then `path` if given, then the process
    /// environment. The result is validated.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env_overrides_from(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML file. Unknown keys are ignored; missing keys take defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Apply `CONCIERGE_*` overrides read through `lookup`.
    /// Values that fail to parse are ignored.
    pub fn apply_env_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup(ENV_SMOOTHING_FACTOR).and_then(|s| s.trim().parse::<f64>().ok()) {
            self.belief.smoothing_factor = v;
        }
        if let Some(v) =
            lookup(ENV_CONFIDENCE_THRESHOLD).and_then(|s| s.trim().parse::<f64>().ok())
        {
            self.belief.confidence_threshold = v;
        }
        if let Some(v) =
            lookup(ENV_MAX_DELTA_PER_MESSAGE).and_then(|s| s.trim().parse::<f64>().ok())
        {
            self.belief.max_delta_per_message = v;
        }
        if let Some(v) = lookup(ENV_EVIDENCE_MODE).and_then(|s| s.parse::<EvidenceMode>().ok()) {
            self.guardrail.evidence_mode = v;
        }
        if let Some(v) = lookup(ENV_LOG_LEVEL) {
            if !v.trim().is_empty() {
                self.observability.log_level = v.trim().to_string();
            }
        }
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let belief = &self.belief;
        if !(0.0..=1.0).contains(&belief.smoothing_factor) {
            return Err(ConfigError::ValidationFailed {
                field: "belief.smoothing_factor".to_string(),
                message: "must be between 0.0 and 1.0".to_string(),
            });
        }
        if !(belief.confidence_threshold.is_finite() && belief.confidence_threshold > 0.0) {
            return Err(ConfigError::ValidationFailed {
                field: "belief.confidence_threshold".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if !(belief.max_delta_per_message.is_finite() && belief.max_delta_per_message > 0.0) {
            return Err(ConfigError::ValidationFailed {
                field: "belief.max_delta_per_message".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        let neutral = crate::constants::NEUTRAL_WEIGHT;
        if !(belief.override_weight > neutral && belief.override_weight <= 1.0) {
            return Err(ConfigError::ValidationFailed {
                field: "belief.override_weight".to_string(),
                message: format!("must be greater than {neutral} and at most 1.0"),
            });
        }
        Ok(())
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
