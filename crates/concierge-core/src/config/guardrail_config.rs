use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Whether a reply is expected to be backed by retrieved sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvidenceMode {
    /// Grounded in retrieved documents; no disclosure needed.
    Sourced,
    /// General knowledge; replies carry a disclosure label.
    GeneralUnsourced,
}

impl EvidenceMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sourced => "sourced",
            Self::GeneralUnsourced => "general_unsourced",
        }
    }
}

impl fmt::Display for EvidenceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EvidenceMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "sourced" => Ok(Self::Sourced),
            "general_unsourced" | "general" | "unsourced" => Ok(Self::GeneralUnsourced),
            other => Err(format!("unknown evidence mode: {other}")),
        }
    }
}

impl Default for EvidenceMode {
    fn default() -> Self {
        defaults::DEFAULT_EVIDENCE_MODE
            .parse()
            .unwrap_or(Self::GeneralUnsourced)
    }
}

/// Response guardrail configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuardrailConfig {
    /// Controls whether the soft-annotation tier runs.
    pub evidence_mode: EvidenceMode,
}
