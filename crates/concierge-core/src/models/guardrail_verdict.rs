use std::fmt;

use serde::{Deserialize, Serialize};

/// Hard-block content categories, in evaluation priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockCategory {
    SystemLeakage,
    PricingClaim,
    UnsafeProcedure,
    LegalClaim,
}

impl BlockCategory {
    /// All categories in priority order.
    pub const ALL: [BlockCategory; 4] = [
        Self::SystemLeakage,
        Self::PricingClaim,
        Self::UnsafeProcedure,
        Self::LegalClaim,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::SystemLeakage => "system_leakage",
            Self::PricingClaim => "pricing_claim",
            Self::UnsafeProcedure => "unsafe_procedure",
            Self::LegalClaim => "legal_claim",
        }
    }
}

impl fmt::Display for BlockCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of post-validating a generated reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuardrailVerdict {
    /// Text to deliver to the visitor.
    pub text: String,
    /// Whether any rule fired.
    pub triggered: bool,
    /// Ids of the rules that fired, in evaluation order.
    pub rule_ids: Vec<String>,
    /// Hard-block category, when the reply was replaced.
    pub category: Option<BlockCategory>,
    /// The reply was discarded and replaced with a fixed safe message.
    pub replaced_with_block: bool,
    /// The disclosure label was added to the first line.
    pub label_injected: bool,
    /// The qualifier line was inserted.
    pub qualifier_injected: bool,
    /// `text` differs from the input.
    pub changed: bool,
}

impl GuardrailVerdict {
    /// Verdict for text delivered exactly as generated.
    pub fn passthrough(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            triggered: false,
            rule_ids: Vec::new(),
            category: None,
            replaced_with_block: false,
            label_injected: false,
            qualifier_injected: false,
            changed: false,
        }
    }

    /// Whether the engine intervened at all.
    pub fn intervened(&self) -> bool {
        self.replaced_with_block || self.label_injected || self.qualifier_injected
    }
}
