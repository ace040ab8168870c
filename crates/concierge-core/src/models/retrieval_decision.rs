use std::fmt;

use serde::{Deserialize, Serialize};

/// Why the retrieval gate decided the way it did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RetrievalReason {
    DomainSignal,
    UiControl,
    RewritePrevious,
    SmallTalk,
    DefaultRetrieve,
}

impl RetrievalReason {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DomainSignal => "domain_signal",
            Self::UiControl => "ui_control",
            Self::RewritePrevious => "rewrite_previous",
            Self::SmallTalk => "small_talk",
            Self::DefaultRetrieve => "default_retrieve",
        }
    }
}

impl fmt::Display for RetrievalReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether to consult the external knowledge source before generating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetrievalDecision {
    pub retrieve: bool,
    pub reason: RetrievalReason,
    /// Term or phrase that triggered the rule, when there was one.
    pub matched: Option<String>,
}
