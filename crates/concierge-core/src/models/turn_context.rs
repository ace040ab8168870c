use serde::{Deserialize, Serialize};

/// Everything the engine sees about one conversational turn.
///
/// Every field is optional on the wire; absent fields are absent signals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TurnContext {
    /// Explicit chat mode selected by the page, e.g. "prospect" or "owner".
    pub mode: Option<String>,
    /// URL (or path) of the page the visitor is on.
    pub page_url: Option<String>,
    /// Gun model the visitor is looking at, if any.
    pub model_id: Option<String>,
    /// Raw visitor message.
    pub user_text: String,
    /// Precomputed intent tags from upstream classification.
    pub intents: Vec<String>,
    /// Precomputed topic tags from upstream classification.
    pub topics: Vec<String>,
    /// Manual archetype override supplied by the caller, e.g. "legacy".
    pub override_phrase: Option<String>,
}

impl TurnContext {
    pub fn new(user_text: impl Into<String>) -> Self {
        Self {
            user_text: user_text.into(),
            ..Self::default()
        }
    }

    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = Some(mode.into());
        self
    }

    pub fn with_page(mut self, page_url: impl Into<String>) -> Self {
        self.page_url = Some(page_url.into());
        self
    }

    pub fn with_model(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = Some(model_id.into());
        self
    }

    pub fn with_intents<I, S>(mut self, intents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.intents = intents.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_topics<I, S>(mut self, topics: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.topics = topics.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_override(mut self, phrase: impl Into<String>) -> Self {
        self.override_phrase = Some(phrase.into());
        self
    }
}
