use concierge_core::{Archetype, DeltaVector, TurnContext};

use crate::extractors;
use crate::text::tokenize;

/// Where a signal came from. Determines which delta vector it feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignalSource {
    Mode,
    Page,
    Model,
    Language,
    IntentHint,
    TopicHint,
    Override,
}

impl SignalSource {
    /// Mode, page and model feed the context-delta.
    pub fn is_context(self) -> bool {
        matches!(self, Self::Mode | Self::Page | Self::Model)
    }

    /// Stable label for logging.
    pub fn label(self) -> &'static str {
        match self {
            Self::Mode => "mode",
            Self::Page => "page",
            Self::Model => "model",
            Self::Language => "language",
            Self::IntentHint => "intent_hint",
            Self::TopicHint => "topic_hint",
            Self::Override => "override",
        }
    }
}

/// One signal that fired during extraction.
#[derive(Debug, Clone, PartialEq)]
pub struct FiredSignal {
    pub id: String,
    pub archetype: Archetype,
    pub weight: f64,
    pub source: SignalSource,
}

impl FiredSignal {
    pub fn new(id: impl Into<String>, archetype: Archetype, weight: f64, source: SignalSource) -> Self {
        Self {
            id: id.into(),
            archetype,
            weight,
            source,
        }
    }
}

/// Everything extracted from one turn.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extraction {
    /// Mode, page and model priors.
    pub context_delta: DeltaVector,
    /// Free-text signals and hint nudges.
    pub language_delta: DeltaVector,
    /// Signals in firing order: context, language, then hints.
    pub fired: Vec<FiredSignal>,
    /// Parsed manual override. When set, callers bypass accumulation.
    pub override_archetype: Option<Archetype>,
}

impl Extraction {
    pub fn signal_ids(&self) -> Vec<String> {
        self.fired.iter().map(|s| s.id.clone()).collect()
    }

    /// Whether any free-text (non-hint) signal fired.
    pub fn has_language_hits(&self) -> bool {
        self.fired.iter().any(|s| s.source == SignalSource::Language)
    }
}

/// Runs every extractor over a turn context.
///
/// Stateless; one instance can be shared across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct SignalExtractor;

impl SignalExtractor {
    pub fn new() -> Self {
        Self
    }

    pub fn extract(&self, ctx: &TurnContext) -> Extraction {
        let mut extraction = Extraction::default();

        if let Some(phrase) = ctx.override_phrase.as_deref() {
            if let Some(archetype) = extractors::override_phrase::parse(phrase) {
                extraction.override_archetype = Some(archetype);
                extraction.fired.push(FiredSignal::new(
                    format!("override.{archetype}"),
                    archetype,
                    0.0,
                    SignalSource::Override,
                ));
                return extraction;
            }
        }

        extractors::context::extract(ctx, &mut extraction.context_delta, &mut extraction.fired);

        let tokens = tokenize(&ctx.user_text);
        extractors::language::extract(&tokens, &mut extraction.language_delta, &mut extraction.fired);
        extractors::hints::extract(
            &ctx.intents,
            &ctx.topics,
            &mut extraction.language_delta,
            &mut extraction.fired,
        );

        tracing::debug!(
            fired = extraction.fired.len(),
            context_mass = extraction.context_delta.mass(),
            language_mass = extraction.language_delta.mass(),
            sources = ?extraction.fired.iter().map(|s| s.source.label()).collect::<Vec<_>>(),
            "signals extracted"
        );
        extraction
    }
}
