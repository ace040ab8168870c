//! The gate's rule chain.
//!
//! Order: domain signal (retrieve), UI control (skip), rewrite of the
//! previous answer (skip), small talk (skip). Anything else falls through
//! to the default, which retrieves.

use std::sync::LazyLock;

use concierge_core::{RetrievalReason, TurnContext};
use concierge_signals::extractors::context::page_path;
use concierge_signals::{tokenize, Phrase};

/// Longest message (in tokens) still eligible for the small-talk rule.
pub const SMALL_TALK_MAX_TOKENS: usize = 5;

/// Tokenized view of a turn, built once and shared by every rule.
#[derive(Debug, Clone, Default)]
pub struct GateInput {
    pub text: Vec<String>,
    pub page: Vec<String>,
}

impl GateInput {
    pub fn from_context(ctx: &TurnContext) -> Self {
        Self {
            text: tokenize(&ctx.user_text),
            page: ctx.page_url.as_deref().map(|u| tokenize(page_path(u))).unwrap_or_default(),
        }
    }

    /// Input with only visitor text (no page).
    pub fn from_text(text: &str) -> Self {
        Self {
            text: tokenize(text),
            page: Vec::new(),
        }
    }
}

/// One link in the chain. `check` returns the matched term when the rule applies.
pub struct GateRule {
    pub reason: RetrievalReason,
    pub retrieve: bool,
    pub check: fn(&GateInput) -> Option<String>,
}

impl std::fmt::Debug for GateRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GateRule")
            .field("reason", &self.reason)
            .field("retrieve", &self.retrieve)
            .finish()
    }
}

/// The chain, in priority order.
pub const RULES: &[GateRule] = &[
    GateRule {
        reason: RetrievalReason::DomainSignal,
        retrieve: true,
        check: domain_signal,
    },
    GateRule {
        reason: RetrievalReason::UiControl,
        retrieve: false,
        check: ui_control,
    },
    GateRule {
        reason: RetrievalReason::RewritePrevious,
        retrieve: false,
        check: rewrite_previous,
    },
    GateRule {
        reason: RetrievalReason::SmallTalk,
        retrieve: false,
        check: small_talk,
    },
];

// ── Vocabulary ──────────────────────────────────────────────────────────────

/// House name, model families and platforms.
const BRAND_TERMS: &[&str] = &[
    "ashcombe",
    "ashcombe and sons",
    "sovereign",
    "heritage",
    "apex",
    "fieldsman",
    "foundation",
    "sidelock",
    "sidelocks",
    "boxlock",
    "boxlocks",
    "side by side",
    "over and under",
    "over under",
];

/// Gun, fitting and service vocabulary.
const DOMAIN_TERMS: &[&str] = &[
    "gun",
    "guns",
    "shotgun",
    "shotguns",
    "rifle",
    "rifles",
    "barrel",
    "barrels",
    "stock",
    "stocks",
    "choke",
    "chokes",
    "action",
    "ejector",
    "ejectors",
    "trigger",
    "triggers",
    "bore",
    "gauge",
    "cartridge",
    "cartridges",
    "engraving",
    "gun fit",
    "gun fitting",
    "fitting",
    "try gun",
    "length of pull",
    "cast off",
    "cast on",
    "service",
    "servicing",
    "repair",
    "repairs",
    "restoration",
    "refinish",
    "regulate",
    "proof",
    "warranty",
    "commission",
    "bespoke",
    "shooting school",
    "shooting ground",
];

/// Commands about the chat itself. These name the chat, its history or its
/// citations, so they count wherever they appear.
const CHAT_COMMANDS: &[&str] = &[
    "reset chat",
    "reset the chat",
    "reset conversation",
    "reset the conversation",
    "clear chat",
    "clear the chat",
    "clear the conversation",
    "clear chat history",
    "clear my history",
    "new chat",
    "new conversation",
    "turn off citations",
    "turn on citations",
    "hide citations",
    "show citations",
    "disable citations",
    "enable citations",
    "toggle citations",
    "without citations",
    "hide sources",
    "show sources",
];

/// Verbosity and restart phrasing. Only counts when the rest of the message
/// is [`UI_FILLER`]: "more detail about delivery" is a question, not a setting.
const SETTING_PHRASES: &[&str] = &[
    "start over",
    "start again",
    "more concise",
    "less verbose",
    "more verbose",
    "more detail",
    "less detail",
    "more detailed",
    "less detailed",
    "shorter answers",
    "longer answers",
    "verbosity",
];

/// Words that may surround a setting phrase without adding a topic.
const UI_FILLER: &[&str] = &[
    "please", "can", "could", "would", "will", "you", "we", "let", "s", "be", "give", "me",
    "use", "go", "in", "into", "with", "your", "the", "a", "bit", "little", "lot", "much",
    "way", "answer", "answers", "reply", "replies", "response", "responses", "make", "them",
    "i", "d", "want", "like", "from", "now", "on", "going", "forward", "and", "just", "keep",
    "it", "ok", "okay", "thanks",
];

const REWRITE_VERBS: &[&str] = &[
    "rewrite",
    "rephrase",
    "reword",
    "shorten",
    "condense",
    "simplify",
    "translate",
    "summarize",
    "summarise",
    "paraphrase",
    "tldr",
    "tl dr",
];

/// Explicit references to assistant output; count anywhere in the message.
const PRIOR_OUTPUT_REFS: &[&str] = &[
    "your answer",
    "your reply",
    "your response",
    "your last message",
    "previous answer",
    "previous reply",
    "previous response",
    "last answer",
    "last reply",
    "last response",
    "what you said",
    "what you just said",
];

/// Pronoun objects; only count directly after the rewrite verb
/// ("shorten that", "summarize the above").
const PRIOR_OUTPUT_OBJECTS: &[&str] = &["it", "this", "that", "these", "them", "above", "the above"];

/// Closed list of acknowledgements, greetings and yes/no replies.
const SMALL_TALK_PHRASES: &[&str] = &[
    "thanks",
    "thank you",
    "thank you very much",
    "thanks a lot",
    "many thanks",
    "cheers",
    "ok",
    "okay",
    "k",
    "alright",
    "all right",
    "cool",
    "great",
    "nice",
    "perfect",
    "awesome",
    "lovely",
    "brilliant",
    "got it",
    "understood",
    "makes sense",
    "sounds good",
    "fair enough",
    "yes",
    "yes please",
    "yeah",
    "yep",
    "sure",
    "no",
    "no thanks",
    "no thank you",
    "nope",
    "not really",
    "hi",
    "hello",
    "hey",
    "good morning",
    "good afternoon",
    "good evening",
    "bye",
    "goodbye",
    "see you",
];

fn compile(table: &[&str]) -> Vec<Phrase> {
    table.iter().map(|s| Phrase::new(s)).filter(|p| !p.is_empty()).collect()
}

static BRAND: LazyLock<Vec<Phrase>> = LazyLock::new(|| compile(BRAND_TERMS));
static DOMAIN: LazyLock<Vec<Phrase>> = LazyLock::new(|| compile(DOMAIN_TERMS));
static CHAT: LazyLock<Vec<Phrase>> = LazyLock::new(|| compile(CHAT_COMMANDS));
static SETTING: LazyLock<Vec<Phrase>> = LazyLock::new(|| compile(SETTING_PHRASES));
static FILLER: LazyLock<Vec<Phrase>> = LazyLock::new(|| compile(UI_FILLER));
static REWRITE: LazyLock<Vec<Phrase>> = LazyLock::new(|| compile(REWRITE_VERBS));
static PRIOR_OUTPUT: LazyLock<Vec<Phrase>> = LazyLock::new(|| compile(PRIOR_OUTPUT_REFS));
static PRIOR_OBJECT: LazyLock<Vec<Phrase>> = LazyLock::new(|| compile(PRIOR_OUTPUT_OBJECTS));
static SMALL_TALK: LazyLock<Vec<Phrase>> = LazyLock::new(|| compile(SMALL_TALK_PHRASES));

fn first_hit(phrases: &[Phrase], tokens: &[String]) -> Option<String> {
    phrases
        .iter()
        .find(|p| p.matches(tokens))
        .map(|p| p.tokens().join(" "))
}

// ── Rules ───────────────────────────────────────────────────────────────────

/// Brand, model, platform or gun/fit/service term in the text or page path.
pub fn domain_signal(input: &GateInput) -> Option<String> {
    [&input.text, &input.page].into_iter().find_map(|tokens| {
        first_hit(&BRAND, tokens).or_else(|| first_hit(&DOMAIN, tokens))
    })
}

/// Requests about the chat itself rather than the subject matter.
pub fn ui_control(input: &GateInput) -> Option<String> {
    let tokens = &input.text;
    if let Some(hit) = first_hit(&CHAT, tokens) {
        return Some(hit);
    }
    let hit = first_hit(&SETTING, tokens)?;
    covered_by(tokens, &[SETTING.as_slice(), FILLER.as_slice()]).then_some(hit)
}

/// A rewrite verb aimed at earlier output: an explicit reference anywhere
/// ("your last answer"), a pronoun object right after the verb ("shorten
/// that"), or a bare imperative ("summarize please").
pub fn rewrite_previous(input: &GateInput) -> Option<String> {
    let tokens = &input.text;
    let explicit = first_hit(&PRIOR_OUTPUT, tokens).is_some();
    REWRITE
        .iter()
        .filter(|verb| verb.matches(tokens))
        .find(|verb| explicit || is_bare(tokens, verb) || has_pronoun_object(tokens, verb))
        .map(|verb| verb.tokens().join(" "))
}

fn is_bare(tokens: &[String], verb: &Phrase) -> bool {
    tokens.len() <= verb.len() + 1 && tokens.starts_with(verb.tokens())
}

fn has_pronoun_object(tokens: &[String], verb: &Phrase) -> bool {
    verb.positions(tokens).into_iter().any(|start| {
        let rest = &tokens[start + verb.len()..];
        PRIOR_OBJECT.iter().any(|object| rest.starts_with(object.tokens()))
    })
}

/// Short message composed entirely of small-talk phrases.
pub fn small_talk(input: &GateInput) -> Option<String> {
    let tokens = &input.text;
    if tokens.is_empty() || tokens.len() > SMALL_TALK_MAX_TOKENS {
        return None;
    }
    if covered_by(tokens, &[SMALL_TALK.as_slice()]) {
        Some(tokens.join(" "))
    } else {
        None
    }
}

/// Whether `tokens` splits into a sequence of phrases drawn from `tables`
/// ("ok thanks", "yes please thank you").
fn covered_by(tokens: &[String], tables: &[&[Phrase]]) -> bool {
    let n = tokens.len();
    let mut reachable = vec![false; n + 1];
    reachable[0] = true;
    for start in 0..n {
        if !reachable[start] {
            continue;
        }
        for phrase in tables.iter().flat_map(|t| t.iter()) {
            let end = start + phrase.len();
            if end <= n && tokens[start..end] == *phrase.tokens() {
                reachable[end] = true;
            }
        }
    }
    reachable[n]
}
