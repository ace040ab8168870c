pub mod annotation;
pub mod leakage;
pub mod legal;
pub mod pricing;
pub mod procedure;

use regex::Regex;
use std::sync::LazyLock;

/// A lazily compiled guardrail pattern. `regex` is `None` when compilation
/// failed; such a pattern never matches and is reported as degraded.
pub struct GuardPattern {
    pub id: &'static str,
    pub regex: &'static LazyLock<Option<Regex>>,
}

impl GuardPattern {
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.as_ref().is_some_and(|re| re.is_match(text))
    }

    pub fn is_compiled(&self) -> bool {
        self.regex.is_some()
    }
}

macro_rules! guard_pattern {
    ($name:ident, $regex_str:expr) => {
        pub static $name: std::sync::LazyLock<Option<regex::Regex>> =
            std::sync::LazyLock::new(|| regex::Regex::new($regex_str).ok());
    };
}
pub(crate) use guard_pattern;

/// Ids of every pattern in `patterns` that matches `text`, in table order.
pub fn matching_ids(patterns: &[GuardPattern], text: &str) -> Vec<&'static str> {
    patterns
        .iter()
        .filter(|p| p.is_match(text))
        .map(|p| p.id)
        .collect()
}

/// First pattern in `patterns` that matches `text`.
pub fn first_match(patterns: &[GuardPattern], text: &str) -> Option<&'static str> {
    patterns.iter().find(|p| p.is_match(text)).map(|p| p.id)
}

/// Every pattern table with the group name used for degradation reports.
pub fn all_groups() -> Vec<(&'static str, Vec<GuardPattern>)> {
    vec![
        ("system_leakage", leakage::all_patterns()),
        ("pricing_claim", pricing::all_patterns()),
        ("unsafe_procedure.step_format", procedure::step_patterns()),
        ("unsafe_procedure.unsafe_verb", procedure::verb_patterns()),
        ("unsafe_procedure.critical_part", procedure::part_patterns()),
        ("unsafe_procedure.disassembly", procedure::disassembly_patterns()),
        ("legal_claim", legal::all_patterns()),
        ("annotation.brand", annotation::brand_patterns()),
        ("annotation.topic", annotation::topic_patterns()),
    ]
}
