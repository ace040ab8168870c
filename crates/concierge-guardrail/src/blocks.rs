//! Hard-block tier.

use concierge_core::BlockCategory;

use crate::patterns::{self, leakage, legal, pricing, procedure};

/// Rules that fired for one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockHit {
    pub category: BlockCategory,
    pub rule_ids: Vec<&'static str>,
}

/// Evaluate every category and return those that fired, in priority order.
/// The first entry, if any, decides the replacement message.
pub fn detect(text: &str) -> Vec<BlockHit> {
    BlockCategory::ALL
        .iter()
        .filter_map(|&category| {
            let rule_ids = detect_category(category, text);
            (!rule_ids.is_empty()).then_some(BlockHit { category, rule_ids })
        })
        .collect()
}

/// Rule ids that fire for a single category.
pub fn detect_category(category: BlockCategory, text: &str) -> Vec<&'static str> {
    match category {
        BlockCategory::SystemLeakage => patterns::matching_ids(&leakage::all_patterns(), text),
        BlockCategory::PricingClaim => patterns::matching_ids(&pricing::all_patterns(), text),
        BlockCategory::UnsafeProcedure => detect_unsafe_procedure(text),
        BlockCategory::LegalClaim => patterns::matching_ids(&legal::all_patterns(), text),
    }
}

/// Steps AND unsafe verb AND (critical part OR disassembly).
fn detect_unsafe_procedure(text: &str) -> Vec<&'static str> {
    let Some(step) = patterns::first_match(&procedure::step_patterns(), text) else {
        return Vec::new();
    };
    let Some(verb) = patterns::first_match(&procedure::verb_patterns(), text) else {
        return Vec::new();
    };
    let part = patterns::first_match(&procedure::part_patterns(), text);
    let disassembly = patterns::first_match(&procedure::disassembly_patterns(), text);
    if part.is_none() && disassembly.is_none() {
        return Vec::new();
    }

    let mut ids = vec![step, verb];
    ids.extend(part);
    ids.extend(disassembly);
    ids
}
