//! Manual archetype override supplied as an explicit input field.

use concierge_core::constants::OVERRIDE_PREFIX;
use concierge_core::Archetype;

/// Parse an override phrase such as `"legacy"` or `"persona: Prestige"`.
/// Returns `None` for empty or unknown phrases.
pub fn parse(phrase: &str) -> Option<Archetype> {
    let trimmed = phrase.trim();
    let body = match trimmed.get(..OVERRIDE_PREFIX.len()) {
        Some(head) if head.eq_ignore_ascii_case(OVERRIDE_PREFIX) => &trimmed[OVERRIDE_PREFIX.len()..],
        _ => trimmed,
    };
    if body.trim().is_empty() {
        return None;
    }
    match body.parse::<Archetype>() {
        Ok(archetype) => Some(archetype),
        Err(_) => {
            tracing::debug!(phrase = %phrase, "ignoring unknown override phrase");
            None
        }
    }
}
