use concierge_core::Archetype;

/// Weight of a single matching hint tag.
pub const HINT_WEIGHT: f64 = 0.05;

/// Ceiling on the summed hint contribution per archetype per turn.
pub const HINT_CAP_PER_ARCHETYPE: f64 = 0.1;

/// Intent tags (normalized to snake_case) and the archetype they nudge.
pub const INTENT_HINTS: &[(&str, Archetype)] = &[
    ("bespoke_commission", Archetype::Prestige),
    ("engraving_inquiry", Archetype::Prestige),
    ("restoration", Archetype::Legacy),
    ("valuation", Archetype::Legacy),
    ("gun_fitting", Archetype::Performance),
    ("competition_prep", Archetype::Performance),
    ("game_shooting", Archetype::Sporting),
    ("shoot_booking", Archetype::Sporting),
    ("beginner_guidance", Archetype::Newcomer),
    ("lesson_booking", Archetype::Newcomer),
];

/// Topic tags (normalized to snake_case) and the archetype they nudge.
pub const TOPIC_HINTS: &[(&str, Archetype)] = &[
    ("engraving", Archetype::Prestige),
    ("exhibition_wood", Archetype::Prestige),
    ("family_history", Archetype::Legacy),
    ("provenance", Archetype::Legacy),
    ("stock_dimensions", Archetype::Performance),
    ("clay_disciplines", Archetype::Performance),
    ("game_birds", Archetype::Sporting),
    ("estate_shooting", Archetype::Sporting),
    ("safety_basics", Archetype::Newcomer),
    ("licensing_basics", Archetype::Newcomer),
];

/// Normalize a hint tag: trimmed, lowercase, separators folded to `_`.
pub fn normalize_tag(tag: &str) -> String {
    crate::text::tokenize(tag).join("_")
}
