use super::{guard_pattern, GuardPattern};

// ── Prompt and instruction references ──────────────────────────────────────
guard_pattern!(
    RE_PROMPT_REFERENCE,
    r"(?i)\b(?:system|developer|hidden|initial)\s+(?:prompt|instructions?|message)s?\b"
);
guard_pattern!(
    RE_INSTRUCTED,
    r"(?i)\bi\s+(?:was|am|have\s+been|'ve\s+been)\s+(?:instructed|told|programmed|configured|prompted)\s+to\b"
);
guard_pattern!(
    RE_MY_INSTRUCTIONS,
    r"(?i)\bmy\s+(?:instructions|guidelines|configuration|rules)\s+(?:are|say|state|tell)\b"
);

// ── Chat-template markup ───────────────────────────────────────────────────
guard_pattern!(
    RE_TEMPLATE_MARKUP,
    r"(?i)<\|?\s*(?:system|im_start|im_end|endoftext)\s*\|?>|\[/?INST\]|<<\s*SYS\s*>>"
);

// ── Internal profiling vocabulary ──────────────────────────────────────────
guard_pattern!(
    RE_PROFILE_INTERNALS,
    r"(?i)\b(?:visitor\s+)?archetypes?\b|\bbelief\s+(?:vector|state|scores?)\b|\bpersona\s+(?:scores?|classification|label)\b"
);

// ── Credentials ────────────────────────────────────────────────────────────
guard_pattern!(
    RE_CREDENTIALS,
    r"(?i)\b(?:api[_\s-]?key|access[_\s-]token|bearer\s+token|secret[_\s-]key)\b"
);

/// System-leakage patterns, most specific first.
pub fn all_patterns() -> Vec<GuardPattern> {
    vec![
        GuardPattern {
            id: "system_leakage.template_markup",
            regex: &RE_TEMPLATE_MARKUP,
        },
        GuardPattern {
            id: "system_leakage.prompt_reference",
            regex: &RE_PROMPT_REFERENCE,
        },
        GuardPattern {
            id: "system_leakage.instructed",
            regex: &RE_INSTRUCTED,
        },
        GuardPattern {
            id: "system_leakage.my_instructions",
            regex: &RE_MY_INSTRUCTIONS,
        },
        GuardPattern {
            id: "system_leakage.profile_internals",
            regex: &RE_PROFILE_INTERNALS,
        },
        GuardPattern {
            id: "system_leakage.credentials",
            regex: &RE_CREDENTIALS,
        },
    ]
}
