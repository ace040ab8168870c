use super::{guard_pattern, GuardPattern};

// ── Direct legality verdicts ───────────────────────────────────────────────
guard_pattern!(
    RE_LEGALITY_VERDICT,
    r"(?i)\b(?:it\s+is|it's|that\s+is|that's|this\s+is|is\s+(?:perfectly|completely|totally|entirely))\s+(?:perfectly\s+|completely\s+|totally\s+|entirely\s+)?(?:legal|illegal|lawful|unlawful)\b"
);
guard_pattern!(
    RE_CAN_LEGALLY,
    r"(?i)\byou\s+(?:can|may|could)\s+legally\b|\byou\s+(?:can|may)\s+lawfully\b"
);

// ── Licensing exemptions ───────────────────────────────────────────────────
guard_pattern!(
    RE_NO_LICENCE_NEEDED,
    r"(?i)\byou\s+(?:do\s+not|don't|won't|will\s+not)\s+need\s+(?:a|an|any)?\s*(?:licen[cs]e|certificate|permit|fac|sgc)\b|\bno\s+(?:licen[cs]e|certificate|permit)\s+(?:is\s+)?(?:needed|required)\b"
);
guard_pattern!(
    RE_EXEMPT,
    r"(?i)\b(?:exempt|exempted)\s+from\s+(?:licensing|the\s+law|import\s+rules|export\s+controls|regulation)\b"
);

// ── Guarantees about legal outcomes ────────────────────────────────────────
guard_pattern!(
    RE_LEGAL_GUARANTEE,
    r"(?i)\b(?:guaranteed|certain|sure)\s+to\s+(?:pass|be\s+approved|be\s+granted|clear)\s+(?:customs|import|export|licensing|the\s+police)\b"
);

/// Legal-claim patterns.
pub fn all_patterns() -> Vec<GuardPattern> {
    vec![
        GuardPattern {
            id: "legal_claim.legality_verdict",
            regex: &RE_LEGALITY_VERDICT,
        },
        GuardPattern {
            id: "legal_claim.can_legally",
            regex: &RE_CAN_LEGALLY,
        },
        GuardPattern {
            id: "legal_claim.no_licence_needed",
            regex: &RE_NO_LICENCE_NEEDED,
        },
        GuardPattern {
            id: "legal_claim.exempt",
            regex: &RE_EXEMPT,
        },
        GuardPattern {
            id: "legal_claim.legal_guarantee",
            regex: &RE_LEGAL_GUARANTEE,
        },
    ]
}
