//! Unsafe procedures are detected by conjunction: step-like formatting, an
//! unsafe-operation verb, and either a critical part or disassembly language.
//! No single table blocks on its own.

use super::{guard_pattern, GuardPattern};

// ── Step formatting ────────────────────────────────────────────────────────
guard_pattern!(RE_NUMBERED_LIST, r"(?m)^\s*\d{1,2}[.)]\s+\S");
guard_pattern!(RE_BULLETED_LIST, r"(?m)^\s*[-*•]\s+\S");
guard_pattern!(RE_STEP_LABEL, r"(?i)\bstep\s*\d+\b");
guard_pattern!(
    RE_SEQUENCE_WORDS,
    r"(?is)\bfirst(?:ly)?\b.{0,200}?\b(?:then|next|finally)\b"
);

// ── Unsafe-operation verbs ─────────────────────────────────────────────────
// "remove" alone is everyday handling (cartridges, fore-end); it only counts
// with a lock part as its object.
guard_pattern!(
    RE_UNSAFE_VERB,
    r"(?i)\b(?:remov(?:e|ing)\s+(?:the\s+|its\s+|your\s+|a\s+)?(?:sears?|firing\s+pins?|strikers?|hammers?|tumblers?|main\s*springs?|safety|trigger|lock\s*work|locks|ejector\s+springs?)|fil(?:e|ing)|grind(?:ing)?|drill(?:ing)?|bend(?:ing)?|modify(?:ing)?|lighten(?:ing)?|ston(?:e|ing)|polish(?:ing)?|bypass(?:ing)?|disabl(?:e|ing)|defeat(?:ing)?|saw(?:ing)?\s+off|cut(?:ting)?\s+down|shorten(?:ing)?)\b"
);

// ── Critical parts ─────────────────────────────────────────────────────────
// The safety itself is named in ordinary handling advice ("make sure the
// safety is on"); only its internals or an attack on it count.
guard_pattern!(
    RE_CRITICAL_PART,
    r"(?i)\b(?:sears?|firing\s+pins?|strikers?|hammers?|tumblers?|main\s*springs?|safety\s+(?:sears?|springs?|mechanism|block|slide|bar)|(?:bypass(?:ing)?|disabl(?:e|ing)|defeat(?:ing)?|remov(?:e|ing))\s+(?:the\s+|its\s+|your\s+)?safety(?:\s+catch)?|trigger\s+(?:springs?|plates?|mechanism|pull)|lock\s*work|locks|ejector\s+springs?|cocking\s+(?:levers?|dogs?)|top\s+lever\s+spring)\b"
);

// ── Disassembly language ───────────────────────────────────────────────────
guard_pattern!(
    RE_DISASSEMBLY,
    r"(?i)\b(?:disassembl\w*|dismantl\w*|strip(?:ping)?\s+(?:down|the\s+(?:action|locks|gun))|tak(?:e|ing)\s+(?:it\s+)?apart|detach(?:ing)?\s+the\s+(?:action|locks))\b"
);

pub fn step_patterns() -> Vec<GuardPattern> {
    vec![
        GuardPattern {
            id: "unsafe_procedure.numbered_list",
            regex: &RE_NUMBERED_LIST,
        },
        GuardPattern {
            id: "unsafe_procedure.bulleted_list",
            regex: &RE_BULLETED_LIST,
        },
        GuardPattern {
            id: "unsafe_procedure.step_label",
            regex: &RE_STEP_LABEL,
        },
        GuardPattern {
            id: "unsafe_procedure.sequence_words",
            regex: &RE_SEQUENCE_WORDS,
        },
    ]
}

pub fn verb_patterns() -> Vec<GuardPattern> {
    vec![GuardPattern {
        id: "unsafe_procedure.unsafe_verb",
        regex: &RE_UNSAFE_VERB,
    }]
}

pub fn part_patterns() -> Vec<GuardPattern> {
    vec![GuardPattern {
        id: "unsafe_procedure.critical_part",
        regex: &RE_CRITICAL_PART,
    }]
}

pub fn disassembly_patterns() -> Vec<GuardPattern> {
    vec![GuardPattern {
        id: "unsafe_procedure.disassembly",
        regex: &RE_DISASSEMBLY,
    }]
}
