use concierge_core::Archetype;

/// A keyword/phrase signal over the visitor's free text.
pub struct LanguageSignal {
    pub id: &'static str,
    pub archetype: Archetype,
    pub weight: f64,
    /// Any one matching needle fires the signal (once per turn).
    pub needles: &'static [&'static str],
    /// Phrases whose tokens are masked before needles are scanned.
    pub decoys: &'static [&'static str],
}

pub const LANGUAGE_SIGNALS: &[LanguageSignal] = &[
    // ── Prestige ────────────────────────────────────────────────────────────
    LanguageSignal {
        id: "lang.prestige.bespoke",
        archetype: Archetype::Prestige,
        weight: 0.22,
        needles: &["bespoke", "commission", "commissioned", "one of a kind", "made to order"],
        decoys: &["commission fee", "commission rate"],
    },
    LanguageSignal {
        id: "lang.prestige.engraving",
        archetype: Archetype::Prestige,
        weight: 0.18,
        needles: &["engraving", "engraved", "gold inlay", "inlay", "exhibition grade", "exhibition wood"],
        decoys: &[],
    },
    LanguageSignal {
        id: "lang.prestige.exclusive",
        archetype: Archetype::Prestige,
        weight: 0.15,
        needles: &["exclusive", "finest", "best gun", "best guns", "pinnacle", "luxury"],
        decoys: &[],
    },
    // ── Legacy ──────────────────────────────────────────────────────────────
    LanguageSignal {
        id: "lang.legacy.heirloom",
        archetype: Archetype::Legacy,
        weight: 0.3,
        needles: &["heirloom", "heirlooms", "family heirloom"],
        decoys: &[],
    },
    LanguageSignal {
        id: "lang.legacy.pass_down",
        archetype: Archetype::Legacy,
        weight: 0.3,
        needles: &[
            "pass it down",
            "pass down",
            "passed down",
            "pass it on",
            "hand down",
            "handed down",
            "hand it down",
            "hand me down",
            "next generation",
            "generations",
        ],
        decoys: &[],
    },
    LanguageSignal {
        id: "lang.legacy.family",
        archetype: Archetype::Legacy,
        weight: 0.2,
        needles: &[
            "grandfather",
            "grandfathers",
            "my late father",
            "family gun",
            "inherited",
            "inheritance",
        ],
        decoys: &[],
    },
    LanguageSignal {
        id: "lang.legacy.preserve",
        archetype: Archetype::Legacy,
        weight: 0.18,
        needles: &["preserve", "preservation", "restore", "restoration", "original finish"],
        decoys: &[],
    },
    LanguageSignal {
        id: "lang.legacy.loyalty",
        archetype: Archetype::Legacy,
        weight: 0.12,
        needles: &["loyalty", "loyal"],
        decoys: &[
            "loyalty program",
            "loyalty programme",
            "loyalty points",
            "loyalty card",
            "loyalty scheme",
            "loyalty rewards",
            "loyalty discount",
        ],
    },
    // ── Performance ─────────────────────────────────────────────────────────
    LanguageSignal {
        id: "lang.performance.fit",
        archetype: Archetype::Performance,
        weight: 0.22,
        needles: &[
            "gun fit",
            "fitting",
            "try gun",
            "cast",
            "cast off",
            "cast on",
            "drop at heel",
            "length of pull",
            "point of impact",
            "comb height",
        ],
        decoys: &[],
    },
    LanguageSignal {
        id: "lang.performance.competition",
        archetype: Archetype::Performance,
        weight: 0.2,
        needles: &["sporting clays", "skeet", "fitasc", "competition", "compete", "tournament"],
        decoys: &[],
    },
    LanguageSignal {
        id: "lang.performance.consistency",
        archetype: Archetype::Performance,
        weight: 0.15,
        needles: &["consistency", "consistent", "recoil", "balance point", "barrel weight"],
        decoys: &[],
    },
    // ── Sporting ────────────────────────────────────────────────────────────
    LanguageSignal {
        id: "lang.sporting.game",
        archetype: Archetype::Sporting,
        weight: 0.22,
        needles: &[
            "driven birds",
            "driven game",
            "driven shooting",
            "grouse",
            "pheasant",
            "partridge",
            "woodcock",
            "wildfowl",
            "game shooting",
            "shoot day",
        ],
        decoys: &[],
    },
    LanguageSignal {
        id: "lang.sporting.field",
        archetype: Archetype::Sporting,
        weight: 0.18,
        needles: &["in the field", "hunting", "walked up", "rough shooting", "on the peg"],
        decoys: &[],
    },
    LanguageSignal {
        id: "lang.sporting.carry",
        archetype: Archetype::Sporting,
        weight: 0.15,
        needles: &["lightweight", "carry all day", "easy to carry", "20 bore", "28 bore"],
        decoys: &[],
    },
    // ── Newcomer ────────────────────────────────────────────────────────────
    LanguageSignal {
        id: "lang.newcomer.first",
        archetype: Archetype::Newcomer,
        weight: 0.25,
        needles: &[
            "first gun",
            "first shotgun",
            "first time",
            "never owned",
            "new to shooting",
            "just starting",
            "beginner",
        ],
        decoys: &[],
    },
    LanguageSignal {
        id: "lang.newcomer.learning",
        archetype: Archetype::Newcomer,
        weight: 0.15,
        needles: &[
            "what is a",
            "what does",
            "difference between",
            "lesson",
            "lessons",
            "shooting school",
        ],
        decoys: &[],
    },
];
