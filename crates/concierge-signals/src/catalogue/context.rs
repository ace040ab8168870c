use concierge_core::Archetype;

/// Prior contributed by an explicit chat mode.
pub struct ModePrior {
    pub id: &'static str,
    pub mode: &'static str,
    pub contributions: &'static [(Archetype, f64)],
}

/// Prior contributed when the current page path contains a segment.
pub struct PagePrior {
    pub id: &'static str,
    pub archetype: Archetype,
    pub weight: f64,
    /// Path segments, compared after tokenization.
    pub segments: &'static [&'static str],
}

/// Prior contributed by the model the visitor is viewing.
pub struct ModelFamily {
    pub id: &'static str,
    pub archetype: Archetype,
    pub weight: f64,
    /// Family names matched as whole tokens of the model id.
    pub names: &'static [&'static str],
}

pub const MODE_PRIORS: &[ModePrior] = &[
    ModePrior {
        id: "ctx.mode.prospect",
        mode: "prospect",
        contributions: &[(Archetype::Newcomer, 0.08), (Archetype::Prestige, 0.06)],
    },
    ModePrior {
        id: "ctx.mode.owner",
        mode: "owner",
        contributions: &[(Archetype::Legacy, 0.08), (Archetype::Performance, 0.06)],
    },
    ModePrior {
        id: "ctx.mode.collector",
        mode: "collector",
        contributions: &[(Archetype::Legacy, 0.1), (Archetype::Prestige, 0.1)],
    },
    ModePrior {
        id: "ctx.mode.service",
        mode: "service",
        contributions: &[(Archetype::Legacy, 0.05), (Archetype::Performance, 0.05)],
    },
];

pub const PAGE_PRIORS: &[PagePrior] = &[
    PagePrior {
        id: "ctx.page.bespoke",
        archetype: Archetype::Prestige,
        weight: 0.2,
        segments: &["bespoke", "commissions", "engraving"],
    },
    PagePrior {
        id: "ctx.page.heritage",
        archetype: Archetype::Legacy,
        weight: 0.2,
        segments: &["heritage", "archive", "restoration"],
    },
    PagePrior {
        id: "ctx.page.fitting",
        archetype: Archetype::Performance,
        weight: 0.2,
        segments: &["gun-fitting", "fitting", "competition"],
    },
    PagePrior {
        id: "ctx.page.field",
        archetype: Archetype::Sporting,
        weight: 0.15,
        segments: &["game-guns", "field", "shooting-grounds"],
    },
    PagePrior {
        id: "ctx.page.guides",
        archetype: Archetype::Newcomer,
        weight: 0.15,
        segments: &["getting-started", "first-gun", "guides"],
    },
];

pub const MODEL_FAMILIES: &[ModelFamily] = &[
    ModelFamily {
        id: "ctx.model.sovereign",
        archetype: Archetype::Prestige,
        weight: 0.1,
        names: &["sovereign"],
    },
    ModelFamily {
        id: "ctx.model.heritage",
        archetype: Archetype::Legacy,
        weight: 0.1,
        names: &["heritage"],
    },
    ModelFamily {
        id: "ctx.model.apex",
        archetype: Archetype::Performance,
        weight: 0.1,
        names: &["apex"],
    },
    ModelFamily {
        id: "ctx.model.fieldsman",
        archetype: Archetype::Sporting,
        weight: 0.1,
        names: &["fieldsman"],
    },
    ModelFamily {
        id: "ctx.model.foundation",
        archetype: Archetype::Newcomer,
        weight: 0.1,
        names: &["foundation"],
    },
];
