use super::{guard_pattern, GuardPattern};

// ── Currency amounts: "$8,500", "£12k", "€ 1.200", "9,000 GBP" ─────────────
// Bare "pounds" is a weight ("weighs 6 pounds"); only "pounds sterling" is money.
guard_pattern!(
    RE_CURRENCY_AMOUNT,
    r"(?i)[$£€]\s?\d[\d,.]*(?:\s?(?:k|m|million|thousand)\b)?|\b\d[\d,.]*\s?(?:usd|gbp|eur|dollars|euros|quid|pounds\s+sterling)\b"
);

// ── Price language followed by a figure: "starts at 8,500", "costs 12000" ──
guard_pattern!(
    RE_PRICE_FIGURE,
    r"(?i)\b(?:prices?|priced|pricing|costs?|costing|starts?\s+at|starting\s+(?:at|from)|retails?\s+(?:at|for)|sells?\s+for|fee)\b[^.\n\d]{0,40}\d{1,3}(?:,\d{3})+|\b(?:prices?|priced|pricing|costs?|costing|starts?\s+at|starting\s+(?:at|from)|retails?\s+(?:at|for)|sells?\s+for|fee)\b[^.\n\d]{0,40}\d{3,}"
);

/// Pricing-claim patterns.
pub fn all_patterns() -> Vec<GuardPattern> {
    vec![
        GuardPattern {
            id: "pricing_claim.currency_amount",
            regex: &RE_CURRENCY_AMOUNT,
        },
        GuardPattern {
            id: "pricing_claim.price_figure",
            regex: &RE_PRICE_FIGURE,
        },
    ]
}
