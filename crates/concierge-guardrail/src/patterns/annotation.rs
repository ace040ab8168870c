//! Brand-adjacent sensitive claims: a sentence that refers to the house or
//! its guns and also touches warranty, policy, pricing or returns.

use super::{guard_pattern, GuardPattern};

guard_pattern!(
    RE_FIRST_PERSON_HOUSE,
    r"(?i)\b(?:we|we're|we've|our|ours|us)\b"
);
guard_pattern!(
    RE_HOUSE_NAME,
    r"(?i)\b(?:ashcombe|the\s+house|the\s+workshop|the\s+factory|sovereign|heritage|apex|fieldsman|foundation)\b"
);

guard_pattern!(RE_WARRANTY, r"(?i)\b(?:warrant(?:y|ies|ied)|guarantee[sd]?)\b");
guard_pattern!(RE_POLICY, r"(?i)\b(?:polic(?:y|ies)|terms\s+and\s+conditions|cancellations?)\b");
guard_pattern!(RE_PRICING, r"(?i)\b(?:pric(?:e|es|ed|ing)|costs?|deposits?|discounts?|finance)\b");
guard_pattern!(RE_RETURNS, r"(?i)\b(?:returns?|refunds?|refundable|exchanges?)\b");

pub fn brand_patterns() -> Vec<GuardPattern> {
    vec![
        GuardPattern {
            id: "annotation.first_person_house",
            regex: &RE_FIRST_PERSON_HOUSE,
        },
        GuardPattern {
            id: "annotation.house_name",
            regex: &RE_HOUSE_NAME,
        },
    ]
}

pub fn topic_patterns() -> Vec<GuardPattern> {
    vec![
        GuardPattern {
            id: "annotation.warranty",
            regex: &RE_WARRANTY,
        },
        GuardPattern {
            id: "annotation.policy",
            regex: &RE_POLICY,
        },
        GuardPattern {
            id: "annotation.pricing",
            regex: &RE_PRICING,
        },
        GuardPattern {
            id: "annotation.returns",
            regex: &RE_RETURNS,
        },
    ]
}
