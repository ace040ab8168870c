//! Fixed text substituted or inserted by the guardrail.

use concierge_core::BlockCategory;

/// First line of every general-knowledge reply.
pub const DISCLOSURE_LABEL: &str =
    "General information: this reply has not been checked against official documentation.";

/// Inserted after the first line when a reply makes brand-adjacent claims
/// about warranty, policy, pricing or returns.
pub const QUALIFIER_LINE: &str =
    "Please confirm any warranty, pricing, policy or returns details directly with our team before relying on them.";

const SYSTEM_LEAKAGE_MESSAGE: &str =
    "I'm sorry, I can't share details about how this assistant works. I'd be glad to help with questions about our guns and services.";
const PRICING_CLAIM_MESSAGE: &str =
    "Every gun is built to an individual specification, so I can't quote figures here. Our team will be happy to prepare a personal quotation.";
const UNSAFE_PROCEDURE_MESSAGE: &str =
    "For your safety I can't give instructions for dismantling or altering a gun's mechanism. Please bring it to a qualified gunsmith or contact our workshop.";
const LEGAL_CLAIM_MESSAGE: &str =
    "Firearms law differs between countries and circumstances, so I can't advise on what is permitted. Please check with your local licensing authority.";

/// The safe message that replaces a reply blocked under `category`.
pub fn safe_message(category: BlockCategory) -> &'static str {
    match category {
        BlockCategory::SystemLeakage => SYSTEM_LEAKAGE_MESSAGE,
        BlockCategory::PricingClaim => PRICING_CLAIM_MESSAGE,
        BlockCategory::UnsafeProcedure => UNSAFE_PROCEDURE_MESSAGE,
        BlockCategory::LegalClaim => LEGAL_CLAIM_MESSAGE,
    }
}
