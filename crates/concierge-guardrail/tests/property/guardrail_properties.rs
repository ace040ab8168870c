use concierge_core::config::EvidenceMode;
use concierge_guardrail::{GuardrailEngine, DISCLOSURE_LABEL, QUALIFIER_LINE};
use proptest::prelude::*;

fn engine() -> GuardrailEngine {
    GuardrailEngine::with_mode(EvidenceMode::GeneralUnsourced)
}

// ── Annotation idempotence ────────────────────────────────────────────────

proptest! {
    #[test]
    fn annotation_is_idempotent(text in "[A-Za-z ,.\n]{0,120}") {
        let first = engine().validate(&text);
        prop_assume!(!first.replaced_with_block);
        let second = engine().validate(&first.text);
        prop_assert!(!second.changed, "second pass changed: {:?}", second.text);
        prop_assert!(!second.label_injected);
        prop_assert!(!second.qualifier_injected);
    }

    #[test]
    fn label_appears_at_most_once(text in "[a-z ]{1,60}") {
        let first = engine().validate(&text);
        prop_assume!(!first.replaced_with_block);
        let twice = engine().validate(&engine().validate(&first.text).text);
        prop_assert_eq!(twice.text.matches(DISCLOSURE_LABEL).count(), 1);
    }

    #[test]
    fn qualifier_appears_at_most_once(
        topic in prop::sample::select(vec!["warranty", "returns", "pricing", "policy", "refunds"]),
        tail in "[a-z ]{0,40}"
    ) {
        let text = format!("Our {topic} {tail}");
        let first = engine().validate(&text);
        prop_assume!(!first.replaced_with_block);
        prop_assert!(first.qualifier_injected);
        let second = engine().validate(&first.text);
        prop_assert_eq!(second.text.matches(QUALIFIER_LINE).count(), 1);
    }
}

// ── Sourced mode never annotates ──────────────────────────────────────────

proptest! {
    #[test]
    fn sourced_mode_never_annotates(text in "[A-Za-z ,.\n]{0,120}") {
        let verdict = engine().validate_with_mode(&text, EvidenceMode::Sourced);
        prop_assert!(!verdict.label_injected);
        prop_assert!(!verdict.qualifier_injected);
        if !verdict.replaced_with_block {
            prop_assert_eq!(verdict.text, text);
        }
    }
}
