use concierge_core::{Archetype, TurnContext};
use concierge_signals::{tokenize, Phrase, SignalExtractor};
use proptest::prelude::*;

proptest! {
    #[test]
    fn tokens_are_never_empty_and_lowercase(text in ".{0,200}") {
        for token in tokenize(&text) {
            prop_assert!(!token.is_empty());
            prop_assert_eq!(token.clone(), token.to_lowercase());
        }
    }

    #[test]
    fn needle_inside_a_longer_word_never_matches(
        prefix in "[a-z]{0,4}",
        suffix in "[a-z]{0,4}",
    ) {
        prop_assume!(!(prefix.is_empty() && suffix.is_empty()));
        let text = format!("the {prefix}cast{suffix} was fine");
        prop_assert!(!Phrase::new("cast").matches_text(&text));
    }

    #[test]
    fn separators_between_phrase_words_do_not_matter(
        sep1 in "[ \t\n\\-_/]{1,3}",
        sep2 in "[ \t\n\\-_/]{1,3}",
    ) {
        let text = format!("what about point{sep1}of{sep2}impact?");
        prop_assert!(Phrase::new("point of impact").matches_text(&text));
    }

    #[test]
    fn deltas_are_non_negative(text in ".{0,200}", mode in "[a-z]{0,10}") {
        let ctx = TurnContext::new(text).with_mode(mode);
        let extraction = SignalExtractor::new().extract(&ctx);
        for a in Archetype::ALL {
            prop_assert!(extraction.context_delta.get(a) >= 0.0);
            prop_assert!(extraction.language_delta.get(a) >= 0.0);
        }
    }
}
