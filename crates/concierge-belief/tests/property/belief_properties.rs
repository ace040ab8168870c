use concierge_belief::updater::{prior_scale, PRIOR_SCALE_MAX, PRIOR_SCALE_MIN};
use concierge_belief::{BeliefEngine, BeliefUpdater};
use concierge_core::{Archetype, BeliefVector, DeltaVector, TurnContext};
use concierge_signals::SignalExtractor;
use proptest::prelude::*;

fn delta_from(raw: [f64; 5]) -> DeltaVector {
    let mut d = DeltaVector::new();
    for a in Archetype::ALL {
        d.add(a, raw[a.index()]);
    }
    d
}

proptest! {
    #[test]
    fn updated_belief_is_always_a_distribution(
        prev in proptest::array::uniform5(0.0f64..1.0),
        ctx in proptest::array::uniform5(0.0f64..3.0),
        lang in proptest::array::uniform5(0.0f64..3.0),
    ) {
        let previous = BeliefVector::normalized(prev);
        let outcome = BeliefUpdater::default().update(
            Some(&previous),
            &delta_from(ctx),
            &delta_from(lang),
        );
        prop_assert!(outcome.belief.is_normalized(), "{:?}", outcome.belief);
        for (_, w) in outcome.belief.iter() {
            prop_assert!(w >= 0.0);
        }
    }

    #[test]
    fn prior_scale_is_bounded(mass in 0.0f64..10.0, margin in 0.0f64..1.0) {
        let s = prior_scale(mass, margin, 0.08);
        prop_assert!((PRIOR_SCALE_MIN..=PRIOR_SCALE_MAX).contains(&s));
    }

    #[test]
    fn conversations_stay_normalized(turns in proptest::collection::vec(".{0,80}", 1..6)) {
        let extractor = SignalExtractor::new();
        let engine = BeliefEngine::default();
        let mut belief = BeliefVector::neutral();
        for text in turns {
            let record = engine.step(&extractor.extract(&TurnContext::new(text)), Some(&belief));
            prop_assert!(record.belief.is_normalized());
            belief = record.belief;
        }
    }
}
