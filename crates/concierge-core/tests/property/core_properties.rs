use concierge_core::{Archetype, BeliefVector};
use proptest::prelude::*;

proptest! {
    #[test]
    fn normalized_vectors_always_sum_to_one(
        raw in proptest::array::uniform5(-10.0f64..10.0)
    ) {
        let v = BeliefVector::normalized(raw);
        prop_assert!(v.is_normalized(), "not normalized: {:?}", v);
    }

    #[test]
    fn margin_is_non_negative_and_bounded(
        raw in proptest::array::uniform5(0.0f64..5.0)
    ) {
        let v = BeliefVector::normalized(raw);
        let m = v.margin();
        prop_assert!((0.0..=1.0).contains(&m), "margin out of range: {m}");
    }

    #[test]
    fn leader_holds_the_maximum_weight(
        raw in proptest::array::uniform5(0.0f64..5.0)
    ) {
        let v = BeliefVector::normalized(raw);
        let max = v.iter().map(|(_, w)| w).fold(0.0f64, f64::max);
        prop_assert_eq!(v.weight(v.leader()), max);
    }

    #[test]
    fn dominant_vector_is_normalized(idx in 0usize..5, weight in 0.25f64..=1.0) {
        let v = BeliefVector::dominant(Archetype::ALL[idx], weight);
        prop_assert!(v.is_normalized());
        prop_assert_eq!(v.leader(), Archetype::ALL[idx]);
    }
}
