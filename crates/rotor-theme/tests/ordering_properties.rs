//! Property-based invariants for cycle ordering.
//!
//! 1. The order is a permutation of the input indices.
//! 2. The first catalog entry always leads the cycle.
//! 3. The input slice is left untouched.
//! 4. 2-opt never lengthens the tour and never moves the first entry.
//! 5. Tour length is bounded by `180 * n`.

use proptest::prelude::*;
use rotor_theme::order::{
    nearest_neighbor_order, refine_two_opt, sort_by_color_similarity, tour_length,
};

fn hues(max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(0.0f64..360.0, 0..max_len)
}

proptest! {
    #[test]
    fn order_is_permutation(input in hues(40)) {
        let mut order = nearest_neighbor_order(&input);
        order.sort_unstable();
        let expected: Vec<usize> = (0..input.len()).collect();
        prop_assert_eq!(order, expected);
    }

    #[test]
    fn seed_leads(input in hues(40)) {
        let sorted = sort_by_color_similarity(input.as_slice());
        prop_assert_eq!(sorted.len(), input.len());
        if let Some(first) = input.first() {
            prop_assert_eq!(sorted[0], *first);
        }
    }

    #[test]
    fn input_untouched(input in hues(40)) {
        let before = input.clone();
        let _ = sort_by_color_similarity(input.as_slice());
        prop_assert_eq!(input, before);
    }

    #[test]
    fn two_opt_never_lengthens(input in hues(24)) {
        let mut cycle = sort_by_color_similarity(input.as_slice());
        let before = tour_length(&cycle);
        let seed = cycle.first().copied();
        refine_two_opt(&mut cycle);
        prop_assert!(tour_length(&cycle) <= before + 1e-6, "{} > {}", tour_length(&cycle), before);
        prop_assert_eq!(cycle.first().copied(), seed);
    }

    #[test]
    fn tour_length_bounded(input in hues(40)) {
        let len = tour_length(&input);
        prop_assert!(len >= 0.0);
        prop_assert!(len <= 180.0 * input.len() as f64 + 1e-9);
    }
}
