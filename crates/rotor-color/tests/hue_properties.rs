//! Property-based invariants for the hue wheel.
//!
//! 1. Distance is symmetric.
//! 2. Distance from a hue to itself is zero.
//! 3. Distance is bounded in [0, 180].
//! 4. Distance ignores whole turns.
//! 5. Every parseable color has a hue in [0, 360).
//! 6. Display/parse agree for every color.

use proptest::prelude::*;
use rotor_color::{Rgb, hue_distance, normalize_hue};

fn hue_strategy() -> impl Strategy<Value = f64> {
    0.0f64..360.0
}

fn rgb_strategy() -> impl Strategy<Value = Rgb> {
    (any::<u8>(), any::<u8>(), any::<u8>()).prop_map(|(r, g, b)| Rgb::new(r, g, b))
}

proptest! {
    #[test]
    fn distance_symmetric(a in hue_strategy(), b in hue_strategy()) {
        prop_assert_eq!(hue_distance(a, b), hue_distance(b, a));
    }

    #[test]
    fn distance_to_self_is_zero(a in hue_strategy()) {
        prop_assert_eq!(hue_distance(a, a), 0.0);
    }

    #[test]
    fn distance_bounded(a in -1000.0f64..1000.0, b in -1000.0f64..1000.0) {
        let d = hue_distance(a, b);
        prop_assert!((0.0..=180.0).contains(&d), "distance {} out of range for {}, {}", d, a, b);
    }

    #[test]
    fn distance_ignores_full_turns(a in hue_strategy(), b in hue_strategy(), turns in -3i32..=3) {
        let shifted = f64::from(turns).mul_add(360.0, b);
        prop_assert!((hue_distance(a, b) - hue_distance(a, shifted)).abs() < 1e-9);
    }

    #[test]
    fn hue_in_range(c in rgb_strategy()) {
        let h = c.hue();
        prop_assert!((0.0..360.0).contains(&h), "hue {} out of range for {}", h, c);
    }

    #[test]
    fn normalize_in_range(h in proptest::num::f64::NORMAL) {
        let n = normalize_hue(h);
        prop_assert!((0.0..360.0).contains(&n), "normalize({}) = {}", h, n);
    }

    #[test]
    fn display_parses_back(c in rgb_strategy()) {
        prop_assert_eq!(Rgb::parse(&c.to_string()).unwrap(), c);
    }
}
