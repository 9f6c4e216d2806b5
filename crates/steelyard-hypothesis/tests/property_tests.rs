//! Property-based tests for the paired test and ANOVA

use proptest::prelude::*;
use steelyard_hypothesis::{one_way_anova, paired_test, paired_test_with, ContingencyTable, McNemarMethod};

proptest! {
    // Property: p-values are probabilities and ignore the concordant cells
    #[test]
    fn prop_exact_p_value_bounds(
        a in 0u64..200, b in 0u64..200, c in 0u64..200, d in 0u64..200,
    ) {
        let result = paired_test(&ContingencyTable::new([[a, b], [c, d]])).unwrap();
        prop_assert!((0.0..=1.0).contains(&result.p_value));

        let reshuffled = paired_test(&ContingencyTable::new([[d, b], [c, a]])).unwrap();
        prop_assert!((result.p_value - reshuffled.p_value).abs() < 1e-12);
    }

    // Property: swapping the raters leaves both tests unchanged
    #[test]
    fn prop_rater_symmetry(b in 1u64..200, c in 1u64..200) {
        let forward = ContingencyTable::new([[5, b], [c, 5]]);
        let backward = ContingencyTable::new([[5, c], [b, 5]]);
        let method = McNemarMethod::ChiSquare { continuity_correction: true };

        let f = paired_test_with(&forward, method).unwrap();
        let r = paired_test_with(&backward, method).unwrap();
        prop_assert!((f.statistic - r.statistic).abs() < 1e-12);
        prop_assert!((f.p_value - r.p_value).abs() < 1e-12);

        let f = paired_test(&forward).unwrap();
        let r = paired_test(&backward).unwrap();
        prop_assert_eq!(f.statistic, r.statistic);
        prop_assert!((f.p_value - r.p_value).abs() < 1e-12);
    }

    // Property: the ANOVA F statistic is non-negative with a probability p-value
    #[test]
    fn prop_anova_bounds(
        a in prop::collection::vec(-1e2f64..1e2, 2..30),
        b in prop::collection::vec(-1e2f64..1e2, 2..30),
    ) {
        let result = one_way_anova(&[a, b]).unwrap();
        prop_assert!(result.f_statistic >= 0.0);
        prop_assert!((-1e-12..=1.0 + 1e-12).contains(&result.p_value));
    }
}
