//! One-way analysis of variance

use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, FisherSnedecor};
use steelyard_core::{descriptive, Error, Result};
use tracing::{debug, instrument, trace};

/// F-test outcome for equal group means
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnovaResult {
    pub f_statistic: f64,
    pub p_value: f64,
    /// Between-group degrees of freedom (`k - 1`)
    pub df_between: f64,
    /// Within-group degrees of freedom (`N - k`)
    pub df_within: f64,
}

impl AnovaResult {
    /// Whether the equal-means hypothesis is rejected at `alpha`
    pub fn is_significant(&self, alpha: f64) -> bool {
        self.p_value < alpha
    }
}

/// One-way ANOVA across two or more groups
///
/// Every group must be non-empty and the groups together must hold more
/// observations than there are groups. Groups without any internal spread
/// give `F = inf, p = 0` when their means differ and `F = NaN, p = 1` when
/// every observation is equal.
#[instrument(skip(groups), fields(k = groups.len()))]
pub fn one_way_anova<G: AsRef<[f64]>>(groups: &[G]) -> Result<AnovaResult> {
    let k = groups.len();
    if k < 2 {
        return Err(Error::InvalidInput(format!(
            "ANOVA needs at least two groups, got {k}"
        )));
    }
    if groups.iter().any(|g| g.as_ref().is_empty()) {
        return Err(Error::empty_input());
    }

    let total: usize = groups.iter().map(|g| g.as_ref().len()).sum();
    if total <= k {
        return Err(Error::InsufficientData {
            expected: k + 1,
            actual: total,
        });
    }

    let grand_mean = groups
        .iter()
        .flat_map(|g| g.as_ref().iter())
        .sum::<f64>()
        / total as f64;

    let mut ss_between = 0.0;
    let mut ss_within = 0.0;
    for group in groups {
        let group = group.as_ref();
        let group_mean = descriptive::mean(group);
        ss_between += group.len() as f64 * (group_mean - grand_mean).powi(2);
        ss_within += group.len() as f64 * descriptive::variance(group);
    }
    trace!("SS between {:.6e}, SS within {:.6e}", ss_between, ss_within);

    let df_between = (k - 1) as f64;
    let df_within = (total - k) as f64;

    // Constant groups: any spread between them is infinitely significant
    if ss_within <= 0.0 {
        let (f_statistic, p_value) = if ss_between > 0.0 {
            (f64::INFINITY, 0.0)
        } else {
            (f64::NAN, 1.0)
        };
        debug!("Zero within-group variance, F = {}, p = {}", f_statistic, p_value);
        return Ok(AnovaResult {
            f_statistic,
            p_value,
            df_between,
            df_within,
        });
    }

    let f_statistic = (ss_between / df_between) / (ss_within / df_within);

    let f_dist = FisherSnedecor::new(df_between, df_within)
        .map_err(|e| Error::distribution("F", e))?;
    let p_value = f_dist.sf(f_statistic);
    debug!("F({}, {}) = {:.6}, p = {:.6e}", df_between, df_within, f_statistic, p_value);

    Ok(AnovaResult {
        f_statistic,
        p_value,
        df_between,
        df_within,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_two_groups() {
        let result = one_way_anova(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap();

        // SSB = 13.5, SSW = 4, df = (1, 4)
        assert_abs_diff_eq!(result.f_statistic, 13.5, epsilon = 1e-10);
        assert_eq!(result.df_between, 1.0);
        assert_eq!(result.df_within, 4.0);
        assert_abs_diff_eq!(result.p_value, 0.0213116, epsilon = 1e-5);
        assert!(result.is_significant(0.05));
    }

    #[test]
    fn test_reference_groups() {
        let control = vec![0.2; 12];
        let test = vec![
            0.21, 0.29, 0.242, 0.16, 0.23, 0.19, 0.13, 0.24, 0.17, 0.23, 0.2, 0.13, 0.24, 0.2,
            0.2, 0.2,
        ];
        let result = one_way_anova(&[control, test]).unwrap();

        assert_abs_diff_eq!(result.f_statistic, 0.098698426, epsilon = 1e-6);
        assert_eq!(result.df_within, 26.0);
        assert!(!result.is_significant(0.05));
    }

    #[test]
    fn test_identical_groups() {
        let group = [1.0, 2.0, 3.0, 4.0];
        let result = one_way_anova(&[group, group, group]).unwrap();
        assert_abs_diff_eq!(result.f_statistic, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(result.p_value, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_slices_of_different_lengths() {
        let a: &[f64] = &[1.0, 2.0];
        let b: &[f64] = &[2.0, 3.0, 4.0];
        let c: &[f64] = &[5.0, 6.0, 7.0, 8.0];
        let result = one_way_anova(&[a, b, c]).unwrap();
        assert_eq!(result.df_between, 2.0);
        assert_eq!(result.df_within, 6.0);
        assert!(result.f_statistic > 0.0);
    }

    #[test]
    fn test_invalid_inputs() {
        let single: [&[f64]; 1] = [&[1.0, 2.0]];
        assert!(matches!(one_way_anova(&single), Err(Error::InvalidInput(_))));

        let with_empty: [&[f64]; 2] = [&[1.0, 2.0], &[]];
        assert!(matches!(
            one_way_anova(&with_empty),
            Err(Error::InsufficientData { .. })
        ));

        let singletons: [&[f64]; 2] = [&[1.0], &[2.0]];
        assert!(matches!(
            one_way_anova(&singletons),
            Err(Error::InsufficientData { expected: 3, actual: 2 })
        ));
    }

    #[test]
    fn test_constant_groups_with_different_means() {
        let result = one_way_anova(&[[0.2; 12], [0.3; 12]]).unwrap();
        assert_eq!(result.f_statistic, f64::INFINITY);
        assert_eq!(result.p_value, 0.0);
        assert_eq!(result.df_within, 22.0);
        assert!(result.is_significant(0.05));
    }

    #[test]
    fn test_all_observations_equal() {
        let result = one_way_anova(&[[1.5; 4], [1.5; 4]]).unwrap();
        assert!(result.f_statistic.is_nan());
        assert_eq!(result.p_value, 1.0);
        assert!(!result.is_significant(0.05));
    }

    #[test]
    fn test_strong_effect_keeps_tail_precision() {
        let result = one_way_anova(&[
            [0.0, 0.001, -0.001, 0.0005, -0.0005],
            [10.0, 10.001, 9.999, 10.0005, 9.9995],
        ])
        .unwrap();
        assert!(result.f_statistic > 1e8);
        assert!(result.p_value > 0.0);
        assert!(result.p_value < 1e-20);
    }
}
