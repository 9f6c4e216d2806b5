//! Confidence interval for the difference between two group means
//!
//! Classical two-sample t-interval under an equal-variance assumption. The
//! pooled standard deviation is built from each group's population variance
//! (divisor `n`), weighted by `n - 1`:
//!
//! ```text
//! sw = sqrt(((n1 - 1) * var(test) + (n2 - 1) * var(control)) / (n1 + n2 - 2))
//! ```
//!
//! Note this is not the unbiased pooled variance.

use crate::{Alpha, ConfidenceInterval};
use statrs::distribution::{ContinuousCDF, StudentsT};
use steelyard_core::{descriptive, Error, Result};
use tracing::{debug, instrument, trace};

/// Pooled standard deviation of two groups
///
/// Requires `test.len() + control.len() > 2`.
pub fn pooled_std_dev(control: &[f64], test: &[f64]) -> f64 {
    let n1 = test.len() as f64;
    let n2 = control.len() as f64;
    let weighted = (n1 - 1.0) * descriptive::variance(test)
        + (n2 - 1.0) * descriptive::variance(control);
    trace!("Weighted variance sum {:.6e}", weighted);
    descriptive::sqrt(weighted / (n1 + n2 - 2.0))
}

/// Estimator for the interval on `mean(test) - mean(control)`
///
/// ```rust
/// use steelyard_confidence::{Alpha, DeltaIntervalEstimator};
///
/// let control = [1.0, 2.0, 3.0, 4.0];
/// let test = [3.0, 4.0, 5.0, 6.0];
///
/// let estimator = DeltaIntervalEstimator::new(Alpha::default());
/// let ci = estimator.estimate(&control, &test).unwrap();
/// assert_eq!(ci.estimate, 2.0);
/// assert!(ci.contains(2.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DeltaIntervalEstimator {
    alpha: Alpha,
}

impl DeltaIntervalEstimator {
    /// Create an estimator at the given two-sided significance level
    pub fn new(alpha: Alpha) -> Self {
        Self { alpha }
    }

    /// Get the significance level
    pub fn alpha(&self) -> Alpha {
        self.alpha
    }

    /// Upper critical value of the t distribution with `df` degrees of freedom
    pub fn critical_value(&self, degrees_of_freedom: f64) -> Result<f64> {
        let t_dist = StudentsT::new(0.0, 1.0, degrees_of_freedom)
            .map_err(|e| Error::distribution("Student's t", e))?;
        Ok(t_dist.inverse_cdf(1.0 - self.alpha.tail_probability()))
    }

    /// Estimate the interval for `mean(test) - mean(control)`
    ///
    /// Both groups must be non-empty and hold more than two observations in
    /// total. Groups without spread produce a point interval at the
    /// difference of means.
    #[instrument(skip(self, control, test), fields(n_control = control.len(), n_test = test.len()))]
    pub fn estimate(&self, control: &[f64], test: &[f64]) -> Result<ConfidenceInterval> {
        let n1 = test.len();
        let n2 = control.len();
        if n1 == 0 || n2 == 0 {
            return Err(Error::empty_input());
        }
        if n1 + n2 <= 2 {
            return Err(Error::InsufficientData {
                expected: 3,
                actual: n1 + n2,
            });
        }

        let difference = descriptive::mean(test) - descriptive::mean(control);
        let pooled = pooled_std_dev(control, test);
        let degrees_of_freedom = (n1 + n2 - 2) as f64;
        let t_score = self.critical_value(degrees_of_freedom)?;
        let margin =
            t_score * pooled * descriptive::sqrt(1.0 / n1 as f64 + 1.0 / n2 as f64);

        debug!(
            "Difference {:.6}, pooled sd {:.6}, t({}) = {:.6}, margin {:.6}",
            difference, pooled, degrees_of_freedom, t_score, margin
        );

        Ok(ConfidenceInterval::symmetric(
            difference,
            margin,
            self.alpha.confidence_level().value(),
        ))
    }
}

/// Confidence interval for `mean(test) - mean(control)` at significance `alpha`
pub fn delta_interval(control: &[f64], test: &[f64], alpha: f64) -> Result<ConfidenceInterval> {
    DeltaIntervalEstimator::new(Alpha::new(alpha)?).estimate(control, test)
}

/// Confidence interval for `mean(test) - mean(control)` at the default 5% level
pub fn delta_interval_default(control: &[f64], test: &[f64]) -> Result<ConfidenceInterval> {
    DeltaIntervalEstimator::default().estimate(control, test)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn reference_groups() -> (Vec<f64>, Vec<f64>) {
        let control = vec![0.2; 12];
        let test = vec![
            0.21, 0.29, 0.242, 0.16, 0.23, 0.19, 0.13, 0.24, 0.17, 0.23, 0.2, 0.13, 0.24, 0.2,
            0.2, 0.2,
        ];
        (control, test)
    }

    #[test]
    fn test_pooled_std_dev_uses_population_variance() {
        // var([1, 3]) = 1, var([2, 4, 6]) = 8/3
        let control = [2.0, 4.0, 6.0];
        let test = [1.0, 3.0];
        let expected = ((1.0 * 1.0 + 2.0 * (8.0 / 3.0)) / 3.0f64).sqrt();
        assert_abs_diff_eq!(pooled_std_dev(&control, &test), expected, epsilon = 1e-12);

        // The unbiased textbook value differs
        let unbiased = ((1.0 * 2.0 + 2.0 * 4.0) / 3.0f64).sqrt();
        assert!((pooled_std_dev(&control, &test) - unbiased).abs() > 1e-3);
    }

    #[test]
    fn test_reference_groups() {
        let (control, test) = reference_groups();
        let ci = delta_interval(&control, &test, 0.05).unwrap();

        assert_abs_diff_eq!(ci.estimate, 0.003875, epsilon = 1e-12);
        assert_abs_diff_eq!(
            pooled_std_dev(&control, &test),
            0.031273308615,
            epsilon = 1e-9
        );

        // t(0.975, 26) = 2.055529
        let margin = 2.055529 * 0.011942691997;
        assert_abs_diff_eq!(ci.lower, 0.003875 - margin, epsilon = 1e-5);
        assert_abs_diff_eq!(ci.upper, 0.003875 + margin, epsilon = 1e-5);
        assert!(ci.lower < 0.0 && ci.upper > 0.0);
        assert_abs_diff_eq!(ci.confidence_level, 0.95, epsilon = 1e-12);
    }

    #[test]
    fn test_known_two_group_interval() {
        let control = [1.0, 2.0, 3.0, 4.0];
        let test = [3.0, 4.0, 5.0, 6.0];
        let ci = delta_interval_default(&control, &test).unwrap();

        // var = 1.25 in each group, sw = sqrt(1.25), t(0.975, 6) = 2.446912
        let margin = 2.446912 * 1.25f64.sqrt() * 0.5f64.sqrt();
        assert_eq!(ci.estimate, 2.0);
        assert_abs_diff_eq!(ci.lower, 2.0 - margin, epsilon = 1e-4);
        assert_abs_diff_eq!(ci.upper, 2.0 + margin, epsilon = 1e-4);
    }

    #[test]
    fn test_direction_is_test_minus_control() {
        let control = [1.0, 2.0, 3.0, 4.0];
        let test = [3.0, 4.0, 5.0, 6.0];
        let forward = delta_interval_default(&control, &test).unwrap();
        let backward = delta_interval_default(&test, &control).unwrap();

        assert_abs_diff_eq!(forward.lower, -backward.upper, epsilon = 1e-12);
        assert_abs_diff_eq!(forward.upper, -backward.lower, epsilon = 1e-12);
    }

    #[test]
    fn test_smaller_alpha_widens_interval() {
        let (control, test) = reference_groups();
        let ci_05 = delta_interval(&control, &test, 0.05).unwrap();
        let ci_01 = delta_interval(&control, &test, 0.01).unwrap();
        let ci_50 = delta_interval(&control, &test, 0.5).unwrap();

        assert!(ci_01.width() > ci_05.width());
        assert!(ci_05.width() > ci_50.width());
    }

    #[test]
    fn test_zero_spread_collapses() {
        let ci = delta_interval_default(&[1.0; 5], &[3.0; 4]).unwrap();
        assert!(ci.is_point());
        assert_eq!(ci.estimate, 2.0);
    }

    #[test]
    fn test_insufficient_data() {
        assert!(matches!(
            delta_interval_default(&[], &[1.0, 2.0, 3.0]),
            Err(Error::InsufficientData { .. })
        ));
        assert!(matches!(
            delta_interval_default(&[1.0], &[2.0]),
            Err(Error::InsufficientData { expected: 3, actual: 2 })
        ));
        assert!(delta_interval_default(&[1.0], &[2.0, 2.5]).is_ok());
    }

    #[test]
    fn test_invalid_alpha() {
        assert!(matches!(
            delta_interval(&[1.0, 2.0], &[3.0, 4.0], 0.0),
            Err(Error::InvalidParameter(_))
        ));
    }
}
