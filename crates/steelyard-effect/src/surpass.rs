//! Surpass rate: how much of the delta interval lies above zero
//!
//! The delta interval is read as a band of uniform density around the true
//! difference of means. The surpass rate is the share of that band at or
//! above zero:
//!
//! - `lower >= 0`: the whole band is non-negative, rate 1
//! - `lower < 0 < upper`: zero splits the band, rate `upper / (upper - lower)`
//! - otherwise (`upper <= 0`): rate 0
//!
//! This is a heuristic, not a posterior probability.

use steelyard_confidence::{Alpha, DeltaIntervalEstimator};
use steelyard_core::Result;
use tracing::{debug, instrument};

/// Surpass rate for a delta interval with the given bounds
///
/// ```rust
/// use steelyard_effect::surpass_probability;
///
/// assert_eq!(surpass_probability(0.0, 0.3), 1.0);
/// assert_eq!(surpass_probability(-0.3, 0.0), 0.0);
/// ```
pub fn surpass_probability(lower: f64, upper: f64) -> f64 {
    if lower >= 0.0 {
        1.0
    } else if lower < 0.0 && upper > 0.0 {
        upper / (upper - lower)
    } else {
        0.0
    }
}

/// Surpass rate at the default 5% significance level
pub fn surpass_rate(control: &[f64], test: &[f64]) -> Result<f64> {
    surpass_rate_with_alpha(control, test, Alpha::default())
}

/// Surpass rate of `test` over `control` from the delta interval at `alpha`
#[instrument(skip(control, test), fields(n_control = control.len(), n_test = test.len()))]
pub fn surpass_rate_with_alpha(control: &[f64], test: &[f64], alpha: Alpha) -> Result<f64> {
    let delta = DeltaIntervalEstimator::new(alpha).estimate(control, test)?;
    let rate = surpass_probability(delta.lower, delta.upper);
    debug!(
        "Delta interval [{:.6}, {:.6}] gives surpass rate {:.4}",
        delta.lower, delta.upper, rate
    );
    Ok(rate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use steelyard_confidence::delta_interval_default;

    #[test]
    fn test_branches() {
        assert_eq!(surpass_probability(0.1, 0.3), 1.0);
        assert_abs_diff_eq!(surpass_probability(-0.1, 0.3), 0.75, epsilon = 1e-12);
        assert_eq!(surpass_probability(-0.3, -0.1), 0.0);
    }

    #[test]
    fn test_boundaries() {
        // Zero lower bound counts as entirely non-negative
        assert_eq!(surpass_probability(0.0, 0.3), 1.0);
        assert_eq!(surpass_probability(0.0, 0.0), 1.0);
        // Zero upper bound falls through to the negative branch
        assert_eq!(surpass_probability(-0.3, 0.0), 0.0);
    }

    #[test]
    fn test_symmetric_interval_is_even() {
        assert_eq!(surpass_probability(-0.2, 0.2), 0.5);
    }

    #[test]
    fn test_reference_groups_interpolate() {
        let control = vec![0.2; 12];
        let test = vec![
            0.21, 0.29, 0.242, 0.16, 0.23, 0.19, 0.13, 0.24, 0.17, 0.23, 0.2, 0.13, 0.24, 0.2,
            0.2, 0.2,
        ];

        let delta = delta_interval_default(&control, &test).unwrap();
        let rate = surpass_rate(&control, &test).unwrap();

        assert!((0.0..=1.0).contains(&rate));
        assert!(delta.lower < 0.0 && delta.upper > 0.0);
        assert_eq!(rate, delta.upper / (delta.upper - delta.lower));
        // Positive observed difference puts more than half the band above zero
        assert!(rate > 0.5);
    }

    #[test]
    fn test_clear_improvement_and_regression() {
        let control = [1.0, 1.1, 0.9, 1.0, 1.05, 0.95];
        let better = [2.0, 2.1, 1.9, 2.0, 2.05, 1.95];

        assert_eq!(surpass_rate(&control, &better).unwrap(), 1.0);
        assert_eq!(surpass_rate(&better, &control).unwrap(), 0.0);
    }
}
