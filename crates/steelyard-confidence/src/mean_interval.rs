//! Confidence intervals for a single group's mean
//!
//! Large samples use the normal approximation; small samples switch to the
//! Student's t distribution with `n - 1` degrees of freedom.

use crate::{ConfidenceInterval, ConfidenceLevel};
use statrs::distribution::{ContinuousCDF, Normal, StudentsT};
use steelyard_core::{descriptive, Error, Result};
use tracing::{debug, instrument};

/// Sample size from which the normal approximation is used
pub const LARGE_SAMPLE_THRESHOLD: usize = 30;

/// Distribution the critical value of an interval is drawn from
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CriticalDistribution {
    /// Standard normal
    Normal,
    /// Student's t with the given degrees of freedom
    StudentsT { degrees_of_freedom: f64 },
}

impl CriticalDistribution {
    /// Two-sided critical value for the given coverage
    pub fn critical_value(&self, confidence_level: ConfidenceLevel) -> Result<f64> {
        let p = 1.0 - confidence_level.tail_probability();
        match *self {
            Self::Normal => {
                let normal =
                    Normal::new(0.0, 1.0).map_err(|e| Error::distribution("normal", e))?;
                Ok(normal.inverse_cdf(p))
            }
            Self::StudentsT { degrees_of_freedom } => {
                let t_dist = StudentsT::new(0.0, 1.0, degrees_of_freedom)
                    .map_err(|e| Error::distribution("Student's t", e))?;
                Ok(t_dist.inverse_cdf(p))
            }
        }
    }
}

/// Mean confidence interval estimator
///
/// ```rust
/// use steelyard_confidence::{ConfidenceLevel, MeanIntervalEstimator};
///
/// let estimator = MeanIntervalEstimator::new(ConfidenceLevel::NINETY_FIVE);
/// let ci = estimator.estimate(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap().unwrap();
/// assert!(ci.contains(3.0));
///
/// // A single observation carries no information about dispersion
/// assert!(estimator.estimate(&[1.0]).unwrap().is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeanIntervalEstimator {
    confidence_level: ConfidenceLevel,
    large_sample_threshold: usize,
}

impl MeanIntervalEstimator {
    /// Create an estimator for the given coverage
    pub fn new(confidence_level: ConfidenceLevel) -> Self {
        Self {
            confidence_level,
            large_sample_threshold: LARGE_SAMPLE_THRESHOLD,
        }
    }

    /// Override the sample size from which the normal quantile is used
    pub fn with_large_sample_threshold(mut self, threshold: usize) -> Self {
        self.large_sample_threshold = threshold;
        self
    }

    /// Get the confidence level
    pub fn confidence_level(&self) -> ConfidenceLevel {
        self.confidence_level
    }

    /// Get the large-sample threshold
    pub fn large_sample_threshold(&self) -> usize {
        self.large_sample_threshold
    }

    /// Distribution used for a sample of `n` observations
    pub fn distribution_for(&self, n: usize) -> CriticalDistribution {
        if n >= self.large_sample_threshold {
            CriticalDistribution::Normal
        } else {
            CriticalDistribution::StudentsT {
                degrees_of_freedom: n.saturating_sub(1) as f64,
            }
        }
    }

    /// Estimate the interval for the sample mean
    ///
    /// Returns `Ok(None)` when the sample holds fewer than two observations.
    /// A sample without spread yields a point interval at its mean.
    #[instrument(skip(self, sample), fields(n = sample.len()))]
    pub fn estimate(&self, sample: &[f64]) -> Result<Option<ConfidenceInterval>> {
        if sample.is_empty() {
            return Ok(None);
        }

        let n = sample.len();
        let mean = descriptive::mean(sample);
        if n == 1 {
            debug!("Single observation, no interval");
            return Ok(None);
        }

        let level = self.confidence_level.value();
        let std_dev = descriptive::sample_std_dev(sample);
        if std_dev == 0.0 {
            debug!("Zero spread, collapsing to point interval at {}", mean);
            return Ok(Some(ConfidenceInterval::point(mean, level)));
        }

        let std_error = std_dev / (n as f64).sqrt();
        let distribution = self.distribution_for(n);
        let critical_value = distribution.critical_value(self.confidence_level)?;
        debug!(
            ?distribution,
            "Critical value {:.6}, standard error {:.6}", critical_value, std_error
        );

        Ok(Some(ConfidenceInterval::symmetric(
            mean,
            critical_value * std_error,
            level,
        )))
    }
}

impl Default for MeanIntervalEstimator {
    fn default() -> Self {
        Self::new(ConfidenceLevel::default())
    }
}

/// Confidence interval for the mean of `sample`
///
/// `confidence_level` must lie in (0, 1); 0.95 is the customary choice.
pub fn mean_interval(sample: &[f64], confidence_level: f64) -> Result<Option<ConfidenceInterval>> {
    let level = ConfidenceLevel::try_new(confidence_level)?;
    MeanIntervalEstimator::new(level).estimate(sample)
}
