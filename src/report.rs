//! Text report for a control/test comparison
//!
//! [`ComparisonReport`] gathers every metric of one comparison; its `Display`
//! implementation renders the human-readable summary.

use serde::Serialize;
use std::fmt;
use steelyard_confidence::{
    Alpha, ConfidenceInterval, ConfidenceLevel, DeltaIntervalEstimator, MeanIntervalEstimator,
};
use steelyard_core::{descriptive, Result};
use steelyard_effect::{rise_from_delta, surpass_probability};
use steelyard_hypothesis::{one_way_anova, AnovaResult};
use tracing::{info, instrument};

/// Parameters of a comparison report
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReportConfig {
    /// Coverage of the per-group mean intervals
    pub confidence_level: ConfidenceLevel,
    /// Significance level of the delta interval
    pub alpha: Alpha,
    /// Threshold on the ANOVA p-value for the significance message
    pub significance_level: Alpha,
}

impl ReportConfig {
    pub fn with_confidence_level(mut self, confidence_level: ConfidenceLevel) -> Self {
        self.confidence_level = confidence_level;
        self
    }

    pub fn with_alpha(mut self, alpha: Alpha) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_significance_level(mut self, significance_level: Alpha) -> Self {
        self.significance_level = significance_level;
        self
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            confidence_level: ConfidenceLevel::default(),
            alpha: Alpha::default(),
            significance_level: Alpha::default(),
        }
    }
}

/// Size, mean and mean interval of one group
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GroupSummary {
    pub size: usize,
    pub mean: f64,
    /// `None` when the group holds a single observation
    pub interval: Option<ConfidenceInterval>,
}

impl GroupSummary {
    fn from_sample(sample: &[f64], estimator: &MeanIntervalEstimator) -> Result<Self> {
        Ok(Self {
            size: sample.len(),
            mean: descriptive::mean(sample),
            interval: estimator.estimate(sample)?,
        })
    }
}

/// All metrics of one control/test comparison
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonReport {
    pub control: GroupSummary,
    pub test: GroupSummary,
    /// Interval on `mean(test) - mean(control)`
    pub delta: ConfidenceInterval,
    /// Delta interval relative to the control mean; `None` for a zero control mean
    pub rise: Option<ConfidenceInterval>,
    pub surpass_rate: f64,
    pub anova: AnovaResult,
    pub significance_level: f64,
}

impl ComparisonReport {
    /// Run every comparison metric on the two groups
    #[instrument(skip(control, test), fields(n_control = control.len(), n_test = test.len()))]
    pub fn compute(control: &[f64], test: &[f64], config: &ReportConfig) -> Result<Self> {
        let delta = DeltaIntervalEstimator::new(config.alpha).estimate(control, test)?;

        let mean_estimator = MeanIntervalEstimator::new(config.confidence_level);
        let control_summary = GroupSummary::from_sample(control, &mean_estimator)?;
        let test_summary = GroupSummary::from_sample(test, &mean_estimator)?;

        let rise = if control_summary.mean != 0.0 {
            Some(rise_from_delta(&delta, control_summary.mean)?)
        } else {
            None
        };
        let surpass_rate = surpass_probability(delta.lower, delta.upper);
        let anova = one_way_anova(&[control, test])?;

        info!(
            surpass_rate,
            p_value = anova.p_value,
            "Compared {} control and {} test observations",
            control.len(),
            test.len()
        );

        Ok(Self {
            control: control_summary,
            test: test_summary,
            delta,
            rise,
            surpass_rate,
            anova,
            significance_level: config.significance_level.value(),
        })
    }

    /// Whether the ANOVA rejects equal means at the configured level
    pub fn is_significant(&self) -> bool {
        self.anova.is_significant(self.significance_level)
    }

    /// One-line verdict on the difference between the groups
    pub fn significance_message(&self) -> String {
        if self.is_significant() {
            format!(
                "The difference between test and control is statistically significant (p = {:.4} < {})",
                self.anova.p_value, self.significance_level
            )
        } else {
            format!(
                "The difference between test and control is not statistically significant (p = {:.4} >= {})",
                self.anova.p_value, self.significance_level
            )
        }
    }
}

fn write_group(f: &mut fmt::Formatter<'_>, name: &str, group: &GroupSummary) -> fmt::Result {
    match &group.interval {
        Some(ci) => writeln!(
            f,
            "{name:<8} n = {:<5} mean = {:.4}  {:.1}% CI [{:.4}, {:.4}]",
            group.size,
            group.mean,
            ci.confidence_level * 100.0,
            ci.lower,
            ci.upper
        ),
        None => writeln!(
            f,
            "{name:<8} n = {:<5} mean = {:.4}  (too few observations for an interval)",
            group.size, group.mean
        ),
    }
}

impl fmt::Display for ComparisonReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Control vs test comparison")?;
        write_group(f, "control", &self.control)?;
        write_group(f, "test", &self.test)?;
        writeln!(
            f,
            "delta    {:.1}% CI [{:+.4}, {:+.4}]",
            self.delta.confidence_level * 100.0,
            self.delta.lower,
            self.delta.upper
        )?;
        match &self.rise {
            Some(rise) => writeln!(
                f,
                "rise     [{:+.2}%, {:+.2}%]",
                rise.lower * 100.0,
                rise.upper * 100.0
            )?,
            None => writeln!(f, "rise     undefined (control mean is zero)")?,
        }
        writeln!(f, "surpass  {:.2}%", self.surpass_rate * 100.0)?;
        write!(f, "{}", self.significance_message())
    }
}
