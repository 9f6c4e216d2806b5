//! Lift of the test group relative to the control mean

use steelyard_confidence::{Alpha, ConfidenceInterval, DeltaIntervalEstimator};
use steelyard_core::{descriptive, Error, Result};
use tracing::{debug, instrument};

/// Express a delta interval relative to the control mean
///
/// Both bounds and the estimate are divided by `control_mean` as-is. A
/// negative control mean therefore yields `lower > upper`.
pub fn rise_from_delta(delta: &ConfidenceInterval, control_mean: f64) -> Result<ConfidenceInterval> {
    if control_mean == 0.0 {
        return Err(Error::Computation(
            "Rise is undefined for a zero control mean".to_string(),
        ));
    }

    Ok(ConfidenceInterval::new(
        delta.lower / control_mean,
        delta.upper / control_mean,
        delta.estimate / control_mean,
        delta.confidence_level,
    ))
}

/// Rise interval at the default 5% significance level
pub fn rise_interval(control: &[f64], test: &[f64]) -> Result<ConfidenceInterval> {
    rise_interval_with_alpha(control, test, Alpha::default())
}

/// Rise interval: the delta interval divided by `mean(control)`
#[instrument(skip(control, test), fields(n_control = control.len(), n_test = test.len()))]
pub fn rise_interval_with_alpha(
    control: &[f64],
    test: &[f64],
    alpha: Alpha,
) -> Result<ConfidenceInterval> {
    let delta = DeltaIntervalEstimator::new(alpha).estimate(control, test)?;
    let control_mean = descriptive::mean(control);
    debug!("Normalising by control mean {:.6}", control_mean);
    rise_from_delta(&delta, control_mean)
}
