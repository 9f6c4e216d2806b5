//! Descriptive statistics over in-memory samples
//!
//! The unchecked functions mirror the usual numeric conventions: they expect a
//! non-empty slice (two elements for [`sample_std_dev`]) and produce NaN or
//! infinity otherwise. The `checked_*` variants report the same conditions as
//! [`Error::InsufficientData`].

use crate::{Error, Result};

/// Arithmetic mean of a sample
///
/// Observations are summed relative to the first one, so a constant sample
/// reproduces its value exactly and has exactly zero spread.
///
/// # Examples
///
/// ```rust
/// use steelyard_core::descriptive::mean;
///
/// assert_eq!(mean(&[1.0, 2.0, 3.0]), 2.0);
/// ```
pub fn mean(sample: &[f64]) -> f64 {
    debug_assert!(!sample.is_empty(), "mean of an empty sample");
    let origin = sample.first().copied().unwrap_or(0.0);
    origin + sample.iter().map(|&x| x - origin).sum::<f64>() / sample.len() as f64
}

/// Population variance (divisor `n`)
///
/// # Examples
///
/// ```rust
/// use steelyard_core::descriptive::variance;
///
/// assert_eq!(variance(&[1.0, 3.0]), 1.0);
/// ```
pub fn variance(sample: &[f64]) -> f64 {
    debug_assert!(!sample.is_empty(), "variance of an empty sample");
    sum_of_squares(sample) / sample.len() as f64
}

/// Population standard deviation (divisor `n`)
pub fn std_dev(sample: &[f64]) -> f64 {
    variance(sample).sqrt()
}

/// Sample standard deviation (divisor `n - 1`)
///
/// # Examples
///
/// ```rust
/// use steelyard_core::descriptive::sample_std_dev;
///
/// let sd = sample_std_dev(&[1.0, 2.0, 3.0, 4.0, 5.0]);
/// assert!((sd - 1.58113883).abs() < 1e-6);
/// ```
pub fn sample_std_dev(sample: &[f64]) -> f64 {
    debug_assert!(sample.len() >= 2, "sample standard deviation needs two observations");
    (sum_of_squares(sample) / (sample.len() - 1) as f64).sqrt()
}

/// Squared deviations from the mean, summed
fn sum_of_squares(sample: &[f64]) -> f64 {
    let m = mean(sample);
    sample
        .iter()
        .map(|&x| {
            let diff = x - m;
            diff * diff
        })
        .sum()
}

/// Mean, reporting an empty sample as an error
pub fn checked_mean(sample: &[f64]) -> Result<f64> {
    if sample.is_empty() {
        return Err(Error::empty_input());
    }
    Ok(mean(sample))
}

/// Population variance, reporting an empty sample as an error
pub fn checked_variance(sample: &[f64]) -> Result<f64> {
    if sample.is_empty() {
        return Err(Error::empty_input());
    }
    Ok(variance(sample))
}

/// Sample standard deviation, reporting fewer than two observations as an error
pub fn checked_sample_std_dev(sample: &[f64]) -> Result<f64> {
    if sample.len() < 2 {
        return Err(Error::InsufficientData {
            expected: 2,
            actual: sample.len(),
        });
    }
    Ok(sample_std_dev(sample))
}

/// Square root applied to a scalar or element-wise to a sequence
pub trait SquareRoot {
    type Output;

    fn square_root(self) -> Self::Output;
}

impl SquareRoot for f64 {
    type Output = f64;

    fn square_root(self) -> f64 {
        self.sqrt()
    }
}

impl SquareRoot for &[f64] {
    type Output = Vec<f64>;

    fn square_root(self) -> Vec<f64> {
        self.iter().map(|x| x.sqrt()).collect()
    }
}

impl SquareRoot for &Vec<f64> {
    type Output = Vec<f64>;

    fn square_root(self) -> Vec<f64> {
        self.as_slice().square_root()
    }
}

impl<const N: usize> SquareRoot for &[f64; N] {
    type Output = [f64; N];

    fn square_root(self) -> [f64; N] {
        self.map(f64::sqrt)
    }
}

/// Square root of a scalar, or of each element of a sequence
///
/// # Examples
///
/// ```rust
/// use steelyard_core::descriptive::sqrt;
///
/// assert_eq!(sqrt(16.0), 4.0);
/// assert_eq!(sqrt(&[1.0, 4.0, 9.0]), [1.0, 2.0, 3.0]);
/// ```
pub fn sqrt<T: SquareRoot>(x: T) -> T::Output {
    x.square_root()
}
