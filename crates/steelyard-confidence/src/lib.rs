//! Confidence intervals for two-group comparisons
//!
//! This crate provides the interval estimators the derived comparison metrics
//! are built on:
//!
//! - **Mean intervals**: normal approximation for large samples, Student's t
//!   for small ones
//! - **Delta intervals**: pooled-variance t-interval for the difference of
//!   two group means
//!
//! # Examples
//!
//! ```rust
//! use steelyard_confidence::{delta_interval, mean_interval};
//!
//! let control = vec![0.2; 12];
//! let test = vec![0.21, 0.29, 0.242, 0.16, 0.23, 0.19, 0.13, 0.24];
//!
//! // Constant samples collapse to a point
//! let ci = mean_interval(&control, 0.95).unwrap().unwrap();
//! assert_eq!((ci.lower, ci.upper), (0.2, 0.2));
//!
//! let delta = delta_interval(&control, &test, 0.05).unwrap();
//! println!("95% CI for the difference: [{:.4}, {:.4}]", delta.lower, delta.upper);
//! ```

mod delta_interval;
mod mean_interval;
mod types;

// Re-exports
pub use delta_interval::{
    delta_interval, delta_interval_default, pooled_std_dev, DeltaIntervalEstimator,
};
pub use mean_interval::{
    mean_interval, CriticalDistribution, MeanIntervalEstimator, LARGE_SAMPLE_THRESHOLD,
};
pub use types::{Alpha, ConfidenceInterval, ConfidenceLevel};
