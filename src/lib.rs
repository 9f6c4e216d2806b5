//! Two-group comparison statistics
//!
//! `steelyard` weighs a test group against a control group:
//!
//! - descriptive statistics ([`descriptive`])
//! - confidence intervals on each group's mean ([`confidence`])
//! - a pooled-variance interval on the difference of means ([`confidence`])
//! - the lift relative to control and a surpass rate ([`effect`])
//! - McNemar's paired test and one-way ANOVA ([`hypothesis`])
//! - a text report combining all of the above ([`report`])
//!
//! # Example
//!
//! ```rust
//! use steelyard::prelude::*;
//!
//! let control = vec![0.2; 12];
//! let test = vec![
//!     0.21, 0.29, 0.242, 0.16, 0.23, 0.19, 0.13, 0.24,
//!     0.17, 0.23, 0.2, 0.13, 0.24, 0.2, 0.2, 0.2,
//! ];
//!
//! let interval = mean_interval(&test, 0.95)?.expect("two or more observations");
//! let delta = delta_interval(&control, &test, 0.05)?;
//! let rise = rise_interval(&control, &test)?;
//! let p = surpass_rate(&control, &test)?;
//!
//! assert!(interval.contains(interval.estimate));
//! assert!(delta.lower < 0.0 && delta.upper > 0.0);
//! assert!(rise.width() > delta.width());
//! assert!(p > 0.5 && p < 1.0);
//!
//! let report = ComparisonReport::compute(&control, &test, &ReportConfig::default())?;
//! println!("{report}");
//! # Ok::<(), steelyard::Error>(())
//! ```

pub mod report;

pub use steelyard_confidence as confidence;
pub use steelyard_core::descriptive;
pub use steelyard_effect as effect;
pub use steelyard_hypothesis as hypothesis;

pub use report::{ComparisonReport, GroupSummary, ReportConfig};
pub use steelyard_core::{Error, Result};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::report::{ComparisonReport, ReportConfig};
    pub use steelyard_confidence::{
        delta_interval, delta_interval_default, mean_interval, Alpha, ConfidenceInterval,
        ConfidenceLevel, DeltaIntervalEstimator, MeanIntervalEstimator,
    };
    pub use steelyard_core::descriptive::{mean, sample_std_dev, std_dev, variance};
    pub use steelyard_core::{Error, Result};
    pub use steelyard_effect::{rise_interval, surpass_probability, surpass_rate};
    pub use steelyard_hypothesis::{
        one_way_anova, paired_test, paired_test_with, ContingencyTable, McNemarMethod,
    };
}
