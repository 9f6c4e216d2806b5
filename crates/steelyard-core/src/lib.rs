//! Core types and descriptive statistics for two-group comparisons
//!
//! Every steelyard crate reports failures through the [`Error`] type defined
//! here and builds on the elementary statistics in [`descriptive`].
//!
//! # Example
//!
//! ```rust
//! use steelyard_core::descriptive::{mean, sample_std_dev, variance};
//!
//! let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
//! assert_eq!(mean(&data), 5.0);
//! assert_eq!(variance(&data), 4.0);
//! assert!((sample_std_dev(&data) - 2.138089935).abs() < 1e-9);
//! ```

pub mod descriptive;
pub mod error;

// Re-export core types
pub use descriptive::{
    checked_mean, checked_sample_std_dev, checked_variance, mean, sample_std_dev, sqrt, std_dev,
    variance, SquareRoot,
};
pub use error::{Error, Result};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
