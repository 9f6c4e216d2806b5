//! Error types for two-group comparison statistics
//!
//! Provides a unified error type for all steelyard crates.

use thiserror::Error;

/// Core error type for steelyard operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for empty input
    pub fn empty_input() -> Self {
        Self::InsufficientData {
            expected: 1,
            actual: 0,
        }
    }

    /// Create an error for a probability-like parameter outside (0, 1)
    pub fn invalid_probability(name: &str, value: f64) -> Self {
        Self::InvalidParameter(format!("{name} {value} must be in (0, 1)"))
    }

    /// Create an error for a failed distribution construction
    pub fn distribution(name: &str, err: impl std::fmt::Display) -> Self {
        Self::Computation(format!("Failed to create {name} distribution: {err}"))
    }
}
