//! Comparison metrics derived from the delta interval
//!
//! Both metrics start from the pooled-variance interval on
//! `mean(test) - mean(control)`:
//!
//! - **Rise interval**: the delta interval expressed relative to the control
//!   mean (a lift estimate)
//! - **Surpass rate**: a heuristic probability that the test group's true mean
//!   is at least the control group's
//!
//! # Examples
//!
//! ```rust
//! use steelyard_effect::{rise_interval, surpass_probability, surpass_rate};
//!
//! let control = vec![0.2; 12];
//! let test = vec![
//!     0.21, 0.29, 0.242, 0.16, 0.23, 0.19, 0.13, 0.24,
//!     0.17, 0.23, 0.2, 0.13, 0.24, 0.2, 0.2, 0.2,
//! ];
//!
//! let rise = rise_interval(&control, &test).unwrap();
//! println!("Lift: [{:+.2}%, {:+.2}%]", rise.lower * 100.0, rise.upper * 100.0);
//!
//! let p = surpass_rate(&control, &test).unwrap();
//! assert!((0.0..=1.0).contains(&p));
//!
//! assert!((surpass_probability(-0.1, 0.3) - 0.75).abs() < 1e-12);
//! ```

mod rise;
mod surpass;

// Re-exports
pub use rise::{rise_from_delta, rise_interval, rise_interval_with_alpha};
pub use surpass::{surpass_probability, surpass_rate, surpass_rate_with_alpha};
