//! Significance tests used alongside two-group interval comparisons
//!
//! - **McNemar's test**: discordant-pairs test on a 2×2 table of paired
//!   categorical outcomes, exact (binomial) or chi-square
//! - **One-way ANOVA**: F-test for equal means across groups
//!
//! Distributions are taken from `statrs`.
//!
//! # Examples
//!
//! ```rust
//! use steelyard_hypothesis::{one_way_anova, paired_test, ContingencyTable};
//!
//! // Rows: first classifier right/wrong. Columns: second classifier right/wrong.
//! let table = ContingencyTable::new([[40, 12], [3, 45]]);
//! let result = paired_test(&table).unwrap();
//! println!("McNemar statistic {}, p = {:.4}", result.statistic, result.p_value);
//!
//! let anova = one_way_anova(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]).unwrap();
//! assert!(anova.p_value < 0.05);
//! ```

mod anova;
mod mcnemar;

// Re-exports
pub use anova::{one_way_anova, AnovaResult};
pub use mcnemar::{paired_test, paired_test_with, ContingencyTable, McNemarMethod, PairedTestResult};
