//! McNemar's test for paired categorical outcomes
//!
//! Only the discordant cells of the 2×2 table carry information: `b` counts
//! pairs where the first rater is right and the second wrong, `c` the reverse.
//! Under the null hypothesis of equal marginal error rates `b ~ Binomial(b + c, 1/2)`.

use serde::{Deserialize, Serialize};
use statrs::distribution::{Binomial, ChiSquared, ContinuousCDF, DiscreteCDF};
use steelyard_core::{Error, Result};
use tracing::{debug, instrument};

/// 2×2 table of paired outcome counts
///
/// Row index is the first group's outcome, column index the second group's
/// (index 0 = positive/correct, 1 = negative/incorrect).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContingencyTable {
    counts: [[u64; 2]; 2],
}

impl ContingencyTable {
    /// Create a table from raw counts
    pub fn new(counts: [[u64; 2]; 2]) -> Self {
        Self { counts }
    }

    /// Tabulate paired boolean outcomes (`true` = positive/correct)
    ///
    /// ```rust
    /// use steelyard_hypothesis::ContingencyTable;
    ///
    /// let first = [true, true, false, true];
    /// let second = [true, false, false, false];
    /// let table = ContingencyTable::from_paired_outcomes(&first, &second).unwrap();
    /// assert_eq!(table.discordant(), (2, 0));
    /// ```
    pub fn from_paired_outcomes(first: &[bool], second: &[bool]) -> Result<Self> {
        if first.len() != second.len() {
            return Err(Error::InvalidInput(format!(
                "Paired outcomes differ in length: {} vs {}",
                first.len(),
                second.len()
            )));
        }

        let mut counts = [[0u64; 2]; 2];
        for (&a, &b) in first.iter().zip(second) {
            counts[usize::from(!a)][usize::from(!b)] += 1;
        }
        Ok(Self { counts })
    }

    /// Raw counts
    pub fn counts(&self) -> [[u64; 2]; 2] {
        self.counts
    }

    /// Discordant cells `(b, c)`
    pub fn discordant(&self) -> (u64, u64) {
        (self.counts[0][1], self.counts[1][0])
    }

    /// Total number of pairs
    pub fn total(&self) -> u64 {
        self.counts.iter().flatten().sum()
    }
}

impl From<[[u64; 2]; 2]> for ContingencyTable {
    fn from(counts: [[u64; 2]; 2]) -> Self {
        Self::new(counts)
    }
}

/// How the McNemar p-value is obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum McNemarMethod {
    /// Exact two-sided binomial test; the statistic is `min(b, c)`
    Exact,
    /// Chi-square approximation with one degree of freedom
    ChiSquare { continuity_correction: bool },
}

impl Default for McNemarMethod {
    fn default() -> Self {
        Self::Exact
    }
}

/// Outcome of a paired test
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PairedTestResult {
    pub statistic: f64,
    pub p_value: f64,
    pub method: McNemarMethod,
}

impl PairedTestResult {
    /// Whether the null hypothesis is rejected at `alpha`
    pub fn is_significant(&self, alpha: f64) -> bool {
        self.p_value < alpha
    }
}

/// McNemar's test with the exact binomial p-value
pub fn paired_test(table: &ContingencyTable) -> Result<PairedTestResult> {
    paired_test_with(table, McNemarMethod::default())
}

/// McNemar's test with an explicit method
#[instrument(skip(table), fields(discordant = ?table.discordant()))]
pub fn paired_test_with(table: &ContingencyTable, method: McNemarMethod) -> Result<PairedTestResult> {
    let (b, c) = table.discordant();
    let n = b + c;

    let (statistic, p_value) = match method {
        McNemarMethod::Exact => {
            let k = b.min(c);
            if n == 0 {
                (0.0, 1.0)
            } else {
                let binomial =
                    Binomial::new(0.5, n).map_err(|e| Error::distribution("binomial", e))?;
                (k as f64, (2.0 * binomial.cdf(k)).min(1.0))
            }
        }
        McNemarMethod::ChiSquare {
            continuity_correction,
        } => {
            if n == 0 {
                return Err(Error::InsufficientData {
                    expected: 1,
                    actual: 0,
                });
            }
            let mut diff = (b as f64 - c as f64).abs();
            if continuity_correction {
                diff -= 1.0;
            }
            let statistic = diff * diff / n as f64;
            let chi2 = ChiSquared::new(1.0).map_err(|e| Error::distribution("chi-square", e))?;
            (statistic, chi2.sf(statistic))
        }
    };

    debug!(?method, "McNemar statistic {}, p = {:.6}", statistic, p_value);
    Ok(PairedTestResult {
        statistic,
        p_value,
        method,
    })
}
