//! Raw-value empirical distributions.

use crate::error::SamplingError;
use crate::inverse_cdf::{InverseCdf, check_table};

/// Sorted observations treated as a uniform empirical CDF.
///
/// With `n` values, a draw `u` selects index `i = ⌊u·n⌋` and the bracket
/// `[values[i], values[i+1]]`. The last value has no right neighbour, so
/// indices are clamped to `n - 2`.
///
/// # Example
/// ```
/// use catalog::{EmpiricalDistribution, InverseCdf};
///
/// let dist = EmpiricalDistribution::from_values([5.0, 1.0, 3.0, 2.0, 4.0]);
/// let value = dist.sample(0.999999, 0.5).unwrap();
/// assert_eq!(value, 4.5);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmpiricalDistribution {
    values: Vec<f64>,
}

impl EmpiricalDistribution {
    /// Builds a distribution from observations in any order.
    ///
    /// Non-finite values are dropped and the rest are sorted ascending.
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Self {
        let mut values: Vec<f64> = values.into_iter().filter(|v| v.is_finite()).collect();
        values.sort_by(f64::total_cmp);
        Self { values }
    }

    /// The sorted observations.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn min(&self) -> Option<f64> {
        self.values.first().copied()
    }

    pub fn max(&self) -> Option<f64> {
        self.values.last().copied()
    }
}

impl InverseCdf for EmpiricalDistribution {
    fn len(&self) -> usize {
        self.values.len()
    }

    fn bracket(&self, u: f64) -> Result<(f64, f64), SamplingError> {
        let n = self.values.len();
        let u = check_table(u, n)?;
        let i = ((u * n as f64) as usize).min(n - 2);
        Ok((self.values[i], self.values[i + 1]))
    }
}
