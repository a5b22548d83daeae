//! Binned cumulative distributions built from counts.

use crate::error::{DataLoadError, SamplingError};
use crate::inverse_cdf::{InverseCdf, check_table};

/// A single bin: cumulative probability up to and including this bin, and the bin's upper edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CumulativeBin {
    pub cumulative: f64,
    pub upper: f64,
}

/// An explicit CDF over contiguous bins.
///
/// A draw `u` selects the first bin whose cumulative probability is ≥ `u`
/// (binary search, clamped to the last bin). The bracket runs from the
/// previous bin's upper edge, or `floor` for the first bin, to the selected
/// bin's upper edge.
#[derive(Debug, Clone, PartialEq)]
pub struct BinnedDistribution {
    floor: f64,
    bins: Vec<CumulativeBin>,
}

impl BinnedDistribution {
    /// Builds the CDF from `(upper_edge, count)` rows ordered by upper edge.
    ///
    /// Each bin's probability is `count / total_count`. The first bracket starts at zero.
    ///
    /// # Errors
    /// [`DataLoadError::Empty`] if there are no rows or every count is zero.
    pub fn from_counts(rows: &[(f64, u64)]) -> Result<Self, DataLoadError> {
        let total: u64 = rows.iter().map(|&(_, count)| count).sum();
        if total == 0 {
            return Err(DataLoadError::Empty("binned distribution"));
        }

        let mut cumulative = 0.0;
        let bins = rows
            .iter()
            .map(|&(upper, count)| {
                cumulative += count as f64 / total as f64;
                CumulativeBin { cumulative, upper }
            })
            .collect();

        Ok(Self { floor: 0.0, bins })
    }

    /// Sets the lower edge of the first bracket.
    pub fn with_floor(mut self, floor: f64) -> Self {
        self.floor = floor;
        self
    }

    pub fn floor(&self) -> f64 {
        self.floor
    }

    pub fn bins(&self) -> &[CumulativeBin] {
        &self.bins
    }

    /// Upper edge of the last bin.
    pub fn max(&self) -> Option<f64> {
        self.bins.last().map(|bin| bin.upper)
    }
}

impl InverseCdf for BinnedDistribution {
    fn len(&self) -> usize {
        self.bins.len()
    }

    fn bracket(&self, u: f64) -> Result<(f64, f64), SamplingError> {
        let n = self.bins.len();
        let u = check_table(u, n)?;

        // Accumulated rounding can leave the final cumulative just under 1.0
        let i = self
            .bins
            .partition_point(|bin| bin.cumulative < u)
            .min(n - 1);

        let lower = if i == 0 {
            self.floor
        } else {
            self.bins[i - 1].upper
        };
        Ok((lower, self.bins[i].upper))
    }
}
