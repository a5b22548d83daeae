//! Inverse-CDF sampling over piecewise-linear empirical tables.
//!
//! Both table forms share the same two-step draw: a selector `u` picks a
//! bracket `[lower, upper]`, then an independent draw `t` interpolates
//! linearly inside it. Keeping both draws explicit makes every sample a pure
//! function of `(table, u, t)`.

use crate::error::{SamplingError, check_unit_draw};

/// A table that maps a uniform draw to a value bracket.
pub trait InverseCdf {
    /// Number of entries (raw values or bins) backing the table.
    fn len(&self) -> usize;

    /// Returns `true` if the table has no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The `[lower, upper]` bracket selected by `u`.
    ///
    /// Implementations clamp to the last valid bracket so that draws just
    /// below 1.0 never index past the end of the table.
    fn bracket(&self, u: f64) -> Result<(f64, f64), SamplingError>;

    /// Draws a value: `u` selects the bracket, `t` interpolates within it.
    ///
    /// # Errors
    /// [`SamplingError::DrawOutOfRange`] if either draw is outside [0, 1),
    /// [`SamplingError::TooFewEntries`] if the table has fewer than two entries.
    fn sample(&self, u: f64, t: f64) -> Result<f64, SamplingError> {
        let t = check_unit_draw(t)?;
        let (lower, upper) = self.bracket(u)?;
        Ok(lerp(lower, upper, t))
    }
}

/// Linear interpolation between `lower` and `upper` at fraction `t`.
pub fn lerp(lower: f64, upper: f64, t: f64) -> f64 {
    lower + (upper - lower) * t
}

/// Validates `u` and the table size shared by every bracket lookup.
pub(crate) fn check_table(u: f64, len: usize) -> Result<f64, SamplingError> {
    let u = check_unit_draw(u)?;
    if len < 2 {
        return Err(SamplingError::TooFewEntries { len });
    }
    Ok(u)
}
