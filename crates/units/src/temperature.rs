use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::length::Length;
use crate::luminosity::Luminosity;

/// Stefan–Boltzmann constant σ in W·m⁻²·K⁻⁴
pub const STEFAN_BOLTZMANN: f64 = 5.670373e-8;

/// A physical temperature quantity using f64 precision.
///
/// Kelvin is the base unit, as is conventional for stellar photospheres.
///
/// # Examples
///
/// ```rust
/// use units::Temperature;
///
/// let photosphere = Temperature::from_kelvin(5772.0);
/// assert_eq!(photosphere.to_kelvin(), 5772.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Temperature(f64); // Base unit: Kelvin

impl Temperature {
    /// Creates a new `Temperature` from a value in Kelvin.
    pub fn from_kelvin(value: f64) -> Self {
        Self(value)
    }

    /// Effective temperature of a black body radiating `luminosity` from a sphere of `radius`.
    ///
    /// Inverts the Stefan–Boltzmann law `L = 4πR²σT⁴`:
    ///
    /// `T = (L / (4πσR²))^¼`
    ///
    /// Both inputs are converted to SI (watts and metres) first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use units::{Length, Luminosity, Temperature};
    ///
    /// let radius = Length::from_solar_radii(1.0);
    /// let sun = Temperature::effective(Luminosity::from_solar(1.0), radius);
    /// assert!((sun.to_kelvin() - 5772.0).abs() < 5.0);
    /// ```
    pub fn effective(luminosity: Luminosity, radius: Length) -> Self {
        let radius_m = radius.to_meters();
        let flux = luminosity.to_watts() / (4.0 * PI * STEFAN_BOLTZMANN * radius_m.powi(2));
        Self(flux.powf(0.25))
    }

    /// Returns the temperature value in Kelvin.
    pub fn to_kelvin(&self) -> f64 {
        self.0
    }
}
