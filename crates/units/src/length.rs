use serde::{Deserialize, Serialize};

/// Astronomical unit in metres (IAU 2012 exact definition)
pub const AU_TO_M: f64 = 1.495978707e11;

/// Nominal solar radius in metres (6.957 × 10⁸ m)
pub const SOLAR_RADIUS_M: f64 = 6.957e8;

/// Solar radius in AU (~1/215)
pub const SOLAR_RADIUS_AU: f64 = SOLAR_RADIUS_M / AU_TO_M;

/// A physical length quantity using f64 precision.
///
/// The `Length` struct represents length values with astronomical units (AU) as the base unit.
/// This is the natural choice for stellar and planetary system calculations.
///
/// # Examples
///
/// ```rust
/// use units::Length;
///
/// let earth_orbit = Length::from_au(1.0);
/// let sun_radius = Length::from_solar_radii(1.0);
///
/// let orbit_in_m = earth_orbit.to_meters();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Length(f64); // Base unit: AU

impl Length {
    /// Creates a new `Length` from a value in astronomical units.
    pub fn from_au(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Length` from a value in solar radii.
    pub fn from_solar_radii(value: f64) -> Self {
        Self(value * SOLAR_RADIUS_AU)
    }

    /// Creates a new `Length` from a value in meters.
    pub fn from_meters(value: f64) -> Self {
        Self(value / AU_TO_M)
    }

    pub fn to_au(&self) -> f64 {
        self.0
    }

    pub fn to_solar_radii(&self) -> f64 {
        self.0 / SOLAR_RADIUS_AU
    }

    pub fn to_meters(&self) -> f64 {
        self.0 * AU_TO_M
    }
}
