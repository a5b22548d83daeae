use serde::{Deserialize, Serialize};

/// Nominal solar luminosity in watts (3.828 × 10²⁶ W)
pub const SOLAR_LUMINOSITY_W: f64 = 3.828e26;

/// Radiated power with solar luminosities (L☉) as the base unit.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Luminosity(f64); // Base unit: Solar Luminosities

impl Luminosity {
    /// Creates a new `Luminosity` from a value in solar luminosities.
    pub fn from_solar(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Luminosity` from a value in watts.
    pub fn from_watts(value: f64) -> Self {
        Self(value / SOLAR_LUMINOSITY_W)
    }

    /// Returns the luminosity in solar luminosities.
    pub fn to_solar(&self) -> f64 {
        self.0
    }

    /// Converts the luminosity to watts.
    pub fn to_watts(&self) -> f64 {
        self.0 * SOLAR_LUMINOSITY_W
    }
}
