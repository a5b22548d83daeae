//! Star data type.
//!
//! A DTO for serialization to JSON: ratios are relative to the Sun, and the
//! typed accessors convert back to physical quantities.

use serde::{Deserialize, Serialize};
use units::{Length, Luminosity, Mass, Temperature};

use crate::spectral::SpectralType;

/// Main sequence star: core hydrogen burning, the only stellar kind generated.
///
/// # Physical Ranges
/// * mass_ratio: IMF table range, at most 150 M☉
/// * surface_temperature: ~2,000K (late M) to ~50,000K (O)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Star {
    /// Mass in solar masses (M☉)
    pub mass_ratio: f64,
    pub spectral_type: SpectralType,
    /// Luminosity in solar luminosities (L☉)
    pub luminosity_ratio: f64,
    /// Radius in solar radii (R☉)
    pub radius_ratio: f64,
    /// Effective temperature of the photosphere
    pub surface_temperature: Temperature,
}

impl Star {
    pub fn mass(&self) -> Mass {
        Mass::from_solar_masses(self.mass_ratio)
    }

    pub fn luminosity(&self) -> Luminosity {
        Luminosity::from_solar(self.luminosity_ratio)
    }

    pub fn radius(&self) -> Length {
        Length::from_solar_radii(self.radius_ratio)
    }
}
