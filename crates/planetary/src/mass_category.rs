//! Broad planet mass categories
//!
//! Four bins with placeholder occurrence probabilities:
//!
//! | Category    | Mass Range (M⊕)      | Cumulative probability |
//! |-------------|----------------------|------------------------|
//! | SubEarth    | 0.00015 - 0.8        | 0.33                   |
//! | EarthLike   | 0.8 - 1.9            | 0.55                   |
//! | SuperEarth  | 1.9 - 10             | 0.77                   |
//! | Giant       | 10 - 13 MJ / 4       | 1.00                   |
//!
//! The lower bound is Ceres, the least massive body known to be in
//! hydrostatic equilibrium. The IAU caps planets at 13 Jupiter masses; only a
//! quarter of that is used so giants stay well clear of the brown dwarf regime.

use catalog::{ClassificationError, SamplingError, check_unit_draw, lerp};
use serde::{Deserialize, Serialize};
use units::JUPITER_MASS_EARTH;

/// Planet classification by mass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MassCategory {
    /// Below 0.8 M⊕ (Mercury, Mars)
    SubEarth,
    /// 0.8-1.9 M⊕ (Earth, Venus)
    EarthLike,
    /// 1.9-10 M⊕, no solar system analog
    SuperEarth,
    /// Above 10 M⊕, ice and gas giants alike
    Giant,
}

impl MassCategory {
    /// Smallest planet mass (Ceres) in Earth masses
    pub const MIN_EARTH_MASSES: f64 = 0.00015;

    pub const SUB_EARTH_MAX: f64 = 0.8;

    pub const EARTH_LIKE_MAX: f64 = 1.9;

    pub const SUPER_EARTH_MAX: f64 = 10.0;

    /// Largest planet mass in Earth masses: a quarter of 13 Jupiter masses
    pub const GIANT_MAX: f64 = 13.0 * JUPITER_MASS_EARTH / 4.0;

    /// All categories, lightest first.
    pub const ALL: [MassCategory; 4] = [
        MassCategory::SubEarth,
        MassCategory::EarthLike,
        MassCategory::SuperEarth,
        MassCategory::Giant,
    ];

    // TODO: these cumulative weights are placeholders; replace with
    // occurrence rates once the stellar host feeds into planet sampling.
    const CUMULATIVE_PROBABILITY: [(MassCategory, f64); 3] = [
        (MassCategory::SubEarth, 0.33),
        (MassCategory::EarthLike, 0.55),
        (MassCategory::SuperEarth, 0.77),
    ];

    /// Pick a category from a uniform roll in [0, 1).
    pub fn from_roll(roll: f64) -> Result<Self, SamplingError> {
        let roll = check_unit_draw(roll)?;
        Ok(Self::CUMULATIVE_PROBABILITY
            .iter()
            .find(|&&(_, cumulative)| roll < cumulative)
            .map_or(MassCategory::Giant, |&(category, _)| category))
    }

    /// Classify a planet by its mass in Earth masses.
    ///
    /// Bins are half-open `[min, max)` except the giant bin, which includes its cap.
    pub fn from_earth_masses(earth_masses: f64) -> Result<Self, ClassificationError> {
        match earth_masses {
            m if m < Self::MIN_EARTH_MASSES || m.is_nan() => {
                Err(ClassificationError::PlanetMassOutOfRange { earth_masses })
            }
            m if m < Self::SUB_EARTH_MAX => Ok(Self::SubEarth),
            m if m < Self::EARTH_LIKE_MAX => Ok(Self::EarthLike),
            m if m < Self::SUPER_EARTH_MAX => Ok(Self::SuperEarth),
            m if m <= Self::GIANT_MAX => Ok(Self::Giant),
            _ => Err(ClassificationError::PlanetMassOutOfRange { earth_masses }),
        }
    }

    /// Mass range of this category in Earth masses as `(lower, upper)`.
    pub fn earth_mass_bounds(&self) -> (f64, f64) {
        match self {
            Self::SubEarth => (Self::MIN_EARTH_MASSES, Self::SUB_EARTH_MAX),
            Self::EarthLike => (Self::SUB_EARTH_MAX, Self::EARTH_LIKE_MAX),
            Self::SuperEarth => (Self::EARTH_LIKE_MAX, Self::SUPER_EARTH_MAX),
            Self::Giant => (Self::SUPER_EARTH_MAX, Self::GIANT_MAX),
        }
    }

    /// Mass in Earth masses at fraction `t` of the way through this category's range.
    pub fn earth_masses_at(&self, t: f64) -> Result<f64, SamplingError> {
        let t = check_unit_draw(t)?;
        let (lower, upper) = self.earth_mass_bounds();
        Ok(lerp(lower, upper, t))
    }

    /// Human-readable name for the category
    pub fn name(&self) -> &'static str {
        match self {
            Self::SubEarth => "Sub-Earth",
            Self::EarthLike => "Earth-like",
            Self::SuperEarth => "Super-Earth",
            Self::Giant => "Giant",
        }
    }
}
