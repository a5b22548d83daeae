use serde::{Deserialize, Serialize};

/// Mass of the Sun in kilograms (1.98855 × 10³⁰ kg)
pub const SOLAR_MASS_KG: f64 = 1.98855e30;

/// Mass of the Earth in kilograms (5.97237 × 10²⁴ kg)
pub const EARTH_MASS_KG: f64 = 5.97237e24;

/// Mass of Jupiter in kilograms (1.8982 × 10²⁷ kg)
pub const JUPITER_MASS_KG: f64 = 1.8982e27;

/// Jupiter mass expressed in Earth masses (~317.83)
pub const JUPITER_MASS_EARTH: f64 = JUPITER_MASS_KG / EARTH_MASS_KG;

/// A physical mass quantity using f64 precision.
///
/// The `Mass` struct represents mass values with solar masses as the base unit.
/// Stars are naturally described in solar masses and planets in Earth or Jupiter
/// masses; all conversions go through the SI kilogram constants above.
///
/// # Examples
///
/// ```rust
/// use units::Mass;
///
/// let sun = Mass::from_solar_masses(1.0);
/// let earth = Mass::from_earth_masses(1.0);
///
/// let earth_in_solar = earth.to_solar_masses();
/// let sun_in_kg = sun.to_kg();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Mass(f64); // Base unit: Solar Masses

impl Mass {
    /// Creates a new `Mass` from a value in solar masses.
    ///
    /// This is the most direct constructor since solar masses are the base unit.
    pub fn from_solar_masses(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Mass` from a value in Earth masses.
    ///
    /// One solar mass is approximately 332,958 Earth masses.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use units::Mass;
    ///
    /// let super_earth = Mass::from_earth_masses(5.0);
    /// assert!((super_earth.to_earth_masses() - 5.0).abs() < 1e-9);
    /// ```
    pub fn from_earth_masses(value: f64) -> Self {
        Self(value * EARTH_MASS_KG / SOLAR_MASS_KG)
    }

    /// Creates a new `Mass` from a value in Jupiter masses.
    pub fn from_jupiter_masses(value: f64) -> Self {
        Self(value * JUPITER_MASS_KG / SOLAR_MASS_KG)
    }

    /// Creates a new `Mass` from a value in kilograms.
    pub fn from_kg(value: f64) -> Self {
        Self(value / SOLAR_MASS_KG)
    }

    /// Returns the mass value in solar masses.
    pub fn to_solar_masses(&self) -> f64 {
        self.0
    }

    /// Converts the mass to Earth masses.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use units::Mass;
    ///
    /// let jupiter = Mass::from_jupiter_masses(1.0);
    /// let earth_masses = jupiter.to_earth_masses(); // ~317.8
    /// ```
    pub fn to_earth_masses(&self) -> f64 {
        self.0 * SOLAR_MASS_KG / EARTH_MASS_KG
    }

    /// Converts the mass to Jupiter masses.
    pub fn to_jupiter_masses(&self) -> f64 {
        self.0 * SOLAR_MASS_KG / JUPITER_MASS_KG
    }

    /// Converts the mass to kilograms.
    pub fn to_kg(&self) -> f64 {
        self.0 * SOLAR_MASS_KG
    }
}
