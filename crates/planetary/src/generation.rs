//! Planet generation pipeline
//!
//! For each planet: roll a mass category, place the mass uniformly inside the
//! category, then sample orbital parameters from the exoplanet catalog. The
//! host star is threaded through but does not yet shape any distribution.

use catalog::{ExoplanetCatalog, GenerationError};
use log::debug;
use rand::Rng;
use rand_chacha::ChaChaRng;
use serde::{Deserialize, Serialize};
use stellar::Star;

use crate::mass_category::MassCategory;
use crate::orbit::{OrbitSampling, sample_orbit};
use crate::planet::Planet;

/// Chance of adding one more planet in multi-planet mode
pub const PLANET_CONTINUE_PROBABILITY: f64 = 0.85;

/// Planet cap in multi-planet mode
pub const PLANET_MAX_COUNT: usize = 12;

/// How many planets a system receives
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanetCount {
    /// Exactly one planet per system
    #[default]
    Single,
    /// One planet, then repeated Bernoulli trials for each additional planet
    Bernoulli {
        continue_probability: f64,
        max_planets: usize,
    },
}

impl PlanetCount {
    /// Multi-planet mode with the standard 85% continuation chance and 12-planet cap
    pub fn bernoulli() -> Self {
        Self::Bernoulli {
            continue_probability: PLANET_CONTINUE_PROBABILITY,
            max_planets: PLANET_MAX_COUNT,
        }
    }

    /// Number of planets to generate; always at least one.
    pub fn sample(&self, rng: &mut ChaChaRng) -> usize {
        match *self {
            Self::Single => 1,
            Self::Bernoulli {
                continue_probability,
                max_planets,
            } => {
                let mut count = 1;
                while count < max_planets && rng.random::<f64>() < continue_probability {
                    count += 1;
                }
                count
            }
        }
    }
}

/// Generate a single planet around `star`.
pub fn generate_planet(
    rng: &mut ChaChaRng,
    star: &Star,
    catalog: &ExoplanetCatalog,
    orbit_sampling: OrbitSampling,
) -> Result<Planet, GenerationError> {
    let mass_category = MassCategory::from_roll(rng.random())?;
    let mass_earth_units = mass_category.earth_masses_at(rng.random())?;
    let orbit = sample_orbit(rng, catalog, orbit_sampling)?;

    let planet = Planet {
        mass_category,
        mass_earth_units,
        orbit,
    };

    debug!(
        "planet around {} star: {} {:.4} M⊕, a={:.3} AU e={:.3}",
        star.spectral_type,
        mass_category.name(),
        planet.mass_earth_units,
        orbit.semi_major_axis,
        orbit.eccentricity
    );
    Ok(planet)
}

/// Generate the planets of a system, in generation order.
pub fn generate_planets(
    rng: &mut ChaChaRng,
    star: &Star,
    catalog: &ExoplanetCatalog,
    count: PlanetCount,
    orbit_sampling: OrbitSampling,
) -> Result<Vec<Planet>, GenerationError> {
    let n = count.sample(rng);
    (0..n)
        .map(|_| generate_planet(rng, star, catalog, orbit_sampling))
        .collect()
}
