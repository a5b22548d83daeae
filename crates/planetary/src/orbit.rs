//! Orbital parameter sampling from an exoplanet catalog
//!
//! Each parameter is drawn from its own empirical distribution. In the default
//! coupled mode one percentile is shared by all five parameters of a planet, so
//! a planet in the 90th mass percentile also sits in the 90th eccentricity
//! percentile. The independent mode gives each parameter its own percentile.
//! In both modes every parameter gets its own interpolation draw.

use catalog::{CatalogField, ExoplanetCatalog, InverseCdf, SamplingError};
use rand::Rng;
use rand_chacha::ChaChaRng;
use serde::{Deserialize, Serialize};

/// How percentiles are shared between a planet's orbital parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrbitSampling {
    /// One percentile draw per planet, shared by every parameter
    #[default]
    Coupled,
    /// A fresh percentile draw per parameter
    Independent,
}

/// Orbital and physical parameters sampled from the catalog, in catalog units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitParams {
    /// Catalog mass (Jupiter masses)
    pub mass: f64,
    /// Catalog radius (Jupiter radii)
    pub radius: f64,
    pub eccentricity: f64,
    /// Semi-major axis (AU)
    pub semi_major_axis: f64,
    /// Inclination (degrees)
    pub inclination: f64,
}

impl OrbitParams {
    /// Value of a single parameter.
    pub fn get(&self, field: CatalogField) -> f64 {
        match field {
            CatalogField::Mass => self.mass,
            CatalogField::Radius => self.radius,
            CatalogField::Eccentricity => self.eccentricity,
            CatalogField::SemiMajorAxis => self.semi_major_axis,
            CatalogField::Inclination => self.inclination,
        }
    }
}

/// Builds orbit parameters from explicit draws, one per field in [`CatalogField::ALL`] order.
///
/// `selectors` pick each parameter's bracket and `interpolations` place the
/// value inside it.
pub fn orbit_from_draws(
    catalog: &ExoplanetCatalog,
    selectors: [f64; 5],
    interpolations: [f64; 5],
) -> Result<OrbitParams, SamplingError> {
    let mut values = [0.0; 5];
    for (i, field) in CatalogField::ALL.into_iter().enumerate() {
        values[i] = catalog.field(field).sample(selectors[i], interpolations[i])?;
    }

    let [mass, radius, eccentricity, semi_major_axis, inclination] = values;
    Ok(OrbitParams {
        mass,
        radius,
        eccentricity,
        semi_major_axis,
        inclination,
    })
}

/// Sample a planet's orbital parameters.
pub fn sample_orbit(
    rng: &mut ChaChaRng,
    catalog: &ExoplanetCatalog,
    mode: OrbitSampling,
) -> Result<OrbitParams, SamplingError> {
    let selectors = match mode {
        OrbitSampling::Coupled => [rng.random::<f64>(); 5],
        OrbitSampling::Independent => std::array::from_fn(|_| rng.random::<f64>()),
    };
    let interpolations: [f64; 5] = std::array::from_fn(|_| rng.random::<f64>());

    orbit_from_draws(catalog, selectors, interpolations)
}
