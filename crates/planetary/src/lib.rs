//! Planet generation
//!
//! This crate classifies planets into broad mass categories, samples their
//! orbital parameters from an exoplanet catalog, and assembles planets for a
//! host star.

pub mod generation;
pub mod mass_category;
pub mod orbit;
pub mod planet;

pub use generation::{
    PLANET_CONTINUE_PROBABILITY, PLANET_MAX_COUNT, PlanetCount, generate_planet, generate_planets,
};
pub use mass_category::MassCategory;
pub use orbit::{OrbitParams, OrbitSampling, orbit_from_draws, sample_orbit};
pub use planet::Planet;
