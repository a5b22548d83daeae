//! Star system output types and the generation driver
//!
//! Ties the stellar and planetary generators together: a [`GeneratorConfig`]
//! and a seed go in, a [`World`] of [`StarSystem`]s comes out.

pub mod config;
pub mod generation;
pub mod metadata;
pub mod system;

pub use config::{ConfigError, GeneratorConfig};
pub use generation::{generate_star_system, generate_world, generate_world_named};
pub use metadata::WorldSeed;
pub use system::{StarSystem, World};

// Re-export generator types for convenience
pub use catalog::ImfFloor;
pub use planetary::{MassCategory, OrbitParams, OrbitSampling, Planet, PlanetCount};
pub use stellar::{SpectralType, Star};

#[cfg(test)]
mod config_test;
