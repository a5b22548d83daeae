//! Seeded generation driver
//!
//! A world is one ChaCha stream: every system draws from it in order, so a
//! seed and a config fully determine the output.

use catalog::{DistributionStore, GenerationError};
use log::info;
use planetary::generate_planets;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;
use stellar::generate_star;

use crate::config::GeneratorConfig;
use crate::metadata::WorldSeed;
use crate::system::{StarSystem, World};

/// Generate one star and its planets.
pub fn generate_star_system(
    rng: &mut ChaChaRng,
    store: &DistributionStore,
    config: &GeneratorConfig,
) -> Result<StarSystem, GenerationError> {
    let p = rng.random();
    let star = generate_star(rng, &store.imf, p)?;
    let planets = generate_planets(
        rng,
        &star,
        &store.exoplanets,
        config.planet_count,
        config.orbit_sampling,
    )?;

    Ok(StarSystem { star, planets })
}

/// Generate `config.system_count` systems from `seed`.
///
/// The config is validated first. Any failure aborts the whole world.
///
/// # Example
/// ```
/// use catalog::DistributionStore;
/// use star_system::{GeneratorConfig, generate_world};
///
/// let store = DistributionStore::bundled().unwrap();
/// let world = generate_world(42, store, &GeneratorConfig::default()).unwrap();
/// assert_eq!(world.star_systems.len(), 1);
/// ```
pub fn generate_world(
    seed: u64,
    store: &DistributionStore,
    config: &GeneratorConfig,
) -> Result<World, GenerationError> {
    config.validate()?;

    let mut rng = ChaChaRng::seed_from_u64(seed);
    let star_systems = (0..config.system_count)
        .map(|_| generate_star_system(&mut rng, store, config))
        .collect::<Result<Vec<_>, _>>()?;

    let world = World::new(star_systems);
    info!(
        "generated {} star systems with {} planets (seed {})",
        world.len(),
        world.planet_count(),
        seed
    );
    Ok(world)
}

/// Generate a world seeded from a human-readable name.
pub fn generate_world_named(
    name: &str,
    store: &DistributionStore,
    config: &GeneratorConfig,
) -> Result<World, GenerationError> {
    let world_seed = WorldSeed::from_name(name);
    info!("world '{}' is {}", name, world_seed.catalog_name());
    generate_world(world_seed.seed(), store, config)
}
