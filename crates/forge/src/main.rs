//! Generate star systems and print them as JSON
//!
//! Usage:
//! ```text
//! cargo run -p forge -- --seed 42 --systems 10 --multi-planet
//! cargo run -p forge -- --name "Cygnus Prime" --compact
//! ```
//!
//! Logs go to stderr; set `RUST_LOG=info` (or `debug`) to see them.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use star_system::{
    GeneratorConfig, ImfFloor, OrbitSampling, PlanetCount, WorldSeed, generate_world,
    generate_world_named,
};

/// Command line arguments for star system generation
#[derive(Parser, Debug)]
#[command(
    name = "forge",
    about = "Procedurally generates star systems from empirical stellar and exoplanet tables",
    long_about = None
)]
struct Args {
    /// RNG seed (random if omitted)
    #[arg(short, long, conflicts_with = "name")]
    seed: Option<u64>,

    /// Seed the world from a name instead of a number
    #[arg(short, long)]
    name: Option<String>,

    /// Number of star systems to generate
    #[arg(long)]
    systems: Option<usize>,

    /// JSON generator config; flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// IMF table to use instead of the bundled one
    #[arg(long)]
    imf_table: Option<PathBuf>,

    /// Start the lightest IMF bracket at the table's lowest mass limit instead of zero
    #[arg(long)]
    imf_table_floor: bool,

    /// Exoplanet catalog CSV to use instead of the bundled one
    #[arg(long)]
    exoplanet_catalog: Option<PathBuf>,

    /// Draw each orbital parameter at its own percentile
    #[arg(long)]
    independent_orbits: bool,

    /// Generate a variable number of planets per system
    #[arg(long)]
    multi_planet: bool,

    /// Print single-line JSON
    #[arg(long)]
    compact: bool,
}

impl Args {
    /// Loads the config file, if any, and applies the flag overrides.
    fn generator_config(&self) -> Result<GeneratorConfig> {
        let mut config = match &self.config {
            Some(path) => GeneratorConfig::from_path(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => GeneratorConfig::default(),
        };

        if let Some(systems) = self.systems {
            config.system_count = systems;
        }
        if let Some(path) = &self.imf_table {
            config.imf_table = Some(path.clone());
        }
        if self.imf_table_floor {
            config.imf_floor = ImfFloor::LowestBin;
        }
        if let Some(path) = &self.exoplanet_catalog {
            config.exoplanet_catalog = Some(path.clone());
        }
        if self.independent_orbits {
            config.orbit_sampling = OrbitSampling::Independent;
        }
        if self.multi_planet {
            config.planet_count = PlanetCount::bernoulli();
        }

        Ok(config)
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = args.generator_config()?;
    let store = config
        .distribution_store()
        .context("loading reference tables")?;

    let world = match &args.name {
        Some(name) => generate_world_named(name, &store, &config)?,
        None => {
            let seed = args.seed.unwrap_or_else(rand::random);
            info!("seed {} ({})", seed, WorldSeed::from_u64(seed).catalog_name());
            generate_world(seed, &store, &config)?
        }
    };

    let json = if args.compact {
        serde_json::to_string(&world)?
    } else {
        serde_json::to_string_pretty(&world)?
    };
    println!("{json}");

    Ok(())
}
