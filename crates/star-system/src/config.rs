//! Generator configuration.
//!
//! Every field has a default, so a config file only names what it changes:
//!
//! ```json
//! {
//!   "system_count": 10,
//!   "orbit_sampling": "independent",
//!   "planet_count": { "bernoulli": { "continue_probability": 0.85, "max_planets": 12 } }
//! }
//! ```

use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use catalog::store::BUNDLED_IMF_TABLE;
use catalog::{
    DataLoadError, DistributionStore, ExoplanetCatalog, GenerationError, ImfFloor, load_imf_table,
    read_imf_table,
};
use log::info;
use planetary::{OrbitSampling, PLANET_MAX_COUNT, PlanetCount};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A config file could not be read or parsed.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Number of star systems in the world
    pub system_count: usize,
    pub orbit_sampling: OrbitSampling,
    pub planet_count: PlanetCount,
    /// IMF table to load instead of the bundled one
    pub imf_table: Option<PathBuf>,
    /// Where the lightest IMF bracket starts
    pub imf_floor: ImfFloor,
    /// Exoplanet catalog to load instead of the bundled one
    pub exoplanet_catalog: Option<PathBuf>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            system_count: 1,
            orbit_sampling: OrbitSampling::default(),
            planet_count: PlanetCount::default(),
            imf_table: None,
            imf_floor: ImfFloor::default(),
            exoplanet_catalog: None,
        }
    }
}

impl GeneratorConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Checks the values serde cannot.
    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.system_count == 0 {
            return Err(GenerationError::InvalidConfig(
                "system_count must be at least 1".to_string(),
            ));
        }

        if let PlanetCount::Bernoulli {
            continue_probability,
            max_planets,
        } = self.planet_count
        {
            if !(0.0..=1.0).contains(&continue_probability) {
                return Err(GenerationError::InvalidConfig(format!(
                    "continue_probability {continue_probability} is outside [0, 1]"
                )));
            }
            if !(1..=PLANET_MAX_COUNT).contains(&max_planets) {
                return Err(GenerationError::InvalidConfig(format!(
                    "max_planets {max_planets} is outside 1..={PLANET_MAX_COUNT}"
                )));
            }
        }

        Ok(())
    }

    /// The reference tables this config asks for.
    ///
    /// Tables without a configured path come from the bundled store, which is
    /// borrowed when nothing differs from it.
    pub fn distribution_store(&self) -> Result<Cow<'static, DistributionStore>, DataLoadError> {
        let bundled = DistributionStore::bundled()?;
        let bundled_imf = self.imf_table.is_none() && self.imf_floor == ImfFloor::Zero;
        if bundled_imf && self.exoplanet_catalog.is_none() {
            return Ok(Cow::Borrowed(bundled));
        }

        let imf = match &self.imf_table {
            Some(path) => {
                info!("loading IMF table from {}", path.display());
                load_imf_table(path, self.imf_floor)?
            }
            None if bundled_imf => bundled.imf.clone(),
            None => read_imf_table(BUNDLED_IMF_TABLE.as_bytes(), self.imf_floor)?,
        };
        let exoplanets = match &self.exoplanet_catalog {
            Some(path) => {
                info!("loading exoplanet catalog from {}", path.display());
                ExoplanetCatalog::from_path(path)?
            }
            None => bundled.exoplanets.clone(),
        };

        Ok(Cow::Owned(DistributionStore::new(imf, exoplanets)))
    }
}
