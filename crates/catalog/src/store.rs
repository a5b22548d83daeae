//! The immutable set of reference distributions shared by the generators.

use std::io::{BufRead, Read};
use std::path::Path;

use once_cell::sync::OnceCell;

use crate::binned::BinnedDistribution;
use crate::error::DataLoadError;
use crate::exoplanets::ExoplanetCatalog;
use crate::imf::{ImfFloor, load_imf_table, read_imf_table};

/// Galaxy-wide IMF table compiled into the crate
pub const BUNDLED_IMF_TABLE: &str = include_str!("../data/galimf_osgimf.txt");

/// Exoplanet catalog excerpt compiled into the crate
pub const BUNDLED_EXOPLANET_CATALOG: &str = include_str!("../data/exoplanet_eu_catalog.csv");

static BUNDLED: OnceCell<DistributionStore> = OnceCell::new();

/// Reference distributions for one generation run.
///
/// Built once, then passed by reference to every generator. Nothing mutates
/// it after construction, so a single store can back any number of systems
/// and threads.
#[derive(Debug, Clone, PartialEq)]
pub struct DistributionStore {
    /// Stellar mass CDF (solar masses)
    pub imf: BinnedDistribution,
    /// Observed planet parameters
    pub exoplanets: ExoplanetCatalog,
}

impl DistributionStore {
    pub fn new(imf: BinnedDistribution, exoplanets: ExoplanetCatalog) -> Self {
        Self { imf, exoplanets }
    }

    /// Parses both tables from readers. The IMF's first bracket starts at zero.
    pub fn from_readers(imf: impl BufRead, exoplanets: impl Read) -> Result<Self, DataLoadError> {
        Ok(Self::new(
            read_imf_table(imf, ImfFloor::Zero)?,
            ExoplanetCatalog::from_reader(exoplanets)?,
        ))
    }

    /// Loads both tables from disk. The IMF's first bracket starts at zero.
    pub fn from_paths(imf: &Path, exoplanets: &Path) -> Result<Self, DataLoadError> {
        Ok(Self::new(
            load_imf_table(imf, ImfFloor::Zero)?,
            ExoplanetCatalog::from_path(exoplanets)?,
        ))
    }

    /// The process-wide store built from the bundled tables.
    ///
    /// Parsed on first call and cached for the life of the process. A failed
    /// parse is returned to the caller and not cached.
    pub fn bundled() -> Result<&'static DistributionStore, DataLoadError> {
        BUNDLED.get_or_try_init(|| {
            Self::from_readers(
                BUNDLED_IMF_TABLE.as_bytes(),
                BUNDLED_EXOPLANET_CATALOG.as_bytes(),
            )
        })
    }
}
