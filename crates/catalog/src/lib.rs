//! Empirical reference tables and inverse-CDF sampling
//!
//! Provides the building blocks shared by star and planet generation:
//! - Error taxonomy for the whole pipeline
//! - Raw-value and binned empirical distributions with clamped inverse-CDF lookup
//! - Parsers for IMF tables and exoplanet catalogs
//! - [`DistributionStore`], the immutable bundle of tables handed to generators

pub mod binned;
pub mod empirical;
pub mod error;
pub mod exoplanets;
pub mod imf;
pub mod inverse_cdf;
pub mod store;

#[cfg(test)]
mod empirical_test;
#[cfg(test)]
mod imf_test;
#[cfg(test)]
mod store_test;

pub use binned::{BinnedDistribution, CumulativeBin};
pub use empirical::EmpiricalDistribution;
pub use error::{
    ClassificationError, DataLoadError, GenerationError, SamplingError, check_unit_draw,
};
pub use exoplanets::{CatalogField, ExoplanetCatalog};
pub use imf::{
    ImfFloor, ImfRow, imf_distribution, imf_lower_limit, load_imf_table, parse_imf_rows,
    read_imf_table,
};
pub use inverse_cdf::{InverseCdf, lerp};
pub use store::DistributionStore;
