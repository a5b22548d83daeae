//! Error taxonomy for the generation pipeline.
//!
//! Every failure is terminal for the system being generated: tables are loaded
//! once, draws are pure, so nothing here is worth retrying.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A reference table is missing, unreadable, or has no usable rows.
#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("failed to open reference table {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read reference table: {0}")]
    Io(#[from] io::Error),

    #[error("malformed catalog: {0}")]
    Csv(#[from] csv::Error),

    #[error("catalog is missing required column '{0}'")]
    MissingColumn(String),

    #[error("malformed table at line {line}: {reason}")]
    Malformed { line: usize, reason: String },

    #[error("{0} has no usable rows")]
    Empty(&'static str),
}

/// A draw or a distribution cannot be sampled.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SamplingError {
    #[error("uniform draw {draw} is outside [0, 1)")]
    DrawOutOfRange { draw: f64 },

    #[error("distribution has {len} entries, at least 2 are required")]
    TooFewEntries { len: usize },
}

/// A sampled mass falls outside every defined classification bucket.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClassificationError {
    #[error("stellar mass ratio {mass_ratio} is outside the O-M spectral range (0, 150)")]
    UnclassifiedStellarMass { mass_ratio: f64 },

    #[error("planet mass {earth_masses} M⊕ is outside every planet mass category")]
    PlanetMassOutOfRange { earth_masses: f64 },
}

/// Any failure raised while generating a star system.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error(transparent)]
    DataLoad(#[from] DataLoadError),

    #[error(transparent)]
    Sampling(#[from] SamplingError),

    #[error(transparent)]
    Classification(#[from] ClassificationError),

    #[error("invalid generator configuration: {0}")]
    InvalidConfig(String),
}

/// Checks that `draw` is a uniform variate in [0, 1).
pub fn check_unit_draw(draw: f64) -> Result<f64, SamplingError> {
    if (0.0..1.0).contains(&draw) {
        Ok(draw)
    } else {
        Err(SamplingError::DrawOutOfRange { draw })
    }
}
