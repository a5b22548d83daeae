//! Exoplanet catalog parsing.
//!
//! Reads an exoplanet.eu style CSV export and keeps, for each tracked column,
//! the sorted list of observed values. Rows are sparse: a planet with no
//! measured radius still contributes its mass, eccentricity and so on.

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::empirical::EmpiricalDistribution;
use crate::error::DataLoadError;

/// Catalog columns that feed orbital parameter sampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogField {
    /// Planet mass (Jupiter masses)
    Mass,
    /// Planet radius (Jupiter radii)
    Radius,
    /// Orbital eccentricity
    Eccentricity,
    /// Semi-major axis (AU)
    SemiMajorAxis,
    /// Orbital inclination (degrees)
    Inclination,
}

impl CatalogField {
    /// All tracked fields in output order.
    pub const ALL: [CatalogField; 5] = [
        CatalogField::Mass,
        CatalogField::Radius,
        CatalogField::Eccentricity,
        CatalogField::SemiMajorAxis,
        CatalogField::Inclination,
    ];

    /// CSV header name of the column.
    pub fn column(&self) -> &'static str {
        match self {
            CatalogField::Mass => "mass",
            CatalogField::Radius => "radius",
            CatalogField::Eccentricity => "eccentricity",
            CatalogField::SemiMajorAxis => "semi_major_axis",
            CatalogField::Inclination => "inclination",
        }
    }
}

impl fmt::Display for CatalogField {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.column())
    }
}

/// Per-field empirical distributions drawn from an exoplanet catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct ExoplanetCatalog {
    mass: EmpiricalDistribution,
    radius: EmpiricalDistribution,
    eccentricity: EmpiricalDistribution,
    semi_major_axis: EmpiricalDistribution,
    inclination: EmpiricalDistribution,
    row_count: usize,
}

impl ExoplanetCatalog {
    /// Distribution of observed values for `field`.
    pub fn field(&self, field: CatalogField) -> &EmpiricalDistribution {
        match field {
            CatalogField::Mass => &self.mass,
            CatalogField::Radius => &self.radius,
            CatalogField::Eccentricity => &self.eccentricity,
            CatalogField::SemiMajorAxis => &self.semi_major_axis,
            CatalogField::Inclination => &self.inclination,
        }
    }

    /// Number of catalog rows read, including rows with blank fields.
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Parses a CSV catalog with a header row.
    ///
    /// Blank cells are skipped. Cells that are not numbers are skipped with a warning.
    ///
    /// # Errors
    /// [`DataLoadError::MissingColumn`] if a tracked column is absent,
    /// [`DataLoadError::Csv`] for unreadable CSV, [`DataLoadError::Empty`] for no rows.
    pub fn from_reader(reader: impl Read) -> Result<Self, DataLoadError> {
        let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
        let headers = reader.headers()?.clone();

        let mut columns = [0usize; 5];
        for (slot, field) in columns.iter_mut().zip(CatalogField::ALL) {
            *slot = headers
                .iter()
                .position(|header| header.trim() == field.column())
                .ok_or_else(|| DataLoadError::MissingColumn(field.column().to_string()))?;
        }

        let mut observed: [Vec<f64>; 5] = Default::default();
        let mut row_count = 0;

        for (row_no, record) in reader.records().enumerate() {
            let record = record?;
            row_count += 1;

            let cells = observed.iter_mut().zip(&columns).zip(CatalogField::ALL);
            for ((values, &column), field) in cells {
                let cell = record.get(column).unwrap_or("").trim();
                if cell.is_empty() {
                    continue;
                }
                match cell.parse::<f64>() {
                    Ok(value) => values.push(value),
                    Err(_) => {
                        warn!("catalog row {}: {} '{}' is not a number", row_no + 1, field, cell)
                    }
                }
            }
        }

        if row_count == 0 {
            return Err(DataLoadError::Empty("exoplanet catalog"));
        }

        let [mass, radius, eccentricity, semi_major_axis, inclination] =
            observed.map(EmpiricalDistribution::from_values);

        let catalog = Self {
            mass,
            radius,
            eccentricity,
            semi_major_axis,
            inclination,
            row_count,
        };

        info!(
            "exoplanet catalog: {} rows ({})",
            row_count,
            CatalogField::ALL
                .iter()
                .map(|&field| format!("{}={}", field, catalog.field(field).values().len()))
                .collect::<Vec<_>>()
                .join(", ")
        );
        Ok(catalog)
    }

    /// Loads a CSV catalog from disk.
    pub fn from_path(path: &Path) -> Result<Self, DataLoadError> {
        let file = File::open(path).map_err(|source| DataLoadError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(file)
    }
}
