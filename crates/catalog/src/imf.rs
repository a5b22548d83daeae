//! Initial mass function tables.
//!
//! The table format follows the GalIMF optimally-sampled output: three header
//! lines, then one row per mass bin with five whitespace-separated columns
//!
//! ```text
//! center  width  upper_limit  lower_limit  star_count
//! ```
//!
//! Masses are in solar masses.
//!
//! Sampling uses each row's upper limit and star count. By default the first
//! bracket starts at zero; [`ImfFloor::LowestBin`] starts it at the smallest
//! lower limit in the table instead.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::binned::BinnedDistribution;
use crate::error::DataLoadError;

/// Number of leading lines that carry no bin data
pub const IMF_HEADER_LINES: usize = 3;

const IMF_COLUMNS: usize = 5;

/// Where the first mass bracket of an IMF table starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImfFloor {
    /// The first bracket runs from zero to the first bin's upper limit
    #[default]
    Zero,
    /// The first bracket starts at the table's lowest lower limit
    LowestBin,
}

/// One parsed mass bin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImfRow {
    pub center: f64,
    pub width: f64,
    pub upper: f64,
    pub lower: f64,
    pub star_count: u64,
}

/// Parses an IMF table into its rows, skipping the header lines and blank lines.
///
/// # Errors
/// [`DataLoadError::Malformed`] for rows without five numeric fields,
/// [`DataLoadError::Empty`] if no data rows remain.
pub fn parse_imf_rows(reader: impl BufRead) -> Result<Vec<ImfRow>, DataLoadError> {
    let mut rows = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if index < IMF_HEADER_LINES || line.trim().is_empty() {
            continue;
        }
        rows.push(parse_row(&line, index + 1)?);
    }

    if rows.is_empty() {
        return Err(DataLoadError::Empty("IMF table"));
    }
    Ok(rows)
}

fn parse_row(line: &str, line_no: usize) -> Result<ImfRow, DataLoadError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != IMF_COLUMNS {
        return Err(DataLoadError::Malformed {
            line: line_no,
            reason: format!("expected {IMF_COLUMNS} columns, found {}", fields.len()),
        });
    }

    let number = |i: usize| {
        fields[i].parse::<f64>().map_err(|_| DataLoadError::Malformed {
            line: line_no,
            reason: format!("'{}' is not a number", fields[i]),
        })
    };
    let star_count = fields[4]
        .parse::<u64>()
        .map_err(|_| DataLoadError::Malformed {
            line: line_no,
            reason: format!("'{}' is not a star count", fields[4]),
        })?;

    Ok(ImfRow {
        center: number(0)?,
        width: number(1)?,
        upper: number(2)?,
        lower: number(3)?,
        star_count,
    })
}

/// Smallest lower limit over all rows.
pub fn imf_lower_limit(rows: &[ImfRow]) -> Option<f64> {
    rows.iter().map(|row| row.lower).min_by(f64::total_cmp)
}

/// Builds the stellar mass CDF from parsed IMF rows.
pub fn imf_distribution(
    rows: &[ImfRow],
    floor: ImfFloor,
) -> Result<BinnedDistribution, DataLoadError> {
    let counts: Vec<(f64, u64)> = rows.iter().map(|row| (row.upper, row.star_count)).collect();
    let floor = match floor {
        ImfFloor::Zero => 0.0,
        ImfFloor::LowestBin => imf_lower_limit(rows).unwrap_or(0.0),
    };
    let distribution = BinnedDistribution::from_counts(&counts)?.with_floor(floor);

    info!(
        "IMF table: {} bins, {} stars, {:.3}-{:.1} M☉",
        rows.len(),
        rows.iter().map(|row| row.star_count).sum::<u64>(),
        floor,
        distribution.max().unwrap_or(floor),
    );
    Ok(distribution)
}

/// Parses an IMF table from any buffered reader.
pub fn read_imf_table(
    reader: impl BufRead,
    floor: ImfFloor,
) -> Result<BinnedDistribution, DataLoadError> {
    imf_distribution(&parse_imf_rows(reader)?, floor)
}

/// Loads an IMF table from disk.
pub fn load_imf_table(path: &Path, floor: ImfFloor) -> Result<BinnedDistribution, DataLoadError> {
    let file = File::open(path).map_err(|source| DataLoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    read_imf_table(BufReader::new(file), floor)
}
