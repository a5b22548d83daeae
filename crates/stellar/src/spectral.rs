use std::fmt;

use catalog::ClassificationError;
use serde::{Deserialize, Serialize};

/// Harvard spectral class of a main sequence star.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SpectralType {
    O,
    B,
    A,
    F,
    G,
    K,
    M,
}

/// Exclusive upper mass limit (M☉) of each class, ascending.
///
/// Breakpoints from the worldbuilding mass/class table:
/// M < 0.50 ≤ K < 0.80 ≤ G < 1.04 ≤ F < 1.4 ≤ A < 2.1 ≤ B < 16 ≤ O < 150
pub const SPECTRAL_MASS_LIMITS: [(SpectralType, f64); 7] = [
    (SpectralType::M, 0.50),
    (SpectralType::K, 0.80),
    (SpectralType::G, 1.04),
    (SpectralType::F, 1.4),
    (SpectralType::A, 2.1),
    (SpectralType::B, 16.0),
    (SpectralType::O, 150.0),
];

impl SpectralType {
    /// Classify a main sequence star by its mass in solar masses.
    ///
    /// # Errors
    /// [`ClassificationError::UnclassifiedStellarMass`] for masses at or above
    /// 150 M☉, and for non-positive or non-finite masses.
    pub fn from_mass_ratio(mass_ratio: f64) -> Result<Self, ClassificationError> {
        if !mass_ratio.is_finite() || mass_ratio <= 0.0 {
            return Err(ClassificationError::UnclassifiedStellarMass { mass_ratio });
        }

        SPECTRAL_MASS_LIMITS
            .iter()
            .find(|&&(_, limit)| mass_ratio < limit)
            .map(|&(spectral_type, _)| spectral_type)
            .ok_or(ClassificationError::UnclassifiedStellarMass { mass_ratio })
    }
}

impl fmt::Display for SpectralType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let str = match self {
            SpectralType::O => "O",
            SpectralType::B => "B",
            SpectralType::A => "A",
            SpectralType::F => "F",
            SpectralType::G => "G",
            SpectralType::K => "K",
            SpectralType::M => "M",
        };
        write!(f, "{}", str)
    }
}
