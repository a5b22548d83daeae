//! Main sequence star generation.
//!
//! A star is fully determined by its mass: the spectral class comes from fixed
//! mass breakpoints, luminosity and radius from empirical power laws, and the
//! surface temperature from the Stefan–Boltzmann law.

use catalog::{BinnedDistribution, ClassificationError, GenerationError};
use log::debug;
use rand_chacha::ChaChaRng;
use units::{Length, Luminosity, Temperature};

use crate::sampling::sample_mass_ratio_with;
use crate::spectral::SpectralType;
use crate::star::Star;

/// Mass-luminosity segments as (upper mass limit, coefficient, exponent): L = b·M^a
///
/// See <https://en.wikipedia.org/wiki/Mass%E2%80%93luminosity_relation>
const LUMINOSITY_SEGMENTS: [(f64, f64, f64); 4] = [
    (0.43, 0.23, 2.3),
    (2.0, 1.0, 4.0),
    (20.0, 1.5, 3.5),
    (f64::INFINITY, 3200.0, 1.0),
];

/// Mass at which the mass-radius relation changes slope (M☉)
const RADIUS_BREAK_MASS: f64 = 1.66;

/// Generates a star from the IMF table.
///
/// `p` is the uniform draw that selects the stellar mass bin; the position
/// inside the bin comes from `rng`.
///
/// # Example
/// ```
/// use catalog::DistributionStore;
/// use rand::SeedableRng;
/// use rand_chacha::ChaChaRng;
/// use stellar::generate_star;
///
/// let store = DistributionStore::bundled().unwrap();
/// let mut rng = ChaChaRng::seed_from_u64(42);
/// let star = generate_star(&mut rng, &store.imf, 0.5).unwrap();
/// ```
pub fn generate_star(
    rng: &mut ChaChaRng,
    imf: &BinnedDistribution,
    p: f64,
) -> Result<Star, GenerationError> {
    let mass_ratio = sample_mass_ratio_with(rng, imf, p)?;
    let star = main_sequence_star(mass_ratio)?;

    debug!(
        "star: {:.3} M☉ type {} L={:.4} L☉ R={:.3} R☉ T={:.0} K",
        star.mass_ratio,
        star.spectral_type,
        star.luminosity_ratio,
        star.radius_ratio,
        star.surface_temperature.to_kelvin()
    );
    Ok(star)
}

/// Derives every stellar property from the mass in solar masses.
///
/// ```
/// use stellar::{SpectralType, main_sequence_star};
///
/// let sun = main_sequence_star(1.0).unwrap();
/// assert_eq!(sun.spectral_type, SpectralType::G);
/// assert_eq!(sun.luminosity_ratio, 1.0);
/// ```
pub fn main_sequence_star(mass_ratio: f64) -> Result<Star, ClassificationError> {
    let spectral_type = SpectralType::from_mass_ratio(mass_ratio)?;
    let luminosity_ratio = luminosity_ratio(mass_ratio);
    let radius_ratio = radius_ratio(mass_ratio);
    let surface_temperature = surface_temperature(
        Luminosity::from_solar(luminosity_ratio),
        Length::from_solar_radii(radius_ratio),
    );

    Ok(Star {
        mass_ratio,
        spectral_type,
        luminosity_ratio,
        radius_ratio,
        surface_temperature,
    })
}

/// Luminosity in L☉ for a main sequence mass in M☉.
pub fn luminosity_ratio(mass_ratio: f64) -> f64 {
    let (_, b, a) = LUMINOSITY_SEGMENTS
        .iter()
        .copied()
        .find(|&(limit, _, _)| mass_ratio < limit)
        .unwrap_or(LUMINOSITY_SEGMENTS[LUMINOSITY_SEGMENTS.len() - 1]);
    b * mass_ratio.powf(a)
}

/// Radius in R☉ for a main sequence mass in M☉.
///
/// From Demircan & Kahraman (1991): R = 1.06·M^0.945 below 1.66 M☉,
/// R = 1.33·M^0.555 above.
pub fn radius_ratio(mass_ratio: f64) -> f64 {
    if mass_ratio < RADIUS_BREAK_MASS {
        1.06 * mass_ratio.powf(0.945)
    } else {
        1.33 * mass_ratio.powf(0.555)
    }
}

/// Photospheric temperature from the Stefan–Boltzmann law.
pub fn surface_temperature(luminosity: Luminosity, radius: Length) -> Temperature {
    Temperature::effective(luminosity, radius)
}
