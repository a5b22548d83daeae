use catalog::{BinnedDistribution, InverseCdf, SamplingError};
use rand::Rng;
use rand_chacha::ChaChaRng;

/// Sample a stellar mass in solar masses from a binned IMF table.
///
/// `p` picks the mass bin through the table's cumulative star counts and
/// `t` places the mass linearly inside that bin.
///
/// # Example
/// ```
/// use catalog::DistributionStore;
/// use stellar::sampling::sample_mass_ratio;
///
/// let store = DistributionStore::bundled().unwrap();
/// let mass = sample_mass_ratio(&store.imf, 0.5, 0.5).unwrap();
/// assert!(mass > 0.08 && mass < 0.5);
/// ```
pub fn sample_mass_ratio(imf: &BinnedDistribution, p: f64, t: f64) -> Result<f64, SamplingError> {
    imf.sample(p, t)
}

/// Sample a stellar mass, drawing the in-bin position from `rng`.
pub fn sample_mass_ratio_with(
    rng: &mut ChaChaRng,
    imf: &BinnedDistribution,
    p: f64,
) -> Result<f64, SamplingError> {
    sample_mass_ratio(imf, p, rng.random())
}
