//! Main sequence star generation from an empirical initial mass function.

pub mod generation;
pub mod sampling;
pub mod spectral;
pub mod star;


pub use generation::{
    generate_star, luminosity_ratio, main_sequence_star, radius_ratio, surface_temperature,
};
pub use sampling::{sample_mass_ratio, sample_mass_ratio_with};
pub use spectral::{SPECTRAL_MASS_LIMITS, SpectralType};
pub use star::Star;
