pub mod length;
pub mod luminosity;
pub mod mass;
pub mod temperature;

#[cfg(test)]
mod mass_test;

pub use length::Length;
pub use luminosity::Luminosity;
pub use mass::{EARTH_MASS_KG, JUPITER_MASS_EARTH, JUPITER_MASS_KG, Mass, SOLAR_MASS_KG};
pub use temperature::Temperature;
