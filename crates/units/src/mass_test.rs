use approx::assert_relative_eq;

use crate::mass::{EARTH_MASS_KG, JUPITER_MASS_EARTH, Mass, SOLAR_MASS_KG};

#[test]
fn test_mass_conversions() {
    let sun = Mass::from_solar_masses(1.0);
    assert_relative_eq!(sun.to_kg(), SOLAR_MASS_KG);

    let from_kg = Mass::from_kg(SOLAR_MASS_KG);
    assert_relative_eq!(from_kg.to_solar_masses(), 1.0);

    let earth = Mass::from_kg(EARTH_MASS_KG);
    assert_relative_eq!(earth.to_earth_masses(), 1.0, max_relative = 1e-12);
}

#[test]
fn test_earth_masses_per_solar_mass() {
    let sun = Mass::from_solar_masses(1.0);
    assert_relative_eq!(sun.to_earth_masses(), 332_958.0, max_relative = 1e-4);
}

#[test]
fn test_jupiter_in_earth_masses() {
    let jupiter = Mass::from_jupiter_masses(1.0);
    assert_relative_eq!(jupiter.to_earth_masses(), JUPITER_MASS_EARTH, max_relative = 1e-12);
    assert_relative_eq!(JUPITER_MASS_EARTH, 317.83, max_relative = 1e-4);
}

#[test]
fn test_mass_serializes_as_number() {
    let mass = Mass::from_solar_masses(0.5);
    assert_eq!(serde_json::to_string(&mass).unwrap(), "0.5");
}
