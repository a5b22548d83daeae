use std::borrow::Cow;
use std::path::PathBuf;

use catalog::{DataLoadError, DistributionStore, GenerationError, ImfFloor};
use planetary::{OrbitSampling, PLANET_MAX_COUNT, PlanetCount};

use crate::{ConfigError, GeneratorConfig};

#[test]
fn test_defaults() {
    let config = GeneratorConfig::default();
    assert_eq!(config.system_count, 1);
    assert_eq!(config.orbit_sampling, OrbitSampling::Coupled);
    assert_eq!(config.planet_count, PlanetCount::Single);
    assert!(config.imf_table.is_none());
    assert_eq!(config.imf_floor, ImfFloor::Zero);
    assert!(config.validate().is_ok());
}

#[test]
fn test_partial_json_keeps_defaults() {
    let config = GeneratorConfig::from_json(r#"{"system_count": 5}"#).unwrap();
    assert_eq!(config.system_count, 5);
    assert_eq!(config.orbit_sampling, OrbitSampling::Coupled);

    let config = GeneratorConfig::from_json("{}").unwrap();
    assert_eq!(config, GeneratorConfig::default());
}

#[test]
fn test_full_json() {
    let config = GeneratorConfig::from_json(
        r#"{
            "system_count": 3,
            "orbit_sampling": "independent",
            "planet_count": { "bernoulli": { "continue_probability": 0.5, "max_planets": 4 } },
            "imf_table": "tables/imf.txt",
            "imf_floor": "lowest_bin"
        }"#,
    )
    .unwrap();

    assert_eq!(config.orbit_sampling, OrbitSampling::Independent);
    assert_eq!(
        config.planet_count,
        PlanetCount::Bernoulli {
            continue_probability: 0.5,
            max_planets: 4
        }
    );
    assert_eq!(config.imf_table, Some(PathBuf::from("tables/imf.txt")));
    assert_eq!(config.imf_floor, ImfFloor::LowestBin);
    assert!(config.exoplanet_catalog.is_none());
}

#[test]
fn test_malformed_json() {
    let err = GeneratorConfig::from_json(r#"{"system_count": "many"}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_missing_config_file() {
    let err = GeneratorConfig::from_path(&PathBuf::from("/nonexistent/forge.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
}

#[test]
fn test_validation_rejects_bad_values() {
    let zero_systems = GeneratorConfig {
        system_count: 0,
        ..Default::default()
    };
    assert!(matches!(
        zero_systems.validate(),
        Err(GenerationError::InvalidConfig(_))
    ));

    for (continue_probability, max_planets) in [
        (1.5, 12),
        (-0.1, 12),
        (0.5, 0),
        (0.5, PLANET_MAX_COUNT + 1),
        (1.0, 1_000_000_000),
    ] {
        let config = GeneratorConfig {
            planet_count: PlanetCount::Bernoulli {
                continue_probability,
                max_planets,
            },
            ..Default::default()
        };
        assert!(
            matches!(config.validate(), Err(GenerationError::InvalidConfig(_))),
            "accepted p={continue_probability} max={max_planets}"
        );
    }

    let multi = GeneratorConfig {
        planet_count: PlanetCount::bernoulli(),
        ..Default::default()
    };
    assert!(multi.validate().is_ok());
}

#[test]
fn test_default_store_is_bundled() {
    let store = GeneratorConfig::default().distribution_store().unwrap();
    assert!(matches!(store, Cow::Borrowed(_)));
    assert_eq!(*store, *DistributionStore::bundled().unwrap());
}

#[test]
fn test_missing_table_path_is_a_load_error() {
    let config = GeneratorConfig {
        exoplanet_catalog: Some(PathBuf::from("/nonexistent/catalog.csv")),
        ..Default::default()
    };
    let err = config.distribution_store().unwrap_err();
    assert!(matches!(err, DataLoadError::Open { .. }));
}

#[test]
fn test_default_store_samples_imf_from_zero() {
    let store = GeneratorConfig::default().distribution_store().unwrap();
    assert_eq!(store.imf.floor(), 0.0);
}

#[test]
fn test_lowest_bin_floor_rebuilds_bundled_imf() {
    let config = GeneratorConfig {
        imf_floor: ImfFloor::LowestBin,
        ..Default::default()
    };
    let store = config.distribution_store().unwrap();

    assert!(matches!(store, Cow::Owned(_)));
    assert_eq!(store.imf.floor(), 0.08);
    assert_eq!(store.imf.bins(), DistributionStore::bundled().unwrap().imf.bins());
}
