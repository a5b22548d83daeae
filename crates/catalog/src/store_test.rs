use std::path::Path;

use crate::error::DataLoadError;
use crate::exoplanets::CatalogField;
use crate::store::DistributionStore;

#[test]
fn test_bundled_store_is_cached() {
    let first = DistributionStore::bundled().unwrap();
    let second = DistributionStore::bundled().unwrap();
    assert!(std::ptr::eq(first, second));
}

#[test]
fn test_from_readers_with_synthetic_tables() {
    let imf = "h\nh\nh\n0.3 0.4 0.5 0.1 3\n1.0 1.0 1.5 0.5 1\n";
    let catalog = "mass,radius,eccentricity,semi_major_axis,inclination\n1,1,0,1,0\n2,2,0.5,2,90\n";

    let store = DistributionStore::from_readers(imf.as_bytes(), catalog.as_bytes()).unwrap();
    assert_eq!(store.imf.bins().len(), 2);
    assert_eq!(store.exoplanets.field(CatalogField::Radius).values(), &[1.0, 2.0]);
}

#[test]
fn test_missing_file_is_data_load_error() {
    let result = DistributionStore::from_paths(
        Path::new("/nonexistent/imf.txt"),
        Path::new("/nonexistent/catalog.csv"),
    );
    match result {
        Err(DataLoadError::Open { path, .. }) => {
            assert_eq!(path, Path::new("/nonexistent/imf.txt"))
        }
        other => panic!("expected open error, got {:?}", other),
    }
}
