use approx::assert_relative_eq;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;

use crate::empirical::EmpiricalDistribution;
use crate::error::SamplingError;
use crate::inverse_cdf::InverseCdf;

fn one_to_five() -> EmpiricalDistribution {
    EmpiricalDistribution::from_values([1.0, 2.0, 3.0, 4.0, 5.0])
}

#[test]
fn test_from_values_sorts_and_drops_non_finite() {
    let dist = EmpiricalDistribution::from_values([3.0, f64::NAN, 1.0, f64::INFINITY, 2.0]);
    assert_eq!(dist.values(), &[1.0, 2.0, 3.0]);
    assert_eq!(dist.min(), Some(1.0));
    assert_eq!(dist.max(), Some(3.0));
}

#[test]
fn test_bracket_selection() {
    let dist = one_to_five();
    assert_eq!(dist.bracket(0.0).unwrap(), (1.0, 2.0));
    assert_eq!(dist.bracket(0.2).unwrap(), (2.0, 3.0));
    assert_eq!(dist.bracket(0.59).unwrap(), (3.0, 4.0));
}

#[test]
fn test_draw_near_one_clamps_to_last_bracket() {
    let dist = one_to_five();
    assert_eq!(dist.bracket(0.999999).unwrap(), (4.0, 5.0));

    let value = dist.sample(0.999999, 0.3).unwrap();
    assert!((4.0..=5.0).contains(&value), "value {} outside [4, 5]", value);
}

#[test]
fn test_interpolation_within_bracket() {
    let dist = one_to_five();
    assert_relative_eq!(dist.sample(0.0, 0.0).unwrap(), 1.0);
    assert_relative_eq!(dist.sample(0.0, 0.5).unwrap(), 1.5);
    assert_relative_eq!(dist.sample(0.45, 0.25).unwrap(), 3.25);
}

#[test]
fn test_samples_stay_within_observed_range() {
    let dist = EmpiricalDistribution::from_values([0.02, 0.05, 0.3, 1.1, 4.7, 9.9, 210.0]);
    let mut rng = ChaChaRng::seed_from_u64(42);

    for _ in 0..1000 {
        let value = dist.sample(rng.random(), rng.random()).unwrap();
        assert!(value >= 0.02 && value <= 210.0, "value {} out of range", value);
    }
}

#[test]
fn test_sample_is_monotonic_in_selector() {
    let dist = EmpiricalDistribution::from_values([0.1, 0.4, 0.4, 2.0, 3.5, 8.0, 8.5]);

    for t in [0.0, 0.37, 0.99] {
        let mut previous = f64::NEG_INFINITY;
        for step in 0..1000 {
            let u = step as f64 / 1000.0;
            let value = dist.sample(u, t).unwrap();
            assert!(value >= previous, "u={} t={}: {} < {}", u, t, value, previous);
            previous = value;
        }
    }
}

#[test]
fn test_sample_is_deterministic() {
    let dist = one_to_five();
    assert_eq!(dist.sample(0.61, 0.42), dist.sample(0.61, 0.42));
}

#[test]
fn test_out_of_range_draws_are_rejected() {
    let dist = one_to_five();

    for u in [-0.1, 1.0, 1.5, f64::NAN] {
        assert!(matches!(
            dist.sample(u, 0.5),
            Err(SamplingError::DrawOutOfRange { .. })
        ));
    }
    assert!(matches!(
        dist.sample(0.5, 1.0),
        Err(SamplingError::DrawOutOfRange { .. })
    ));
}

#[test]
fn test_too_few_entries() {
    let empty = EmpiricalDistribution::default();
    assert_eq!(
        empty.sample(0.5, 0.5),
        Err(SamplingError::TooFewEntries { len: 0 })
    );
    assert!(empty.is_empty());

    let single = EmpiricalDistribution::from_values([3.0]);
    assert_eq!(
        single.bracket(0.5),
        Err(SamplingError::TooFewEntries { len: 1 })
    );
}
