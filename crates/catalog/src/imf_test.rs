use approx::assert_relative_eq;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;

use crate::error::DataLoadError;
use crate::imf::{ImfFloor, imf_lower_limit, parse_imf_rows, read_imf_table};
use crate::inverse_cdf::InverseCdf;
use crate::store::BUNDLED_IMF_TABLE;

const SMALL_TABLE: &str = "\
# synthetic IMF
# two header lines and a column legend
# center width upper lower count
0.15 0.1 0.2 0.1 600

0.35 0.3 0.5 0.2 300
1.25 1.5 2.0 0.5 100
";

#[test]
fn test_header_and_blank_lines_are_skipped() {
    let rows = parse_imf_rows(SMALL_TABLE.as_bytes()).unwrap();

    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].star_count, 600);
    assert_relative_eq!(rows[0].lower, 0.1);
    assert_relative_eq!(rows[2].upper, 2.0);
}

#[test]
fn test_table_to_cumulative_distribution() {
    let dist = read_imf_table(SMALL_TABLE.as_bytes(), ImfFloor::Zero).unwrap();

    assert_eq!(dist.floor(), 0.0);
    assert_relative_eq!(dist.bins()[0].cumulative, 0.6);
    assert_relative_eq!(dist.bins()[1].cumulative, 0.9);
    assert_relative_eq!(dist.bins()[2].cumulative, 1.0);

    // First bracket starts at zero, not at the first row's lower limit
    assert_eq!(dist.bracket(0.5).unwrap(), (0.0, 0.2));
    assert_eq!(dist.bracket(0.95).unwrap(), (0.5, 2.0));
}

#[test]
fn test_lowest_bin_floor() {
    let dist = read_imf_table(SMALL_TABLE.as_bytes(), ImfFloor::LowestBin).unwrap();

    assert_relative_eq!(dist.floor(), 0.1);
    assert_eq!(dist.bracket(0.5).unwrap(), (0.1, 0.2));
}

#[test]
fn test_lower_limit_is_minimum_over_rows() {
    // Rows out of order: the smallest lower limit is on the second row
    let table = "h\nh\nh\n0.35 0.3 0.5 0.2 300\n0.15 0.1 0.2 0.05 600\n";
    let rows = parse_imf_rows(table.as_bytes()).unwrap();

    assert_eq!(imf_lower_limit(&rows), Some(0.05));
    let dist = read_imf_table(table.as_bytes(), ImfFloor::LowestBin).unwrap();
    assert_eq!(dist.floor(), 0.05);
}

#[test]
fn test_wrong_column_count_is_malformed() {
    let table = "h\nh\nh\n0.15 0.1 0.2 600\n";
    match parse_imf_rows(table.as_bytes()) {
        Err(DataLoadError::Malformed { line, .. }) => assert_eq!(line, 4),
        other => panic!("expected malformed row, got {:?}", other),
    }
}

#[test]
fn test_non_numeric_field_is_malformed() {
    let table = "h\nh\nh\n0.15 0.1 0.2 0.1 600\n0.35 abc 0.5 0.2 300\n";
    match parse_imf_rows(table.as_bytes()) {
        Err(DataLoadError::Malformed { line, reason }) => {
            assert_eq!(line, 5);
            assert!(reason.contains("abc"));
        }
        other => panic!("expected malformed row, got {:?}", other),
    }
}

#[test]
fn test_headers_only_is_empty() {
    let table = "h\nh\nh\n";
    assert!(matches!(
        parse_imf_rows(table.as_bytes()),
        Err(DataLoadError::Empty(_))
    ));
}

#[test]
fn test_bundled_table_covers_main_sequence() {
    let dist = read_imf_table(BUNDLED_IMF_TABLE.as_bytes(), ImfFloor::Zero).unwrap();
    let rows = parse_imf_rows(BUNDLED_IMF_TABLE.as_bytes()).unwrap();

    assert_eq!(dist.floor(), 0.0);
    assert_relative_eq!(imf_lower_limit(&rows).unwrap(), 0.08);
    assert_eq!(dist.max(), Some(150.0));
    assert!(dist.len() > 10);

    // Low-mass stars dominate a Kroupa IMF
    let (_, median_upper) = dist.bracket(0.5).unwrap();
    assert!(median_upper < 0.5, "median bin upper edge {}", median_upper);
}

#[test]
fn test_bundled_first_bracket_reaches_below_hydrogen_burning_limit() {
    let dist = read_imf_table(BUNDLED_IMF_TABLE.as_bytes(), ImfFloor::Zero).unwrap();
    let mut rng = ChaChaRng::seed_from_u64(11);

    let (lower, upper) = dist.bracket(0.0).unwrap();
    assert_eq!(lower, 0.0);
    assert!(upper > 0.08 && upper < 0.1);

    let below = (0..20_000)
        .filter(|_| dist.sample(rng.random(), rng.random()).unwrap() < 0.08)
        .count();
    assert!(below > 0, "no stars sampled below 0.08 M☉");
}
