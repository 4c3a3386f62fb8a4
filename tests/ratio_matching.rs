//! Ratio-mode search tests
//!
//! Pair enumeration order, table-driven expected pairs, and the decade
//! rescaling that recovers real-world magnitudes.

use approx::assert_relative_eq;
use eseries::{Error, SearchMode, SearchParams, find_ratio, relative_error};

fn params(max_error: f64) -> SearchParams {
    SearchParams {
        max_error,
        mode: SearchMode::Ratio,
    }
}

// ============================================================================
// Pair selection
// ============================================================================

#[test]
fn unity_ratio_matches_the_first_enumerated_pair() {
    let found = find_ratio(1.0, &params(0.01)).unwrap().unwrap();
    assert_eq!(found.series, 3);
    assert_eq!(found.value1, 1.0);
    assert_eq!(found.value2, 1.0);
    assert_eq!(found.error, 0.0);
}

#[test]
fn ratio_two_needs_e24() {
    // No E3/E6/E12 pair ratio lands within 1% of 2.0 (the closest are
    // 6.8/3.3 = 2.0606 and 5.6/2.7 = 2.0741); E24 contains 2.0/1.0.
    let found = find_ratio(2.0, &params(0.01)).unwrap().unwrap();
    assert_eq!(found.series, 24);
    assert_eq!(found.value1, 2.0);
    assert_eq!(found.value2, 1.0);
    assert_eq!(found.error, 0.0);
}

#[test]
fn first_satisfying_pair_in_enumeration_order_wins() {
    // For 2.1 the first E12 pair within 1% is 8.2/3.9 = 2.10256 (0.12%),
    // reached before any denser series is tried.
    let found = find_ratio(2.1, &params(0.01)).unwrap().unwrap();
    assert_eq!(found.series, 12);
    assert_eq!(found.value1, 8.2);
    assert_eq!(found.value2, 3.9);
    assert_relative_eq!(found.error, relative_error(8.2 / 3.9, 2.1), epsilon = 1e-15);
}

// ============================================================================
// Decade rescaling
// ============================================================================

#[test]
fn large_ratio_rescales_the_numerator() {
    let found = find_ratio(2000.0, &params(0.01)).unwrap().unwrap();
    assert_eq!(found.series, 24);
    assert_eq!(found.value1, 2000.0);
    assert_eq!(found.value2, 1.0);
    assert_eq!(found.error, 0.0);
}

#[test]
fn sub_unity_ratio_rescales_the_denominator() {
    // 0.5 normalizes to 5.0, first satisfied by E24's 7.5/1.5; shifting
    // the denominator one decade reproduces the requested ratio.
    let found = find_ratio(0.5, &params(0.01)).unwrap().unwrap();
    assert_eq!(found.series, 24);
    assert_eq!(found.value1, 7.5);
    assert_eq!(found.value2, 15.0);
    assert_eq!(found.value1 / found.value2, 0.5);
    assert_eq!(found.error, 0.0);
}

#[test]
fn rescaled_pair_reproduces_the_original_ratio_within_the_reported_error() {
    for ratio in [0.5, 2.1, 33.0, 2000.0] {
        let found = find_ratio(ratio, &params(0.01)).unwrap().unwrap();
        assert!(found.error < 0.01);
        assert!(
            relative_error(found.value1 / found.value2, ratio) <= found.error + 1e-15,
            "pair {}/{} drifted from ratio {}",
            found.value1,
            found.value2,
            ratio
        );
    }
}

// ============================================================================
// Bounds and failure outcomes
// ============================================================================

#[test]
fn non_positive_bound_is_always_a_no_match() {
    assert!(find_ratio(2.0, &params(0.0)).unwrap().is_none());
    assert!(find_ratio(2.0, &params(-0.01)).unwrap().is_none());
}

#[test]
fn non_positive_and_non_finite_ratios_are_rejected() {
    for bad in [-2.0, 0.0, f64::NAN, f64::INFINITY] {
        let result = find_ratio(bad, &params(0.01));
        assert!(matches!(result, Err(Error::InvalidArgument { .. })));
    }
}
