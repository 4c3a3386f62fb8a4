//! Preferred-value table tests
//!
//! Invariants of the fixed IEC 60063 tables, the synthetic extrapolation,
//! and the bounded candidate-size sequence.

use approx::assert_relative_eq;
use eseries::core::matching::series::sizes;
use eseries::{E3, E6, E12, E24, Series};

fn assert_table_well_formed(table: &[f64]) {
    for pair in table.windows(2) {
        assert!(pair[0] < pair[1], "table must be strictly ascending");
    }
    for &member in table {
        assert!(
            (1.0..10.0).contains(&member),
            "member {member} outside the decade"
        );
    }
}

// ============================================================================
// Fixed tables
// ============================================================================

#[test]
fn fixed_tables_are_ascending_decade_mantissas() {
    assert_table_well_formed(&E3);
    assert_table_well_formed(&E6);
    assert_table_well_formed(&E12);
    assert_table_well_formed(&E24);
}

#[test]
fn each_fixed_table_doubles_the_previous() {
    assert_eq!(E3.len() * 2, E6.len());
    assert_eq!(E6.len() * 2, E12.len());
    assert_eq!(E12.len() * 2, E24.len());
}

#[test]
fn for_size_binds_the_fixed_tables() {
    for (n, table) in [
        (3u16, &E3[..]),
        (6, &E6[..]),
        (12, &E12[..]),
        (24, &E24[..]),
    ] {
        let series = Series::for_size(n);
        assert_eq!(series.size(), n);
        for i in 0..n {
            assert_eq!(series.member(i), table[i as usize]);
        }
    }
}

// ============================================================================
// Synthetic series (n > 24)
// ============================================================================

#[test]
fn synthetic_members_are_rounded_roots_of_ten() {
    let series = Series::for_size(48);
    assert_eq!(series.size(), 48);
    assert_relative_eq!(series.member(0), 1.0, epsilon = 1e-12);
    // 10^(26/48) = 3.48072... -> 3.481 after three-decimal rounding
    assert_relative_eq!(series.member(26), 3.481, epsilon = 1e-12);
    // 10^(47/48) = 9.53159... -> 9.532
    assert_relative_eq!(series.member(47), 9.532, epsilon = 1e-12);
}

#[test]
fn nearest_scans_fixed_tables_exhaustively() {
    assert_eq!(Series::for_size(24).nearest(3.5), 3.6);
    assert_eq!(Series::for_size(3).nearest(3.0), 2.2);
    assert_eq!(Series::for_size(12).nearest(1.04), 1.0);
}

#[test]
fn nearest_synthetic_uses_the_nearest_exponent() {
    // round(48 * log10(3.5)) = 26, so the guess lands on 10^(26/48)
    assert_relative_eq!(Series::for_size(48).nearest(3.5), 3.481, epsilon = 1e-12);
    assert_relative_eq!(Series::for_size(96).nearest(1.0), 1.0, epsilon = 1e-12);
}

// ============================================================================
// Candidate sizes
// ============================================================================

#[test]
fn candidate_sizes_double_up_to_the_cap() {
    let all: Vec<u16> = sizes().collect();
    assert_eq!(all.first(), Some(&3));
    assert_eq!(all.last(), Some(&24576));
    assert_eq!(all.len(), 14);
    for pair in all.windows(2) {
        assert_eq!(pair[0] * 2, pair[1]);
    }
}
