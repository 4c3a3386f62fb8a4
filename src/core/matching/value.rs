use serde::{Deserialize, Serialize};
use tracing::debug;

use super::normalize::{cut_down, relative_error};
use super::series::{Series, sizes};

/// One matched value: the normalized request, the series member chosen for
/// it, and the relative error between the two.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueMatch {
    pub requested: f64,
    pub matched: f64,
    pub error: f64,
}

/// Result of a value-mode search: the smallest series satisfying the error
/// bound, its largest per-value error, and one row per normalized input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesMatch {
    /// Values per decade of the accepted series (the `n` in `E{n}`).
    pub series: u16,
    /// Largest relative error across all matched values.
    pub largest_error: f64,
    /// Per-value assignments, ascending by normalized value.
    pub assignments: Vec<ValueMatch>,
}

/// Find the smallest E-series in which every value can be matched with a
/// relative error strictly below `max_error`.
///
/// Inputs are decade-normalized first; exact duplicates after normalization
/// collapse into a single row. Returns `None` when the bound is
/// non-positive or when no series up to the search cap satisfies it.
pub fn find_series(values: &[f64], max_error: f64) -> Option<SeriesMatch> {
    if max_error <= 0.0 {
        return None;
    }

    let mut targets: Vec<f64> = values.iter().map(|&v| cut_down(v)).collect();
    targets.sort_by(f64::total_cmp);
    targets.dedup();

    for n in sizes() {
        let series = Series::for_size(n);
        let mut largest_error = 0.0;
        let mut assignments = Vec::with_capacity(targets.len());

        for &requested in &targets {
            let matched = series.nearest(requested);
            let error = relative_error(matched, requested);
            if error > largest_error {
                largest_error = error;
            }
            assignments.push(ValueMatch {
                requested,
                matched,
                error,
            });
        }

        if largest_error < max_error {
            return Some(SeriesMatch {
                series: n,
                largest_error,
                assignments,
            });
        }
        debug!(
            series = n,
            largest_error,
            "series rejected, largest error above bound"
        );
    }

    None
}
