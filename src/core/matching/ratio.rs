use serde::{Deserialize, Serialize};
use tracing::debug;

use super::normalize::{cut_down, relative_error};
use super::series::{Series, sizes};

/// Result of a ratio-mode search: a pair of series values whose ratio
/// approximates the requested one, rescaled to real-world decades.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatioMatch {
    /// Values per decade of the accepted series (the `n` in `E{n}`).
    pub series: u16,
    /// Numerator value, decade-rescaled toward the requested ratio.
    pub value1: f64,
    /// Denominator value, decade-rescaled toward the requested ratio.
    pub value2: f64,
    /// Relative error of `value1 / value2` against the requested ratio.
    pub error: f64,
}

/// Find the smallest E-series containing a pair of values whose ratio
/// matches `ratio` with a relative error strictly below `max_error`.
///
/// Pairs are enumerated with the numerator index ascending over the whole
/// series and the denominator index ascending up to the numerator, so the
/// pair ratio is always >= 1 and smaller-index pairs win ties. The first
/// satisfying pair of the first satisfying series is taken; its values are
/// then shifted by whole decades until their ratio is as close to the
/// original (non-normalized) ratio as powers of ten allow.
pub fn find_ratio(ratio: f64, max_error: f64) -> Option<RatioMatch> {
    if max_error <= 0.0 {
        return None;
    }

    let target = cut_down(ratio);

    for n in sizes() {
        let series = Series::for_size(n);
        for e1 in 0..series.size() {
            let v1 = series.member(e1);
            for e2 in 0..=e1 {
                let v2 = series.member(e2);
                if relative_error(v1 / v2, target) < max_error {
                    let (value1, value2) = rescale_pair(v1, v2, ratio);
                    return Some(RatioMatch {
                        series: n,
                        value1,
                        value2,
                        error: relative_error(value1 / value2, ratio),
                    });
                }
            }
        }
        debug!(series = n, "series rejected, no pair within bound");
    }

    None
}

/// Shift one side of a matched pair by successive factors of ten while that
/// strictly reduces the error against the original ratio. Decade shifts
/// preserve the mantissa-level error, so the final error equals the one the
/// pair was accepted with.
fn rescale_pair(mut v1: f64, mut v2: f64, ratio: f64) -> (f64, f64) {
    loop {
        let error = relative_error(v1 / v2, ratio);
        if relative_error(v1 * 10.0 / v2, ratio) < error {
            v1 *= 10.0;
        } else if relative_error(v1 / (v2 * 10.0), ratio) < error {
            v2 *= 10.0;
        } else {
            return (v1, v2);
        }
    }
}
