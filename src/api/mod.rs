//! High-level, ergonomic library API: validated entry points over the core
//! searches. Prefer these over the low-level `core::matching` functions
//! when embedding the matcher.
use crate::core::matching::{self, RatioMatch, SeriesMatch};
use crate::core::params::SearchParams;
use crate::error::{Error, Result};

fn check_positive(arg: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidArgument {
            arg,
            value: value.to_string(),
        })
    }
}

/// Find the smallest E-series matching every value within
/// `params.max_error`.
///
/// `Ok(None)` is the no-match outcome: the bound is non-positive or no
/// series up to the search cap satisfies it. Values must be positive and
/// finite; anything else is rejected before the search runs.
pub fn find_series(values: &[f64], params: &SearchParams) -> Result<Option<SeriesMatch>> {
    for &value in values {
        check_positive("value", value)?;
    }
    Ok(matching::find_series(values, params.max_error))
}

/// Find the smallest E-series containing a pair of values whose ratio
/// matches `ratio` within `params.max_error`, decade-rescaled to the
/// requested magnitude.
pub fn find_ratio(ratio: f64, params: &SearchParams) -> Result<Option<RatioMatch>> {
    check_positive("ratio", ratio)?;
    Ok(matching::find_ratio(ratio, params.max_error))
}
