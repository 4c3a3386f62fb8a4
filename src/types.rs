//! Shared types and enums used across the crate.
use serde::{Deserialize, Serialize};

/// Which of the two searches an invocation runs.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum SearchMode {
    /// Match every supplied value against one series.
    Values,
    /// Match the ratio of a pair of series values against a target ratio.
    Ratio,
}

impl std::fmt::Display for SearchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SearchMode::Values => "Values",
            SearchMode::Ratio => "Ratio",
        };
        write!(f, "{}", s)
    }
}
