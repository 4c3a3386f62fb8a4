use serde::{Deserialize, Serialize};

use crate::types::SearchMode;

/// Search parameters suitable for config files and presets
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SearchParams {
    /// Maximum acceptable relative error; matching is strict (`<`)
    pub max_error: f64,
    pub mode: SearchMode,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            max_error: 0.01,
            mode: SearchMode::Values,
        }
    }
}
