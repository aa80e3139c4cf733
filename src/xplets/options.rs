use crate::error::{RecoError, Result};
use serde::{Deserialize, Serialize};

/// Straight-line fit of assembled xplets.
///
/// - `enabled`: run the fit at all.
/// - `position_resolution`: per-coordinate measurement uncertainty used as
///   sigma in the chi-squared sum.
/// - `min_distinct_z`: fewer distinct layers than this is a degenerate fit.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FitOptions {
    pub enabled: bool,
    pub position_resolution: f64,
    pub min_distinct_z: usize,
}

impl Default for FitOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            position_resolution: 5e-6,
            min_distinct_z: 3,
        }
    }
}

impl FitOptions {
    /// `position_resolution` is the chi-squared sigma and must be finite and
    /// positive, even with the fit disabled.
    pub fn validate(&self) -> Result<()> {
        if !(self.position_resolution.is_finite() && self.position_resolution > 0.0) {
            return Err(RecoError::Configuration(format!(
                "position_resolution must be finite and positive, got {}",
                self.position_resolution
            )));
        }
        Ok(())
    }
}
