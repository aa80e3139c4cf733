use crate::error::{RecoError, Result};
use serde::{Deserialize, Serialize};

/// Coefficient scaling.
///
/// `quality_range` and `interaction_range` optionally min-max rescale the
/// qualities and the compatible interaction weights into `[a, b]` before
/// `rescale_factor` is applied. Sentinel and conflict weights are never
/// rescaled.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuboOptions {
    pub rescale_factor: f64,
    #[serde(default)]
    pub quality_range: Option<[f64; 2]>,
    #[serde(default)]
    pub interaction_range: Option<[f64; 2]>,
}

impl QuboOptions {
    pub fn new(rescale_factor: f64) -> Self {
        Self {
            rescale_factor,
            quality_range: None,
            interaction_range: None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.rescale_factor.is_finite() && self.rescale_factor > 0.0) {
            return Err(RecoError::Configuration(format!(
                "rescale_factor must be positive, got {}",
                self.rescale_factor
            )));
        }
        for (name, range) in [
            ("quality_range", self.quality_range),
            ("interaction_range", self.interaction_range),
        ] {
            if let Some([a, b]) = range {
                if !(a.is_finite() && b.is_finite() && a < b) {
                    return Err(RecoError::Configuration(format!(
                        "{name} must be a finite [a, b] window with a < b, got [{a}, {b}]"
                    )));
                }
            }
        }
        Ok(())
    }
}
