use crate::error::{RecoError, Result};
use serde::{Deserialize, Serialize};

/// Geometric cuts and quality weighting for triplet construction.
///
/// - `angle_tolerance`: upper bound (radians, exclusive) on the combined
///   angular deviation of the two doublets.
/// - `dx_x0_range`: accepted `[min, max]` window of the per-doublet scattering
///   ratio `dx / (x0 * |dz|)`.
/// - `dy_x0_range`: optional window for the same ratio on y.
/// - `angle_weight`: share of the angular term in the quality score; the
///   remainder goes to the scattering inconsistency.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TripletOptions {
    pub angle_tolerance: f64,
    pub dx_x0_range: [f64; 2],
    #[serde(default)]
    pub dy_x0_range: Option<[f64; 2]>,
    #[serde(default = "default_angle_weight")]
    pub angle_weight: f64,
}

fn default_angle_weight() -> f64 {
    0.5
}

impl TripletOptions {
    pub fn new(angle_tolerance: f64, dx_x0_range: [f64; 2]) -> Self {
        Self {
            angle_tolerance,
            dx_x0_range,
            dy_x0_range: None,
            angle_weight: default_angle_weight(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.angle_tolerance.is_finite() && self.angle_tolerance > 0.0) {
            return Err(RecoError::Configuration(format!(
                "angle_tolerance must be positive, got {}",
                self.angle_tolerance
            )));
        }
        check_range("dx_x0_range", self.dx_x0_range)?;
        if let Some(range) = self.dy_x0_range {
            check_range("dy_x0_range", range)?;
        }
        if !(0.0..=1.0).contains(&self.angle_weight) {
            return Err(RecoError::Configuration(format!(
                "angle_weight must lie in [0, 1], got {}",
                self.angle_weight
            )));
        }
        Ok(())
    }
}

fn check_range(name: &str, range: [f64; 2]) -> Result<()> {
    if range.iter().all(|v| v.is_finite()) && range[0] < range[1] {
        Ok(())
    } else {
        Err(RecoError::Configuration(format!(
            "{name} must be a finite [min, max] window with min < max, got {range:?}"
        )))
    }
}
