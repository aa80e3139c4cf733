use super::options::FitOptions;
use crate::error::{RecoError, Result};
use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};
use statrs::distribution::{ChiSquared, ContinuousCDF};

/// Least-squares straight line `x(z) = x_slope * z + x_intercept` (same on
/// y) with goodness-of-fit.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinearFit {
    pub x_slope: f64,
    pub x_intercept: f64,
    pub y_slope: f64,
    pub y_intercept: f64,
    pub chi2: f64,
    pub degrees_of_freedom: usize,
    pub reduced_chi2: f64,
    pub p_value: f64,
}

/// Fits both projections of `points` (`[x, y, z]`).
pub fn fit_line(points: &[[f64; 3]], options: &FitOptions) -> Result<LinearFit> {
    options.validate()?;
    let mut zs: Vec<f64> = points.iter().map(|p| p[2]).collect();
    zs.sort_by(f64::total_cmp);
    zs.dedup();
    let minimum = options.min_distinct_z.max(3);
    if zs.len() < minimum {
        return Err(RecoError::NumericDegeneracy {
            distinct_z: zs.len(),
            minimum,
        });
    }

    let n = points.len();
    let design = DMatrix::from_fn(n, 2, |r, c| if c == 0 { points[r][2] } else { 1.0 });
    let x = DVector::from_iterator(n, points.iter().map(|p| p[0]));
    let y = DVector::from_iterator(n, points.iter().map(|p| p[1]));
    let svd = design.clone().svd(true, true);
    let degenerate = |_: &str| RecoError::NumericDegeneracy {
        distinct_z: zs.len(),
        minimum,
    };
    let bx = svd.solve(&x, 1e-12).map_err(degenerate)?;
    let by = svd.solve(&y, 1e-12).map_err(degenerate)?;

    let sigma = options.position_resolution;
    let rx = (&x - &design * &bx) / sigma;
    let ry = (&y - &design * &by) / sigma;
    let chi2 = rx.norm_squared() + ry.norm_squared();
    // nx + ny measurements, two parameters per projection.
    let dof = 2 * n - 4;
    let p_value = ChiSquared::new(dof as f64)
        .map(|dist| dist.sf(chi2))
        .unwrap_or(f64::NAN);

    Ok(LinearFit {
        x_slope: bx[0],
        x_intercept: bx[1],
        y_slope: by[0],
        y_intercept: by[1],
        chi2,
        degrees_of_freedom: dof,
        reduced_chi2: chi2 / dof as f64,
        p_value,
    })
}
