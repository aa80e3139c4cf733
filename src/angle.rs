//! Angle utilities used across the candidate builders.

/// Angle of the displacement `(dt, dz)` with respect to the beam axis, where
/// `dt` is the transverse (x or y) component.
#[inline]
pub fn projection_angle(t_start: f64, t_end: f64, z_start: f64, z_end: f64) -> f64 {
    (t_end - t_start).atan2(z_end - z_start)
}

/// Population standard deviation of a small sample of angles.
#[inline]
pub fn angle_spread(angles: &[f64]) -> f64 {
    if angles.len() < 2 {
        return 0.0;
    }
    let n = angles.len() as f64;
    let mean = angles.iter().sum::<f64>() / n;
    let var = angles.iter().map(|a| (a - mean) * (a - mean)).sum::<f64>() / n;
    var.max(0.0).sqrt()
}

/// Combined angular deviation `sqrt(std(xz)^2 + std(yz)^2)` over consecutive
/// segments of a polyline. Zero for a perfectly straight line.
pub fn angular_deviation(xz: &[f64], yz: &[f64]) -> f64 {
    let sx = angle_spread(xz);
    let sy = angle_spread(yz);
    (sx * sx + sy * sy).sqrt()
}

/// Angular deviation of the polyline through `points` (ordered by z).
pub fn polyline_deviation(points: &[[f64; 3]]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let mut xz = Vec::with_capacity(points.len() - 1);
    let mut yz = Vec::with_capacity(points.len() - 1);
    for pair in points.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        xz.push(projection_angle(a[0], b[0], a[2], b[2]));
        yz.push(projection_angle(a[1], b[1], a[2], b[2]));
    }
    angular_deviation(&xz, &yz)
}
