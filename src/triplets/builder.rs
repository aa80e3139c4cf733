use super::options::TripletOptions;
use super::triplet::Triplet;
use crate::angle::angular_deviation;
use crate::doublets::Doublet;
use crate::error::{RecoError, Result};
use crate::types::Hit;
use log::{debug, warn};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::Serialize;

/// Counters describing candidate generation for one event.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TripletStats {
    pub doublets: usize,
    pub doublets_truth: usize,
    pub pairs_considered: usize,
    pub rejected_ratio: usize,
    pub rejected_angle: usize,
    pub malformed: usize,
    pub triplets: usize,
    pub triplets_truth: usize,
}

/// Triplets of one event together with the generation counters.
#[derive(Clone, Debug, Default)]
pub struct TripletSet {
    pub triplets: Vec<Triplet>,
    pub stats: TripletStats,
}

enum PairOutcome {
    Accepted(Triplet),
    RejectedRatio,
    RejectedAngle,
    Malformed(RecoError),
}

/// Joins hit-sharing doublets, applies the scattering and angular cuts and
/// scores the survivors.
#[derive(Clone, Debug)]
pub struct TripletBuilder {
    options: TripletOptions,
    reference_z: f64,
}

impl TripletBuilder {
    /// `reference_z` is the z of the innermost layer used for the `x0`
    /// extrapolation.
    pub fn new(options: TripletOptions, reference_z: f64) -> Result<Self> {
        options.validate()?;
        Ok(Self {
            options,
            reference_z,
        })
    }

    pub fn options(&self) -> &TripletOptions {
        &self.options
    }

    pub fn build(&self, hits: &[Hit], doublets: &[Doublet]) -> TripletSet {
        let mut by_leading: Vec<Vec<usize>> = vec![Vec::new(); hits.len()];
        for (k, d) in doublets.iter().enumerate() {
            by_leading[d.leading].push(k);
        }
        let ratios: Vec<Option<f64>> = doublets
            .iter()
            .map(|d| self.scattering_ratio(hits, d))
            .collect();

        let join = |first_idx: usize| -> Vec<PairOutcome> {
            let first = &doublets[first_idx];
            by_leading[first.trailing]
                .iter()
                .map(|&second_idx| {
                    let second = &doublets[second_idx];
                    match (ratios[first_idx], ratios[second_idx]) {
                        (Some(r1), Some(r2)) => self.evaluate(first, second, [r1, r2]),
                        _ => PairOutcome::RejectedRatio,
                    }
                })
                .collect()
        };

        #[cfg(feature = "parallel")]
        let outcomes: Vec<Vec<PairOutcome>> =
            (0..doublets.len()).into_par_iter().map(join).collect();
        #[cfg(not(feature = "parallel"))]
        let outcomes: Vec<Vec<PairOutcome>> = (0..doublets.len()).map(join).collect();

        let mut stats = TripletStats {
            doublets: doublets.len(),
            doublets_truth: doublets.iter().filter(|d| d.is_truth_match(hits)).count(),
            ..TripletStats::default()
        };
        let mut triplets = Vec::new();
        for outcome in outcomes.into_iter().flatten() {
            stats.pairs_considered += 1;
            match outcome {
                PairOutcome::Accepted(t) => {
                    if t.is_truth_match(hits) {
                        stats.triplets_truth += 1;
                    }
                    triplets.push(t);
                }
                PairOutcome::RejectedRatio => stats.rejected_ratio += 1,
                PairOutcome::RejectedAngle => stats.rejected_angle += 1,
                PairOutcome::Malformed(err) => {
                    warn!("{err}; pair skipped");
                    stats.malformed += 1;
                }
            }
        }
        stats.triplets = triplets.len();
        debug!(
            "TripletBuilder: {} triplets ({} truth) from {} doublet pairs, rejected ratio={} angle={}",
            stats.triplets,
            stats.triplets_truth,
            stats.pairs_considered,
            stats.rejected_ratio,
            stats.rejected_angle
        );
        TripletSet { triplets, stats }
    }

    /// Scattering ratio `dx / (x0 * |dz|)` of a doublet when it passes the
    /// configured window(s), `None` otherwise.
    pub fn scattering_ratio(&self, hits: &[Hit], doublet: &Doublet) -> Option<f64> {
        let [dx, dy, dz] = doublet.delta(hits);
        let trailing = &hits[doublet.trailing];
        let x0 = trailing.x() - dx * (trailing.z() - self.reference_z).abs() / dz;
        let denom = x0 * dz.abs();
        let rx = dx / denom;
        if !in_window(rx, self.options.dx_x0_range) {
            return None;
        }
        if let Some(range) = self.options.dy_x0_range {
            if !in_window(dy / denom, range) {
                return None;
            }
        }
        Some(rx)
    }

    /// Quality in `[-1, 1]` from the angular deviation and the two ratios.
    pub fn quality(&self, deviation: f64, ratios: [f64; 2]) -> f64 {
        let [min, max] = self.options.dx_x0_range;
        let inconsistency = ((ratios[0] - ratios[1]).abs() / (max - min)).min(1.0);
        let w = self.options.angle_weight;
        let penalty = w * deviation / self.options.angle_tolerance + (1.0 - w) * inconsistency;
        (1.0 - 2.0 * penalty).clamp(-1.0, 1.0)
    }

    fn evaluate(&self, first: &Doublet, second: &Doublet, ratios: [f64; 2]) -> PairOutcome {
        let deviation = angular_deviation(
            &[first.xz_angle, second.xz_angle],
            &[first.yz_angle, second.yz_angle],
        );
        if !(deviation < self.options.angle_tolerance) {
            return PairOutcome::RejectedAngle;
        }
        match Triplet::from_doublets(first, second) {
            Ok(mut triplet) => {
                triplet.angular_deviation = deviation;
                triplet.ratios = ratios;
                triplet.quality = Some(self.quality(deviation, ratios));
                PairOutcome::Accepted(triplet)
            }
            Err(err) => PairOutcome::Malformed(err),
        }
    }
}

#[inline]
fn in_window(value: f64, range: [f64; 2]) -> bool {
    value.is_finite() && value >= range[0] && value <= range[1]
}
