//! Doublet construction: hit pairs on consecutive layers.
//!
//! Every hit of a segment on layer `L` is paired with every hit of the
//! reachable segments on layer `L + 1`. No quality filtering happens here; the
//! only reduction comes from segment reachability. Output order is
//! deterministic: source layer, source segment, source hit, then target
//! segment and target hit in partition order.

use crate::angle::projection_angle;
use crate::segments::{HitPartition, SegmentId, SegmentIndex};
use crate::types::{Hit, HitId};
use log::debug;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered pair of hit ids identifying a doublet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DoubletId {
    pub leading: HitId,
    pub trailing: HitId,
}

impl fmt::Display for DoubletId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.leading, self.trailing)
    }
}

/// Two hits on consecutive layers. `leading` and `trailing` index into the
/// event's hit slice; the leading hit is on the lower layer.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Doublet {
    pub id: DoubletId,
    pub leading: usize,
    pub trailing: usize,
    pub layer: usize,
    pub xz_angle: f64,
    pub yz_angle: f64,
}

impl Doublet {
    pub fn new(hits: &[Hit], leading: usize, trailing: usize) -> Self {
        let (a, b) = (&hits[leading], &hits[trailing]);
        Self {
            id: DoubletId {
                leading: a.id,
                trailing: b.id,
            },
            leading,
            trailing,
            layer: a.layer,
            xz_angle: projection_angle(a.x(), b.x(), a.z(), b.z()),
            yz_angle: projection_angle(a.y(), b.y(), a.z(), b.z()),
        }
    }

    /// Displacement `(dx, dy, dz)` from the leading to the trailing hit.
    pub fn delta(&self, hits: &[Hit]) -> [f64; 3] {
        let (a, b) = (&hits[self.leading], &hits[self.trailing]);
        [b.x() - a.x(), b.y() - a.y(), b.z() - a.z()]
    }

    /// Both hits were produced by the same particle.
    pub fn is_truth_match(&self, hits: &[Hit]) -> bool {
        hits[self.leading].particle_id == hits[self.trailing].particle_id
    }
}

/// Builds doublets from a partitioned event.
pub struct DoubletBuilder<'a> {
    index: &'a SegmentIndex,
}

impl<'a> DoubletBuilder<'a> {
    pub fn new(index: &'a SegmentIndex) -> Self {
        Self { index }
    }

    /// Pairs hits across reachable segments of consecutive layers.
    pub fn build(&self, hits: &[Hit], partition: &HitPartition) -> Vec<Doublet> {
        let sources: Vec<SegmentId> = (0..self.index.layer_count().saturating_sub(1))
            .flat_map(|layer| self.index.segments(layer).iter().map(|s| s.id))
            .filter(|id| !partition.hits_in(*id).is_empty())
            .collect();

        #[cfg(feature = "parallel")]
        let per_segment: Vec<Vec<Doublet>> = sources
            .par_iter()
            .map(|&source| self.pair_segment(hits, partition, source))
            .collect();
        #[cfg(not(feature = "parallel"))]
        let per_segment: Vec<Vec<Doublet>> = sources
            .iter()
            .map(|&source| self.pair_segment(hits, partition, source))
            .collect();

        let doublets: Vec<Doublet> = per_segment.into_iter().flatten().collect();
        debug!(
            "DoubletBuilder: {} doublets from {} source segments",
            doublets.len(),
            sources.len()
        );
        doublets
    }

    fn pair_segment(
        &self,
        hits: &[Hit],
        partition: &HitPartition,
        source: SegmentId,
    ) -> Vec<Doublet> {
        let targets = self.index.neighbors(source);
        let mut out = Vec::new();
        for &leading in partition.hits_in(source) {
            for &target in targets {
                for &trailing in partition.hits_in(target) {
                    out.push(Doublet::new(hits, leading, trailing));
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segments::{DetectorGeometry, LayerGeometry, SegmentOptions};

    fn index(bins: usize, layers: usize) -> SegmentIndex {
        let geometry = DetectorGeometry {
            layers: (0..layers)
                .map(|l| LayerGeometry::uniform(l as f64, 0.0, 8.0, bins))
                .collect(),
        };
        SegmentIndex::new(&geometry, SegmentOptions::default()).unwrap()
    }

    #[test]
    fn pairs_only_consecutive_layers() {
        let index = index(1, 3);
        let hits = vec![
            Hit::new(1, [1.0, 0.0, 0.0], 0, 1),
            Hit::new(2, [1.0, 0.0, 1.0], 1, 1),
            Hit::new(3, [2.0, 0.0, 1.0], 1, 2),
            Hit::new(4, [1.0, 0.0, 2.0], 2, 1),
        ];
        let partition = index.partition(&hits);
        let doublets = DoubletBuilder::new(&index).build(&hits, &partition);
        let ids: Vec<String> = doublets.iter().map(|d| d.id.to_string()).collect();
        assert_eq!(ids, vec!["1_2", "1_3", "2_4", "3_4"]);
        assert!(doublets.iter().all(|d| hits[d.trailing].layer == d.layer + 1));
        assert!(doublets[0].is_truth_match(&hits));
        assert!(!doublets[1].is_truth_match(&hits));
    }

    #[test]
    fn unreachable_segments_are_not_paired() {
        let index = index(8, 3);
        let hits = vec![
            Hit::new(1, [0.5, 0.0, 0.0], 0, 1),
            Hit::new(2, [1.5, 0.0, 1.0], 1, 1),
            Hit::new(3, [6.5, 0.0, 1.0], 1, 2),
        ];
        let partition = index.partition(&hits);
        let doublets = DoubletBuilder::new(&index).build(&hits, &partition);
        assert_eq!(doublets.len(), 1);
        assert_eq!(doublets[0].id.trailing, HitId(2));
    }

    #[test]
    fn angles_follow_displacement() {
        let hits = vec![
            Hit::new(1, [0.0, 0.0, 0.0], 0, 1),
            Hit::new(2, [1.0, -1.0, 1.0], 1, 1),
        ];
        let d = Doublet::new(&hits, 0, 1);
        assert!((d.xz_angle - std::f64::consts::FRAC_PI_4).abs() < 1e-12);
        assert!((d.yz_angle + std::f64::consts::FRAC_PI_4).abs() < 1e-12);
        assert_eq!(d.delta(&hits), [1.0, -1.0, 1.0]);
    }
}
