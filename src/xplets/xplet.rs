use super::fit::LinearFit;
use crate::triplets::TripletId;
use crate::types::{HitId, ParticleId};
use serde::{Deserialize, Serialize};

/// Track candidate: a chain of kept triplets covering consecutive layers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Xplet {
    pub triplet_ids: Vec<TripletId>,
    pub hit_ids: Vec<HitId>,
    pub particle_ids: Vec<ParticleId>,
    pub positions: Vec<[f64; 3]>,
    pub energies: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fit: Option<LinearFit>,
}

impl Xplet {
    /// Number of hits (layers) covered.
    pub fn len(&self) -> usize {
        self.hit_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hit_ids.is_empty()
    }

    /// Every hit was produced by the same particle.
    pub fn is_truth_match(&self) -> bool {
        self.particle_ids.windows(2).all(|w| w[0] == w[1])
    }
}
