use crate::doublets::{Doublet, DoubletId};
use crate::error::{RecoError, Result};
use crate::types::{Hit, HitId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The three hit ids of a triplet in layer order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TripletId(pub [HitId; 3]);

impl fmt::Display for TripletId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "{a}_{b}_{c}")
    }
}

/// Pruning state assigned by the interaction graph rules.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LockState {
    #[default]
    Free,
    LockedIn,
    LockedOut,
}

/// Two doublets joined on their shared middle hit.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Triplet {
    pub id: TripletId,
    /// Indices into the event's hit slice, innermost first.
    pub hits: [usize; 3],
    pub doublets: [DoubletId; 2],
    /// Layer of the leading hit.
    pub layer: usize,
    pub angular_deviation: f64,
    /// Scattering ratios of the two doublets.
    pub ratios: [f64; 2],
    pub quality: Option<f64>,
    pub lock: LockState,
}

impl Triplet {
    /// Joins `first` and `second`, which must share the middle hit.
    pub fn from_doublets(first: &Doublet, second: &Doublet) -> Result<Self> {
        if first.trailing != second.leading || first.id.trailing != second.id.leading {
            return Err(RecoError::StructuralInconsistency {
                first_leading: first.id.leading,
                first_trailing: first.id.trailing,
                second_leading: second.id.leading,
                second_trailing: second.id.trailing,
            });
        }
        Ok(Self {
            id: TripletId([first.id.leading, first.id.trailing, second.id.trailing]),
            hits: [first.leading, first.trailing, second.trailing],
            doublets: [first.id, second.id],
            layer: first.layer,
            angular_deviation: 0.0,
            ratios: [0.0; 2],
            quality: None,
            lock: LockState::Free,
        })
    }

    pub fn leading_doublet(&self) -> DoubletId {
        self.doublets[0]
    }

    pub fn trailing_doublet(&self) -> DoubletId {
        self.doublets[1]
    }

    /// All three hits were produced by the same particle.
    pub fn is_truth_match(&self, hits: &[Hit]) -> bool {
        let pid = hits[self.hits[0]].particle_id;
        self.hits[1..].iter().all(|&h| hits[h].particle_id == pid)
    }

    /// Number of hit indices this triplet shares with `other`.
    pub fn shared_hits(&self, other: &Triplet) -> usize {
        self.hits.iter().filter(|h| other.hits.contains(h)).count()
    }

    /// `other` continues this triplet by one layer (`b.hits[0..2] == a.hits[1..3]`).
    pub fn continued_by(&self, other: &Triplet) -> bool {
        self.hits[1..3] == other.hits[0..2]
    }

    /// `other` starts on this triplet's last hit.
    pub fn chained_by(&self, other: &Triplet) -> bool {
        self.hits[2] == other.hits[0] && self.shared_hits(other) == 1
    }

    pub fn is_locked_out(&self) -> bool {
        self.lock == LockState::LockedOut
    }
}
