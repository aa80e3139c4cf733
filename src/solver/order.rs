use crate::qubo::QuboModel;
use serde::Serialize;

/// Permutation of triplet indices visited by a sweep.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SweepOrder(pub Vec<usize>);

impl SweepOrder {
    pub fn natural(len: usize) -> Self {
        Self((0..len).collect())
    }

    /// Ascending `|delta|` at the current selection; small, uncertain
    /// decisions are revisited first. Ties by index.
    pub fn by_impact(model: &QuboModel, selection: &[bool]) -> Self {
        let mut keyed: Vec<(f64, usize)> = (0..model.len())
            .map(|i| (model.flip_delta(i, selection).abs(), i))
            .collect();
        keyed.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));
        Self(keyed.into_iter().map(|(_, i)| i).collect())
    }

    /// Triplets whose most negative coupling is strongest come first. Ties
    /// by index.
    pub fn by_connection(model: &QuboModel) -> Self {
        let mut keyed: Vec<(f64, usize)> = (0..model.len())
            .map(|i| {
                let strongest = model
                    .neighbors(i)
                    .iter()
                    .map(|&(_, w)| w)
                    .fold(0.0f64, f64::min);
                (strongest, i)
            })
            .collect();
        keyed.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));
        Self(keyed.into_iter().map(|(_, i)| i).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
