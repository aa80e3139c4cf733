use crate::graph::GraphSummary;
use crate::qubo::CoefficientSummary;
use crate::segments::HitPartition;
use crate::solver::SolveOutcome;
use crate::triplets::TripletStats;
use crate::xplets::Xplet;
use serde::Serialize;

/// Hit placement on the segment index.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentStage {
    pub layers: usize,
    pub hits_placed: usize,
    pub hits_rejected: usize,
    pub occupied_segments: usize,
}

impl SegmentStage {
    pub fn from_partition(partition: &HitPartition) -> Self {
        Self {
            layers: partition.layer_count(),
            hits_placed: partition.placed,
            hits_rejected: partition.rejected,
            occupied_segments: partition
                .cells
                .iter()
                .flatten()
                .filter(|cell| !cell.is_empty())
                .count(),
        }
    }
}

/// Doublet and triplet generation.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateStage {
    pub elapsed_ms: f64,
    #[serde(flatten)]
    pub stats: TripletStats,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphStage {
    pub elapsed_ms: f64,
    #[serde(flatten)]
    pub summary: GraphSummary,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoefficientStage {
    pub elapsed_ms: f64,
    pub rescale_factor: f64,
    pub summary: CoefficientSummary,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SolverStage {
    pub elapsed_ms: f64,
    pub selected: usize,
    #[serde(flatten)]
    pub outcome: SolveOutcome,
}

/// Track candidates after chaining and fitting.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct XpletStage {
    pub elapsed_ms: f64,
    pub xplets: usize,
    pub fitted: usize,
    pub truth_matched: usize,
    pub mean_length: f64,
}

impl XpletStage {
    pub fn from_xplets(xplets: &[Xplet], elapsed_ms: f64) -> Self {
        let mean_length = if xplets.is_empty() {
            0.0
        } else {
            xplets.iter().map(Xplet::len).sum::<usize>() as f64 / xplets.len() as f64
        };
        Self {
            elapsed_ms,
            xplets: xplets.len(),
            fitted: xplets.iter().filter(|x| x.fit.is_some()).count(),
            truth_matched: xplets.iter().filter(|x| x.is_truth_match()).count(),
            mean_length,
        }
    }
}
