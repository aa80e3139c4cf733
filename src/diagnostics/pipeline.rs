use crate::diagnostics::{
    CandidateStage, CoefficientStage, GraphStage, SegmentStage, SolverStage, TimingBreakdown,
    XpletStage,
};
use crate::xplets::Xplet;
use serde::Serialize;

/// Result of [`TrackReconstructor::process`](crate::TrackReconstructor::process).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReconstructionReport {
    pub xplets: Vec<Xplet>,
    pub selection: Vec<bool>,
    pub trace: PipelineTrace,
}

/// Stage-by-stage record of one event.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineTrace {
    pub input: InputDescriptor,
    pub timings: TimingBreakdown,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segments: Option<SegmentStage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidates: Option<CandidateStage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graph: Option<GraphStage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coefficients: Option<CoefficientStage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solver: Option<SolverStage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xplets: Option<XpletStage>,
}

#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub hits: usize,
    pub layers: usize,
}
