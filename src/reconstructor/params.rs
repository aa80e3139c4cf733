//! Parameters of the reconstruction pipeline.
//!
//! Thresholds that depend on the detector (triplet cuts, lock rules, edge
//! cap, rescale factor) have no defaults and are passed to
//! [`ReconstructionParams::new`]. The remaining stages start from their
//! defaults.

use crate::error::Result;
use crate::graph::GraphOptions;
use crate::qubo::QuboOptions;
use crate::segments::SegmentOptions;
use crate::solver::SolverOptions;
use crate::triplets::TripletOptions;
use crate::xplets::FitOptions;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ReconstructionParams {
    pub segments: SegmentOptions,
    pub triplets: TripletOptions,
    pub graph: GraphOptions,
    pub qubo: QuboOptions,
    pub solver: SolverOptions,
    pub fit: FitOptions,
}

impl ReconstructionParams {
    pub fn new(triplets: TripletOptions, graph: GraphOptions, qubo: QuboOptions) -> Self {
        Self {
            segments: SegmentOptions::default(),
            triplets,
            graph,
            qubo,
            solver: SolverOptions::default(),
            fit: FitOptions::default(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.triplets.validate()?;
        self.graph.validate()?;
        self.qubo.validate()?;
        self.fit.validate()
    }
}
