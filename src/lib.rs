#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod io;
pub mod reconstructor;
pub mod types;

// Stage modules – public for tools and external solvers.
pub mod angle;
pub mod doublets;
pub mod graph;
pub mod qubo;
pub mod segments;
pub mod solver;
pub mod triplets;
pub mod xplets;

// --- High-level re-exports -------------------------------------------------

// Main entry points: reconstructor + results.
pub use crate::error::{RecoError, Result};
pub use crate::reconstructor::{PreparedEvent, ReconstructionParams, TrackReconstructor};
pub use crate::types::{Hit, HitId, ParticleId};

// High-level diagnostics returned by the reconstructor.
pub use crate::diagnostics::{PipelineTrace, ReconstructionReport};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use track_qubo::prelude::*;
///
/// # fn main() -> Result<(), RecoError> {
/// let geometry = DetectorGeometry {
///     layers: (0..4)
///         .map(|l| LayerGeometry::uniform(l as f64, 0.0, 10.0, 2))
///         .collect(),
/// };
/// let hits: Vec<Hit> = (0..4)
///     .map(|l| Hit::new(l as u64, [2.0, 1.0, l as f64], l, 1))
///     .collect();
///
/// let reco = TrackReconstructor::new(
///     &geometry,
///     ReconstructionParams::new(
///         TripletOptions::new(0.05, [-0.5, 0.5]),
///         GraphOptions::new(0.8, 135, 3),
///         QuboOptions::new(1.0),
///     ),
/// )?;
/// let report = reco.process(&hits)?;
/// println!("xplets={}", report.xplets.len());
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::graph::GraphOptions;
    pub use crate::qubo::QuboOptions;
    pub use crate::segments::{DetectorGeometry, LayerGeometry};
    pub use crate::triplets::TripletOptions;
    pub use crate::{Hit, RecoError, ReconstructionParams, TrackReconstructor};
}

// --- Stage-level API (for tools & external solvers) ------------------------

pub mod stages {
    // Stage builders.
    pub use crate::doublets::{Doublet, DoubletBuilder};
    pub use crate::graph::{ConflictGraph, ConflictGraphBuilder};
    pub use crate::qubo::{QuboCoefficientEngine, QuboModel};
    pub use crate::segments::SegmentIndex;
    pub use crate::solver::{BitFlipSolver, SweepOrder};
    pub use crate::triplets::{Triplet, TripletBuilder};
    pub use crate::xplets::{Xplet, XpletAssembler};

    // Structured diagnostics types.
    pub use crate::diagnostics::{
        CandidateStage, CoefficientStage, GraphStage, InputDescriptor, SegmentStage, SolverStage,
        StageTiming, TimingBreakdown, XpletStage,
    };
}
