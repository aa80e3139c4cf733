//! Diagnostics data model returned by the reconstructor.
//!
//! `ReconstructionReport` is the main entry point: the assembled xplets, the
//! final selection vector and a `PipelineTrace` describing every stage that
//! ran for the event.

pub mod pipeline;
pub mod stages;
pub mod timing;

pub use pipeline::{InputDescriptor, PipelineTrace, ReconstructionReport};
pub use stages::{
    CandidateStage, CoefficientStage, GraphStage, SegmentStage, SolverStage, XpletStage,
};
pub use timing::{elapsed_ms, StageTiming, TimingBreakdown};
