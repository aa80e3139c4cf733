//! Event pipeline driving the reconstruction end-to-end.
//!
//! ```no_run
//! use track_qubo::prelude::*;
//!
//! # fn example(geometry: DetectorGeometry, hits: Vec<Hit>) -> Result<(), RecoError> {
//! let params = ReconstructionParams::new(
//!     TripletOptions::new(0.05, [-0.5, 0.5]),
//!     GraphOptions::new(0.8, 135, 3),
//!     QuboOptions::new(1.0),
//! );
//! let reconstructor = TrackReconstructor::new(&geometry, params)?;
//! let report = reconstructor.process(&hits)?;
//! println!("{} xplets", report.xplets.len());
//! # Ok(())
//! # }
//! ```
use super::params::ReconstructionParams;
use crate::diagnostics::{
    elapsed_ms, CandidateStage, CoefficientStage, GraphStage, InputDescriptor, PipelineTrace,
    ReconstructionReport, SegmentStage, SolverStage, XpletStage,
};
use crate::doublets::DoubletBuilder;
use crate::error::Result;
use crate::graph::{ConflictGraph, ConflictGraphBuilder};
use crate::qubo::{QuboCoefficientEngine, QuboModel};
use crate::segments::{DetectorGeometry, SegmentIndex};
use crate::solver::BitFlipSolver;
use crate::triplets::{Triplet, TripletBuilder};
use crate::types::Hit;
use crate::xplets::{Xplet, XpletAssembler};
use log::debug;
use std::time::Instant;

/// Everything needed to hand the selection problem to a solver.
#[derive(Clone, Debug)]
pub struct PreparedEvent {
    pub triplets: Vec<Triplet>,
    pub graph: ConflictGraph,
    pub model: QuboModel,
    pub trace: PipelineTrace,
}

/// Reconstructor owning the validated parameters and the segment index.
/// One instance serves any number of events; no state is carried between
/// them.
#[derive(Clone, Debug)]
pub struct TrackReconstructor {
    params: ReconstructionParams,
    index: SegmentIndex,
    triplet_builder: TripletBuilder,
    graph_builder: ConflictGraphBuilder,
    engine: QuboCoefficientEngine,
    solver: BitFlipSolver,
    assembler: XpletAssembler,
}

impl TrackReconstructor {
    pub fn new(geometry: &DetectorGeometry, params: ReconstructionParams) -> Result<Self> {
        params.validate()?;
        let index = SegmentIndex::new(geometry, params.segments)?;
        let triplet_builder = TripletBuilder::new(params.triplets, index.reference_z())?;
        let graph_builder = ConflictGraphBuilder::new(params.graph)?;
        let engine = QuboCoefficientEngine::new(params.qubo)?;
        let solver = BitFlipSolver::new(params.solver);
        let assembler = XpletAssembler::new(params.fit);
        Ok(Self {
            params,
            index,
            triplet_builder,
            graph_builder,
            engine,
            solver,
            assembler,
        })
    }

    pub fn params(&self) -> &ReconstructionParams {
        &self.params
    }

    pub fn index(&self) -> &SegmentIndex {
        &self.index
    }

    /// Runs candidate generation, the interaction graph and coefficient
    /// assembly.
    pub fn prepare(&self, hits: &[Hit]) -> Result<PreparedEvent> {
        let total_start = Instant::now();
        debug!(
            "TrackReconstructor::prepare hits={} layers={}",
            hits.len(),
            self.index.layer_count()
        );
        let mut trace = PipelineTrace {
            input: InputDescriptor {
                hits: hits.len(),
                layers: self.index.layer_count(),
            },
            ..PipelineTrace::default()
        };

        let start = Instant::now();
        let partition = self.index.partition(hits);
        trace.timings.record("segments", start);
        trace.segments = Some(SegmentStage::from_partition(&partition));

        let start = Instant::now();
        let doublets = DoubletBuilder::new(&self.index).build(hits, &partition);
        let set = self.triplet_builder.build(hits, &doublets);
        let candidates_ms = trace.timings.record("candidates", start);
        let mut triplets = set.triplets;
        trace.candidates = Some(CandidateStage {
            elapsed_ms: candidates_ms,
            stats: set.stats,
        });

        let start = Instant::now();
        let (graph, summary) = self.graph_builder.build(&mut triplets, hits);
        let graph_ms = trace.timings.record("graph", start);
        trace.graph = Some(GraphStage {
            elapsed_ms: graph_ms,
            summary,
        });

        let start = Instant::now();
        let model = self.engine.assemble(&triplets, &graph)?;
        let coefficients_ms = trace.timings.record("coefficients", start);
        trace.coefficients = Some(CoefficientStage {
            elapsed_ms: coefficients_ms,
            rescale_factor: self.params.qubo.rescale_factor,
            summary: model.summary(),
        });

        trace.timings.total_ms = elapsed_ms(total_start);
        Ok(PreparedEvent {
            triplets,
            graph,
            model,
            trace,
        })
    }

    /// Chains a solved selection into xplets.
    pub fn assemble_xplets(
        &self,
        hits: &[Hit],
        triplets: &[Triplet],
        selection: &[bool],
    ) -> Vec<Xplet> {
        self.assembler.assemble(hits, triplets, selection)
    }

    /// Full reconstruction with the built-in bit-flip solver, starting from
    /// an empty selection.
    pub fn process(&self, hits: &[Hit]) -> Result<ReconstructionReport> {
        let total_start = Instant::now();
        let PreparedEvent {
            triplets,
            model,
            mut trace,
            ..
        } = self.prepare(hits)?;

        let start = Instant::now();
        let mut selection = vec![false; triplets.len()];
        let outcome = self.solver.run(&model, &mut selection);
        let solver_ms = trace.timings.record("solver", start);
        trace.solver = Some(SolverStage {
            elapsed_ms: solver_ms,
            selected: selection.iter().filter(|&&on| on).count(),
            outcome,
        });

        let start = Instant::now();
        let xplets = self.assemble_xplets(hits, &triplets, &selection);
        let xplet_ms = trace.timings.record("xplets", start);
        trace.xplets = Some(XpletStage::from_xplets(&xplets, xplet_ms));

        trace.timings.total_ms = elapsed_ms(total_start);
        debug!(
            "TrackReconstructor::process done xplets={} total_ms={:.3}",
            xplets.len(),
            trace.timings.total_ms
        );
        Ok(ReconstructionReport {
            xplets,
            selection,
            trace,
        })
    }
}
