use crate::error::{RecoError, Result};
use crate::graph::GraphOptions;
use crate::qubo::QuboOptions;
use crate::reconstructor::ReconstructionParams;
use crate::segments::SegmentOptions;
use crate::solver::SolverOptions;
use crate::triplets::TripletOptions;
use crate::xplets::FitOptions;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReconstructionConfig {
    pub angle_tolerance: Option<f64>,
    pub dx_x0_range: Option<[f64; 2]>,
    pub lock_in_quality_threshold: Option<f64>,
    pub max_sentinel_edges: Option<usize>,
    pub retained_edges_per_triplet: Option<usize>,
    pub rescale_factor: Option<f64>,
    pub segments: SegmentOptions,
    pub triplets: TripletExtras,
    pub graph: GraphExtras,
    pub qubo: QuboExtras,
    pub solver: SolverOptions,
    pub fit: FitOptions,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TripletExtras {
    pub dy_x0_range: Option<[f64; 2]>,
    pub angle_weight: Option<f64>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphExtras {
    pub min_connection_weight: Option<f64>,
    pub conflict_weight: Option<f64>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QuboExtras {
    pub quality_range: Option<[f64; 2]>,
    pub interaction_range: Option<[f64; 2]>,
}

fn required<T>(value: Option<T>, name: &str) -> Result<T> {
    value.ok_or_else(|| RecoError::Configuration(format!("missing required option `{name}`")))
}

impl ReconstructionConfig {
    /// Resolves the file layout into validated stage parameters.
    pub fn validate(&self) -> Result<ReconstructionParams> {
        let mut triplets = TripletOptions::new(
            required(self.angle_tolerance, "angle_tolerance")?,
            required(self.dx_x0_range, "dx_x0_range")?,
        );
        triplets.dy_x0_range = self.triplets.dy_x0_range;
        if let Some(w) = self.triplets.angle_weight {
            triplets.angle_weight = w;
        }

        let mut graph = GraphOptions::new(
            required(self.lock_in_quality_threshold, "lock_in_quality_threshold")?,
            required(self.max_sentinel_edges, "max_sentinel_edges")?,
            required(self.retained_edges_per_triplet, "retained_edges_per_triplet")?,
        );
        graph.min_connection_weight = self.graph.min_connection_weight;
        if let Some(w) = self.graph.conflict_weight {
            graph.conflict_weight = w;
        }

        let mut qubo = QuboOptions::new(required(self.rescale_factor, "rescale_factor")?);
        qubo.quality_range = self.qubo.quality_range;
        qubo.interaction_range = self.qubo.interaction_range;

        let params = ReconstructionParams {
            segments: self.segments,
            triplets,
            graph,
            qubo,
            solver: self.solver,
            fit: self.fit,
        };
        params.validate()?;
        Ok(params)
    }
}

pub fn load_config(path: &Path) -> Result<ReconstructionConfig> {
    let data = fs::read_to_string(path).map_err(|e| {
        RecoError::Configuration(format!("failed to read config {}: {e}", path.display()))
    })?;
    serde_json::from_str(&data).map_err(|e| {
        RecoError::Configuration(format!("failed to parse config {}: {e}", path.display()))
    })
}
