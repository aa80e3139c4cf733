use super::arena::ConflictGraph;
use super::interaction::candidate_edges;
use super::options::GraphOptions;
use super::rules::{apply_cap, apply_lock_in, apply_lock_out, is_sentinel};
use crate::error::Result;
use crate::triplets::Triplet;
use crate::types::Hit;
use log::debug;
use serde::Serialize;

/// Counters describing one graph build.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphSummary {
    pub triplets: usize,
    pub candidate_edges: usize,
    pub retained_edges: usize,
    pub dropped_edges: usize,
    pub compatible_edges: usize,
    pub conflict_edges: usize,
    pub sentinel_edges: usize,
    pub locked_in: usize,
    /// Free triplets excluded by a conflict with a locked-in triplet.
    pub excluded: usize,
    /// All locked-out triplets, including the excluded ones.
    pub locked_out: usize,
    pub max_negative_degree: usize,
}

/// Builds the interaction graph of one event.
#[derive(Clone, Debug)]
pub struct ConflictGraphBuilder {
    options: GraphOptions,
}

impl ConflictGraphBuilder {
    pub fn new(options: GraphOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self { options })
    }

    pub fn options(&self) -> &GraphOptions {
        &self.options
    }

    /// Computes the interactions, applies lock-in (excluding the conflicting
    /// neighbors), lock-out and the edge cap in that order, and materialises the adjacency arena. Lock states and
    /// pinned qualities are written back into `triplets`.
    pub fn build(&self, triplets: &mut [Triplet], hits: &[Hit]) -> (ConflictGraph, GraphSummary) {
        let mut edges = candidate_edges(triplets, hits, self.options.conflict_weight);
        let candidate_count = edges.len();

        let (locked_in, excluded) = apply_lock_in(triplets, &mut edges, &self.options);
        let locked_out = excluded + apply_lock_out(triplets, &mut edges, &self.options);
        let (edges, dropped_edges) = apply_cap(triplets.len(), edges, &self.options);

        let graph = ConflictGraph::from_edges(triplets.len(), &edges);
        let summary = GraphSummary {
            triplets: triplets.len(),
            candidate_edges: candidate_count,
            retained_edges: edges.len(),
            dropped_edges,
            compatible_edges: edges.iter().filter(|e| e.weight < 0.0).count(),
            conflict_edges: edges.iter().filter(|e| e.weight > 0.0).count(),
            sentinel_edges: edges.iter().filter(|e| is_sentinel(e.weight)).count(),
            locked_in,
            excluded,
            locked_out,
            max_negative_degree: (0..graph.len())
                .map(|i| graph.negative_degree(i))
                .max()
                .unwrap_or(0),
        };
        debug!(
            "ConflictGraphBuilder: {} edges retained of {} (locked in={}, out={})",
            summary.retained_edges, summary.candidate_edges, locked_in, locked_out
        );
        (graph, summary)
    }
}
