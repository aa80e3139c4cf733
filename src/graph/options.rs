use crate::error::{RecoError, Result};
use serde::{Deserialize, Serialize};

/// Interaction weight meaning "never select both".
pub const SENTINEL_WEIGHT: f64 = 1.0;

/// Pruning and lock rules of the interaction graph.
///
/// - `lock_in_quality_threshold`: triplets above this quality are locked in
///   and their conflicts become sentinel edges.
/// - `max_sentinel_edges`: a free triplet with more sentinel edges than this
///   is locked out.
/// - `retained_edges_per_triplet`: at most this many compatible (negative)
///   edges survive per triplet.
/// - `min_connection_weight`: optional cutoff; compatible edges weaker
///   (closer to zero) than this are dropped before the cap.
/// - `conflict_weight`: weight given to hit-sharing conflicts.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GraphOptions {
    pub lock_in_quality_threshold: f64,
    pub max_sentinel_edges: usize,
    pub retained_edges_per_triplet: usize,
    #[serde(default)]
    pub min_connection_weight: Option<f64>,
    #[serde(default = "default_conflict_weight")]
    pub conflict_weight: f64,
}

fn default_conflict_weight() -> f64 {
    SENTINEL_WEIGHT
}

impl GraphOptions {
    pub fn new(
        lock_in_quality_threshold: f64,
        max_sentinel_edges: usize,
        retained_edges_per_triplet: usize,
    ) -> Self {
        Self {
            lock_in_quality_threshold,
            max_sentinel_edges,
            retained_edges_per_triplet,
            min_connection_weight: None,
            conflict_weight: default_conflict_weight(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.lock_in_quality_threshold.is_finite() {
            return Err(RecoError::Configuration(format!(
                "lock_in_quality_threshold must be finite, got {}",
                self.lock_in_quality_threshold
            )));
        }
        if let Some(cutoff) = self.min_connection_weight {
            if !(-1.0..=0.0).contains(&cutoff) {
                return Err(RecoError::Configuration(format!(
                    "min_connection_weight must lie in [-1, 0], got {cutoff}"
                )));
            }
        }
        if !(self.conflict_weight > 0.0 && self.conflict_weight <= SENTINEL_WEIGHT) {
            return Err(RecoError::Configuration(format!(
                "conflict_weight must lie in (0, {SENTINEL_WEIGHT}], got {}",
                self.conflict_weight
            )));
        }
        Ok(())
    }
}
