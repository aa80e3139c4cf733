use serde::{Deserialize, Serialize};

/// Options controlling hit placement and the reachable-segment search.
///
/// - `z_tolerance`: maximum |z - z_layer| for a hit to be placed on a layer.
/// - `neighbor_reach`: how many source cells the search window extends on
///   each side when mapping a segment to the next layer. `1` selects the same
///   and the directly adjacent segments for equal binnings.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentOptions {
    pub z_tolerance: f64,
    pub neighbor_reach: usize,
}

impl Default for SegmentOptions {
    fn default() -> Self {
        Self {
            z_tolerance: 1e-6,
            neighbor_reach: 1,
        }
    }
}
