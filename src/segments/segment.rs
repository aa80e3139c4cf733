use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a detector segment: layer number plus the cell index inside
/// the layer (`ix * ny + iy`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SegmentId {
    pub layer: usize,
    pub index: usize,
}

impl fmt::Display for SegmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "L{}_S{}", self.layer, self.index)
    }
}

/// Boundaries of one detector layer as supplied by the geometry description.
///
/// `x_edges` holds the strictly increasing segment boundaries along x.
/// `y_edges` is `None` for simplified setups partitioned along x only.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LayerGeometry {
    pub z: f64,
    pub x_edges: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_edges: Option<Vec<f64>>,
}

impl LayerGeometry {
    /// Uniform binning of `[x_min, x_max]` into `bins` segments.
    pub fn uniform(z: f64, x_min: f64, x_max: f64, bins: usize) -> Self {
        Self {
            z,
            x_edges: uniform_edges(x_min, x_max, bins),
            y_edges: None,
        }
    }

    pub fn with_uniform_y(mut self, y_min: f64, y_max: f64, bins: usize) -> Self {
        self.y_edges = Some(uniform_edges(y_min, y_max, bins));
        self
    }

    pub(crate) fn x_bins(&self) -> usize {
        self.x_edges.len().saturating_sub(1)
    }

    pub(crate) fn y_bins(&self) -> usize {
        self.y_edges
            .as_ref()
            .map_or(1, |edges| edges.len().saturating_sub(1))
    }
}

/// Layers ordered from the innermost (lowest z) to the outermost.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DetectorGeometry {
    pub layers: Vec<LayerGeometry>,
}

fn uniform_edges(min: f64, max: f64, bins: usize) -> Vec<f64> {
    let bins = bins.max(1);
    let step = (max - min) / bins as f64;
    (0..=bins)
        .map(|k| if k == bins { max } else { min + k as f64 * step })
        .collect()
}

/// Axis-aligned extent of one segment.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Segment {
    pub id: SegmentId,
    pub x_range: [f64; 2],
    pub y_range: Option<[f64; 2]>,
}

impl Segment {
    pub(crate) fn width_x(&self) -> f64 {
        self.x_range[1] - self.x_range[0]
    }

    pub(crate) fn width_y(&self) -> Option<f64> {
        self.y_range.map(|r| r[1] - r[0])
    }
}
