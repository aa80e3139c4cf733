use super::options::SegmentOptions;
use super::segment::{DetectorGeometry, LayerGeometry, Segment, SegmentId};
use crate::error::{RecoError, Result};
use crate::types::{Hit, HitId};
use log::{debug, warn};
use nalgebra::Point3;

/// Spatial partition of every detector layer with precomputed next-layer
/// reachability.
#[derive(Clone, Debug)]
pub struct SegmentIndex {
    layers: Vec<LayerGeometry>,
    segments: Vec<Vec<Segment>>,
    neighbors: Vec<Vec<Vec<SegmentId>>>,
    options: SegmentOptions,
}

/// Hits of one event distributed over the segments. Entries are indices into
/// the event's hit slice.
#[derive(Clone, Debug, Default)]
pub struct HitPartition {
    pub cells: Vec<Vec<Vec<usize>>>,
    pub placed: usize,
    pub rejected: usize,
}

impl HitPartition {
    pub fn hits_in(&self, id: SegmentId) -> &[usize] {
        self.cells
            .get(id.layer)
            .and_then(|layer| layer.get(id.index))
            .map_or(&[], |hits| hits.as_slice())
    }

    pub fn layer_count(&self) -> usize {
        self.cells.len()
    }
}

impl SegmentIndex {
    pub fn new(geometry: &DetectorGeometry, options: SegmentOptions) -> Result<Self> {
        validate_geometry(geometry, &options)?;

        let segments: Vec<Vec<Segment>> = geometry
            .layers
            .iter()
            .enumerate()
            .map(|(layer_idx, layer)| build_layer_segments(layer_idx, layer))
            .collect();

        let mut neighbors = Vec::with_capacity(segments.len());
        for (layer_idx, layer_segments) in segments.iter().enumerate() {
            let next = segments.get(layer_idx + 1);
            let per_segment = layer_segments
                .iter()
                .map(|source| match next {
                    Some(targets) => reachable(source, targets, options.neighbor_reach),
                    None => Vec::new(),
                })
                .collect();
            neighbors.push(per_segment);
        }

        debug!(
            "SegmentIndex: {} layers, {} segments",
            segments.len(),
            segments.iter().map(Vec::len).sum::<usize>()
        );

        Ok(Self {
            layers: geometry.layers.clone(),
            segments,
            neighbors,
            options,
        })
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    pub fn layer_z(&self, layer: usize) -> Option<f64> {
        self.layers.get(layer).map(|l| l.z)
    }

    /// z of the innermost layer, used as the extrapolation reference.
    pub fn reference_z(&self) -> f64 {
        self.layers.first().map_or(0.0, |l| l.z)
    }

    pub fn segments(&self, layer: usize) -> &[Segment] {
        self.segments.get(layer).map_or(&[], |s| s.as_slice())
    }

    pub fn segment(&self, id: SegmentId) -> Option<&Segment> {
        self.segments.get(id.layer)?.get(id.index)
    }

    /// Layer whose z matches within the configured tolerance.
    pub fn layer_at(&self, z: f64) -> Option<usize> {
        self.layers
            .iter()
            .position(|l| (l.z - z).abs() <= self.options.z_tolerance)
    }

    /// Segment containing `position`. Boundaries are inclusive and a point on
    /// a shared boundary belongs to the lower-indexed segment.
    pub fn locate(&self, position: &Point3<f64>) -> Result<SegmentId> {
        let layer_idx = self.layer_at(position.z).ok_or_else(|| {
            mismatch(None, format!("z={} matches no configured layer", position.z))
        })?;
        let layer = &self.layers[layer_idx];
        let ix = bin_of(&layer.x_edges, position.x).ok_or_else(|| {
            mismatch(None, format!("x={} outside layer {layer_idx}", position.x))
        })?;
        let iy = match &layer.y_edges {
            Some(edges) => bin_of(edges, position.y).ok_or_else(|| {
                mismatch(None, format!("y={} outside layer {layer_idx}", position.y))
            })?,
            None => 0,
        };
        Ok(SegmentId {
            layer: layer_idx,
            index: ix * layer.y_bins() + iy,
        })
    }

    /// Locates a hit and checks its declared layer against the geometry.
    pub fn locate_hit(&self, hit: &Hit) -> Result<SegmentId> {
        let id = self.locate(&hit.position).map_err(|err| match err {
            RecoError::GeometryMismatch { reason, .. } => mismatch(Some(hit.id), reason),
            other => other,
        })?;
        if id.layer != hit.layer {
            return Err(mismatch(
                Some(hit.id),
                format!("declared layer {} but z lies on layer {}", hit.layer, id.layer),
            ));
        }
        Ok(id)
    }

    /// Segments on the next layer reachable from `id`.
    pub fn neighbors(&self, id: SegmentId) -> &[SegmentId] {
        self.neighbors
            .get(id.layer)
            .and_then(|layer| layer.get(id.index))
            .map_or(&[], |n| n.as_slice())
    }

    /// Places every hit into its segment. Hits that do not match the geometry
    /// are logged and left out of candidate generation.
    pub fn partition(&self, hits: &[Hit]) -> HitPartition {
        let mut cells: Vec<Vec<Vec<usize>>> = self
            .segments
            .iter()
            .map(|layer| vec![Vec::new(); layer.len()])
            .collect();
        let mut placed = 0usize;
        let mut rejected = 0usize;
        for (idx, hit) in hits.iter().enumerate() {
            match self.locate_hit(hit) {
                Ok(id) => {
                    cells[id.layer][id.index].push(idx);
                    placed += 1;
                }
                Err(err) => {
                    warn!("{err}; hit excluded");
                    rejected += 1;
                }
            }
        }
        HitPartition {
            cells,
            placed,
            rejected,
        }
    }
}

fn mismatch(hit: Option<HitId>, reason: String) -> RecoError {
    RecoError::GeometryMismatch { hit, reason }
}

fn bin_of(edges: &[f64], value: f64) -> Option<usize> {
    let first = *edges.first()?;
    let last = *edges.last()?;
    if !value.is_finite() || value < first || value > last {
        return None;
    }
    // Upper edges strictly below `value`; a value on edge k+1 stays in bin k.
    let k = edges[1..].partition_point(|&e| e < value);
    Some(k.min(edges.len() - 2))
}

fn build_layer_segments(layer_idx: usize, layer: &LayerGeometry) -> Vec<Segment> {
    let ny = layer.y_bins();
    let mut out = Vec::with_capacity(layer.x_bins() * ny);
    for ix in 0..layer.x_bins() {
        for iy in 0..ny {
            let y_range = layer
                .y_edges
                .as_ref()
                .map(|edges| [edges[iy], edges[iy + 1]]);
            out.push(Segment {
                id: SegmentId {
                    layer: layer_idx,
                    index: ix * ny + iy,
                },
                x_range: [layer.x_edges[ix], layer.x_edges[ix + 1]],
                y_range,
            });
        }
    }
    out
}

#[inline]
fn overlaps_open(a: [f64; 2], b: [f64; 2]) -> bool {
    a[0] < b[1] && b[0] < a[1]
}

fn reachable(source: &Segment, targets: &[Segment], reach: usize) -> Vec<SegmentId> {
    let pad_x = source.width_x() * reach as f64;
    let window_x = [source.x_range[0] - pad_x, source.x_range[1] + pad_x];
    let window_y = source.y_range.zip(source.width_y()).map(|(r, w)| {
        let pad = w * reach as f64;
        [r[0] - pad, r[1] + pad]
    });
    targets
        .iter()
        .filter(|t| overlaps_open(window_x, t.x_range))
        .filter(|t| match (window_y, t.y_range) {
            (Some(wy), Some(ty)) => overlaps_open(wy, ty),
            _ => true,
        })
        .map(|t| t.id)
        .collect()
}

fn validate_geometry(geometry: &DetectorGeometry, options: &SegmentOptions) -> Result<()> {
    if geometry.layers.len() < 3 {
        return Err(RecoError::Configuration(format!(
            "geometry needs at least 3 layers to form triplets, got {}",
            geometry.layers.len()
        )));
    }
    if !(options.z_tolerance.is_finite() && options.z_tolerance >= 0.0) {
        return Err(RecoError::Configuration(format!(
            "z_tolerance must be finite and non-negative, got {}",
            options.z_tolerance
        )));
    }
    for (idx, layer) in geometry.layers.iter().enumerate() {
        check_edges(idx, "x", &layer.x_edges)?;
        if let Some(edges) = &layer.y_edges {
            check_edges(idx, "y", edges)?;
        }
    }
    for pair in geometry.layers.windows(2) {
        if pair[1].z - pair[0].z <= options.z_tolerance {
            return Err(RecoError::Configuration(format!(
                "layers must be strictly increasing in z (z={} followed by z={})",
                pair[0].z, pair[1].z
            )));
        }
    }
    Ok(())
}

fn check_edges(layer: usize, axis: &str, edges: &[f64]) -> Result<()> {
    if edges.len() < 2 {
        return Err(RecoError::Configuration(format!(
            "layer {layer}: {axis} boundary list needs at least two edges"
        )));
    }
    if edges.iter().any(|e| !e.is_finite()) || edges.windows(2).any(|w| w[1] <= w[0]) {
        return Err(RecoError::Configuration(format!(
            "layer {layer}: {axis} boundaries must be finite and strictly increasing"
        )));
    }
    Ok(())
}
