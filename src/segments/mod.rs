//! Spatial segmentation of the detector layers.
//!
//! Every layer is partitioned into axis-aligned cells from its boundary lists
//! (x only for simplified setups, x and y otherwise). The index answers two
//! questions for the candidate builders:
//!
//! - `locate`: which segment contains a hit. Containment is inclusive and a
//!   point on a shared boundary belongs to the lower-indexed segment.
//! - `neighbors`: which segments on the next layer can be reached from a
//!   segment. Doublet search only pairs hits across reachable segments, which
//!   keeps the candidate space far below all-pairs.
//!
//! Hits whose z does not correspond to a configured layer, or that fall
//! outside the layer extent, are reported as `GeometryMismatch`, logged and
//! excluded from candidate generation.

mod index;
mod options;
mod segment;

pub use index::{HitPartition, SegmentIndex};
pub use options::SegmentOptions;
pub use segment::{DetectorGeometry, LayerGeometry, Segment, SegmentId};

#[cfg(test)]
mod tests;
