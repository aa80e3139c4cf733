//! Error type shared by every reconstruction stage.
//!
//! Data-level anomalies (`GeometryMismatch` for a single hit,
//! `StructuralInconsistency`, `NumericDegeneracy`) are recovered locally by the
//! stage that detects them and only logged. `MissingCoefficient` and
//! `Configuration` signal a broken pipeline and are propagated to the caller.

use crate::types::HitId;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Error)]
pub enum RecoError {
    /// A hit does not map onto any configured layer or segment.
    #[error("{} does not match the detector geometry: {reason}", hit_label(.hit))]
    GeometryMismatch { hit: Option<HitId>, reason: String },

    /// Two doublets were paired although they do not share their middle hit.
    #[error("doublets ({first_leading}, {first_trailing}) and ({second_leading}, {second_trailing}) do not share a hit")]
    StructuralInconsistency {
        first_leading: HitId,
        first_trailing: HitId,
        second_leading: HitId,
        second_trailing: HitId,
    },

    /// QUBO assembly was requested before qualities or interactions were final.
    #[error("missing coefficient for triplet {index}: {reason}")]
    MissingCoefficient { index: usize, reason: &'static str },

    /// The linear fit cannot be performed on the given hits.
    #[error("degenerate fit: {distinct_z} distinct z values (need at least {minimum})")]
    NumericDegeneracy { distinct_z: usize, minimum: usize },

    /// A required threshold is absent or invalid.
    #[error("invalid configuration: {0}")]
    Configuration(String),
}

fn hit_label(hit: &Option<HitId>) -> String {
    match hit {
        Some(id) => format!("hit {id}"),
        None => "position".to_string(),
    }
}

pub type Result<T> = std::result::Result<T, RecoError>;
