//! Event-level orchestration of the reconstruction stages.
//!
//! Overview
//! - Hits are placed on the [`SegmentIndex`](crate::segments::SegmentIndex);
//!   mismatched hits are logged and dropped.
//! - Doublets pair hits across reachable segments of consecutive layers;
//!   triplets join doublets on their shared hit and pass the scattering and
//!   angular cuts.
//! - The interaction graph scores triplet pairs and applies the lock-in,
//!   lock-out and cap rules.
//! - The QUBO engine turns qualities and weights into coefficients.
//! - [`TrackReconstructor::process`] solves with the bit-flip solver and
//!   chains the kept triplets into xplets; [`TrackReconstructor::prepare`]
//!   stops before solving for external solvers.
//!
//! Modules
//! - [`params`] – validated stage parameters.
//! - `pipeline` – the [`TrackReconstructor`] implementation.

pub mod params;
mod pipeline;

pub use params::ReconstructionParams;
pub use pipeline::{PreparedEvent, TrackReconstructor};
