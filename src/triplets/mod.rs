//! Triplet construction and scoring.
//!
//! A triplet joins two doublets sharing their middle hit. Before a triplet is
//! materialised two cuts apply:
//!
//! - scattering ratio: each doublet's `dx / (x0 * |dz|)`, with `x0` the
//!   doublet extrapolated to the innermost layer, must lie in
//!   `dx_x0_range` (and `dy_x0_range` on y when configured);
//! - angular deviation: `sqrt(std(xz)^2 + std(yz)^2)` over the two doublets
//!   must stay below `angle_tolerance`.
//!
//! Survivors get a quality in `[-1, 1]`, `1` for a perfectly straight,
//! consistent hit chain.

mod builder;
mod options;
mod triplet;

pub use builder::{TripletBuilder, TripletSet, TripletStats};
pub use options::TripletOptions;
pub use triplet::{LockState, Triplet, TripletId};
