//! QUBO coefficient assembly.
//!
//! Selecting triplet `i` contributes `a_i = -f * quality_i`, so better
//! triplets lower the energy. Every retained interaction edge contributes
//! `b_ij = f * w_ij` when both endpoints are selected. The rescale factor `f`
//! brings the coefficients into the magnitude range expected by the solver.

mod engine;
mod model;
mod options;

pub use engine::QuboCoefficientEngine;
pub use model::{CoefficientSummary, QuadraticTerm, QuboModel, TermStats};
pub use options::QuboOptions;
