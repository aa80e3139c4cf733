//! Bit-flip local search over a [`QuboModel`](crate::qubo::QuboModel).
//!
//! [`BitFlipSolver::sweep`] is a single coordinate-descent pass: for each
//! index in the given order it evaluates the energy change of flipping that
//! bit with all others fixed, `(1 - 2 x_i) * (a_i + sum_j b_ij x_j)`, and
//! flips only on a strict decrease. Each accepted flip is visible to the rest
//! of the sweep, so a sweep is inherently sequential.
//!
//! [`BitFlipSolver::run`] is a small coordinator repeating sweeps with an
//! ordering strategy and alternating direction until no flip is accepted.

mod bitflip;
mod options;
mod order;

pub use bitflip::{BitFlipSolver, SolveOutcome, SweepOutcome};
pub use options::{OrderStrategy, SolverOptions};
pub use order::SweepOrder;

#[cfg(test)]
mod tests;
