use super::options::{OrderStrategy, SolverOptions};
use super::order::SweepOrder;
use crate::qubo::QuboModel;
use log::{debug, warn};
use serde::Serialize;

/// Result of a single sweep.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SweepOutcome {
    pub flips: usize,
    /// Sum of the accepted deltas; never positive.
    pub total_delta: f64,
}

/// Result of a repeated-sweep run.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SolveOutcome {
    pub sweeps: usize,
    pub flips: usize,
    pub total_delta: f64,
    pub initial_energy: f64,
    pub final_energy: f64,
    pub converged: bool,
}

/// Greedy coordinate descent on the QUBO energy.
#[derive(Clone, Debug, Default)]
pub struct BitFlipSolver {
    options: SolverOptions,
}

impl BitFlipSolver {
    pub fn new(options: SolverOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &SolverOptions {
        &self.options
    }

    /// One pass over `order` (reversed if requested). A bit is flipped iff
    /// its delta is strictly negative, so the energy never increases. Entries
    /// outside the model or the selection are skipped.
    pub fn sweep(
        model: &QuboModel,
        selection: &mut [bool],
        order: &SweepOrder,
        reverse: bool,
    ) -> SweepOutcome {
        let limit = model.len().min(selection.len());
        let mut outcome = SweepOutcome::default();
        let mut visit = |i: usize| {
            if i >= limit {
                warn!("sweep order entry {i} out of range (len {limit}); skipped");
                return;
            }
            let delta = model.flip_delta(i, selection);
            if delta < 0.0 {
                selection[i] = !selection[i];
                outcome.flips += 1;
                outcome.total_delta += delta;
            }
        };
        if reverse {
            order.0.iter().rev().for_each(|&i| visit(i));
        } else {
            order.0.iter().for_each(|&i| visit(i));
        }
        outcome
    }

    /// Repeats sweeps until one accepts no flip or `max_sweeps` is reached.
    pub fn run(&self, model: &QuboModel, selection: &mut [bool]) -> SolveOutcome {
        let initial_energy = model.energy(selection);
        let mut result = SolveOutcome {
            initial_energy,
            ..SolveOutcome::default()
        };
        let static_order = match self.options.order {
            OrderStrategy::Natural => Some(SweepOrder::natural(model.len())),
            OrderStrategy::Connection => Some(SweepOrder::by_connection(model)),
            OrderStrategy::Impact => None,
        };
        let mut reverse = self.options.reverse;
        for _ in 0..self.options.max_sweeps {
            let order = match &static_order {
                Some(order) => order.clone(),
                None => SweepOrder::by_impact(model, selection),
            };
            let outcome = Self::sweep(model, selection, &order, reverse);
            result.sweeps += 1;
            result.flips += outcome.flips;
            result.total_delta += outcome.total_delta;
            if outcome.flips == 0 {
                result.converged = true;
                break;
            }
            if self.options.alternate_direction {
                reverse = !reverse;
            }
        }
        result.final_energy = model.energy(selection);
        debug!(
            "BitFlipSolver: {} sweeps, {} flips, energy {:.4} -> {:.4}",
            result.sweeps, result.flips, result.initial_energy, result.final_energy
        );
        result
    }
}
