use serde::{Deserialize, Serialize};

/// How the visiting order of a sweep is derived.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStrategy {
    /// Triplet index order.
    #[default]
    Natural,
    /// Smallest `|delta|` first, recomputed before every sweep.
    Impact,
    /// Triplets with the strongest compatible edge first.
    Connection,
}

/// Options of the repeated-sweep coordinator.
///
/// - `max_sweeps`: upper bound on sweeps; the run stops earlier once a sweep
///   accepts no flip.
/// - `reverse`: traverse the first sweep in reverse order.
/// - `alternate_direction`: flip the traversal direction after each sweep.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverOptions {
    pub max_sweeps: usize,
    pub order: OrderStrategy,
    pub reverse: bool,
    pub alternate_direction: bool,
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self {
            max_sweeps: 16,
            order: OrderStrategy::Natural,
            reverse: false,
            alternate_direction: true,
        }
    }
}
