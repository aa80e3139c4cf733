//! Triplet interaction graph.
//!
//! Weights follow the QUBO energy convention: a negative weight rewards
//! keeping both triplets (one continues the other), a positive weight
//! penalises it (they share hits inconsistently). `SENTINEL_WEIGHT` marks a
//! forced exclusion.
//!
//! Construction runs in three phases. Candidate edges between hit-sharing
//! triplets are computed read-only (in parallel with the `parallel` feature)
//! into a flat list of `(i, j, w)` with `i < j`. The lock-in, lock-out and cap
//! rules then rewrite that list in a fixed order. Finally a single pass builds
//! the symmetric [`ConflictGraph`] arena.

mod arena;
mod builder;
mod interaction;
mod options;
mod rules;

pub use arena::{ConflictGraph, Edge};
pub use builder::{ConflictGraphBuilder, GraphSummary};
pub use interaction::{candidate_edges, interaction_weight, relation, RawEdge, Relation};
pub use options::{GraphOptions, SENTINEL_WEIGHT};
pub use rules::{apply_cap, apply_lock_in, apply_lock_out};
