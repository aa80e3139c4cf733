//! Lock and pruning rules acting on the flat edge list.
//!
//! Rules run in a fixed order: lock-in (which also excludes the conflicting
//! neighbors), lock-out, cap. Each rule rewrites a shared `RawEdge` entry, so
//! both endpoints observe the same value at every step.

use super::interaction::RawEdge;
use super::options::{GraphOptions, SENTINEL_WEIGHT};
use crate::triplets::{LockState, Triplet};

#[inline]
pub(crate) fn is_sentinel(weight: f64) -> bool {
    weight >= SENTINEL_WEIGHT
}

/// Locks in triplets above the quality threshold and pins their quality to
/// `1`. Conflict edges incident to a locked-in triplet become sentinel, and
/// every free triplet on the other end of such an edge is excluded: locked
/// out with quality `-1` and all of its edges raised to sentinel. Returns the
/// number of locked-in and excluded triplets.
pub fn apply_lock_in(
    triplets: &mut [Triplet],
    edges: &mut [RawEdge],
    options: &GraphOptions,
) -> (usize, usize) {
    let mut locked = 0usize;
    for t in triplets.iter_mut() {
        if t.lock == LockState::Free
            && t
                .quality
                .is_some_and(|q| q > options.lock_in_quality_threshold)
        {
            t.lock = LockState::LockedIn;
            t.quality = Some(1.0);
            locked += 1;
        }
    }
    if locked == 0 {
        return (0, 0);
    }

    let mut rivals = Vec::new();
    for e in edges.iter_mut() {
        if e.weight <= 0.0 {
            continue;
        }
        let (li, lj) = (triplets[e.i].lock, triplets[e.j].lock);
        if li == LockState::LockedIn || lj == LockState::LockedIn {
            e.weight = SENTINEL_WEIGHT;
            if li == LockState::Free {
                rivals.push(e.i);
            }
            if lj == LockState::Free {
                rivals.push(e.j);
            }
        }
    }

    let mut excluded = 0usize;
    for r in rivals {
        let t = &mut triplets[r];
        if t.lock == LockState::Free {
            t.lock = LockState::LockedOut;
            t.quality = Some(-1.0);
            excluded += 1;
        }
    }
    if excluded > 0 {
        for e in edges.iter_mut() {
            if triplets[e.i].is_locked_out() || triplets[e.j].is_locked_out() {
                e.weight = SENTINEL_WEIGHT;
            }
        }
    }
    (locked, excluded)
}

/// Locks out free triplets with more than `max_sentinel_edges` sentinel
/// edges. Counts are taken once before any update; locked-out triplets get
/// quality `-1` and all their edges become sentinel.
pub fn apply_lock_out(
    triplets: &mut [Triplet],
    edges: &mut [RawEdge],
    options: &GraphOptions,
) -> usize {
    let mut sentinel_counts = vec![0usize; triplets.len()];
    for e in edges.iter().filter(|e| is_sentinel(e.weight)) {
        sentinel_counts[e.i] += 1;
        sentinel_counts[e.j] += 1;
    }
    let mut locked = 0usize;
    for (t, &count) in triplets.iter_mut().zip(&sentinel_counts) {
        if t.lock == LockState::Free && count > options.max_sentinel_edges {
            t.lock = LockState::LockedOut;
            t.quality = Some(-1.0);
            locked += 1;
        }
    }
    if locked == 0 {
        return 0;
    }
    for e in edges.iter_mut() {
        if triplets[e.i].is_locked_out() || triplets[e.j].is_locked_out() {
            e.weight = SENTINEL_WEIGHT;
        }
    }
    locked
}

/// Keeps at most `retained_edges_per_triplet` compatible edges per triplet
/// (most negative first, ties by neighbor index) and drops compatible edges
/// weaker than `min_connection_weight`. An edge survives only if both
/// endpoints keep it. Conflict edges are untouched. Returns the edges that
/// survive, in input order, and the number dropped.
pub fn apply_cap(
    triplet_count: usize,
    edges: Vec<RawEdge>,
    options: &GraphOptions,
) -> (Vec<RawEdge>, usize) {
    let passes_cutoff = |w: f64| options.min_connection_weight.map_or(true, |c| w <= c);

    // (weight, neighbor, edge index) of compatible edges per triplet.
    let mut incident: Vec<Vec<(f64, usize, usize)>> = vec![Vec::new(); triplet_count];
    for (k, e) in edges.iter().enumerate() {
        if e.weight < 0.0 && passes_cutoff(e.weight) {
            incident[e.i].push((e.weight, e.j, k));
            incident[e.j].push((e.weight, e.i, k));
        }
    }

    let mut votes = vec![0u8; edges.len()];
    for list in &mut incident {
        list.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));
        for &(_, _, k) in list.iter().take(options.retained_edges_per_triplet) {
            votes[k] += 1;
        }
    }

    let before = edges.len();
    let kept: Vec<RawEdge> = edges
        .into_iter()
        .zip(votes)
        .filter(|(e, v)| e.weight > 0.0 || *v == 2)
        .map(|(e, _)| e)
        .collect();
    let dropped = before - kept.len();
    (kept, dropped)
}
