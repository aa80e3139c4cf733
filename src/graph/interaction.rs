use crate::angle::polyline_deviation;
use crate::triplets::Triplet;
use crate::types::Hit;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::Serialize;

/// Undirected interaction between triplets `i < j`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct RawEdge {
    pub i: usize,
    pub j: usize,
    pub weight: f64,
}

/// How two hit-sharing triplets relate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Relation {
    /// One triplet extends the other by one layer (two shared hits).
    Continuation,
    /// The second triplet starts on the first one's last hit.
    Chain,
    /// Any other sharing; both cannot be true at once.
    Conflict,
}

/// Relation between two triplets, `None` when they share no hit or are
/// identical.
pub fn relation(a: &Triplet, b: &Triplet) -> Option<Relation> {
    match a.shared_hits(b) {
        0 | 3 => None,
        2 if a.continued_by(b) || b.continued_by(a) => Some(Relation::Continuation),
        1 if a.chained_by(b) || b.chained_by(a) => Some(Relation::Chain),
        _ => Some(Relation::Conflict),
    }
}

/// Interaction weight of a triplet pair. Compatible pairs get
/// `min(0, -1 + m)` with `m` the angular deviation over the joined hits;
/// conflicts get `conflict_weight`. Zero weights carry no information and are
/// reported as `None`.
pub fn interaction_weight(
    a: &Triplet,
    b: &Triplet,
    hits: &[Hit],
    conflict_weight: f64,
) -> Option<f64> {
    let weight = match relation(a, b)? {
        Relation::Conflict => conflict_weight,
        Relation::Continuation | Relation::Chain => {
            let (inner, outer) = if hits[a.hits[0]].z() <= hits[b.hits[0]].z() {
                (a, b)
            } else {
                (b, a)
            };
            let mut chain: Vec<usize> = inner.hits.to_vec();
            chain.extend(outer.hits.iter().filter(|h| !inner.hits.contains(h)));
            let points: Vec<[f64; 3]> = chain
                .iter()
                .map(|&h| [hits[h].x(), hits[h].y(), hits[h].z()])
                .collect();
            (polyline_deviation(&points) - 1.0).min(0.0)
        }
    };
    (weight != 0.0).then_some(weight)
}

/// Flat list of every nonzero interaction, ordered by `(i, j)`.
pub fn candidate_edges(triplets: &[Triplet], hits: &[Hit], conflict_weight: f64) -> Vec<RawEdge> {
    let mut by_hit: Vec<Vec<usize>> = vec![Vec::new(); hits.len()];
    for (idx, t) in triplets.iter().enumerate() {
        for &h in &t.hits {
            by_hit[h].push(idx);
        }
    }

    let edges_of = |i: usize| -> Vec<RawEdge> {
        let mut partners: Vec<usize> = triplets[i]
            .hits
            .iter()
            .flat_map(|&h| by_hit[h].iter().copied())
            .filter(|&j| j > i)
            .collect();
        partners.sort_unstable();
        partners.dedup();
        partners
            .into_iter()
            .filter_map(|j| {
                interaction_weight(&triplets[i], &triplets[j], hits, conflict_weight)
                    .map(|weight| RawEdge { i, j, weight })
            })
            .collect()
    };

    #[cfg(feature = "parallel")]
    let per_triplet: Vec<Vec<RawEdge>> =
        (0..triplets.len()).into_par_iter().map(edges_of).collect();
    #[cfg(not(feature = "parallel"))]
    let per_triplet: Vec<Vec<RawEdge>> = (0..triplets.len()).map(edges_of).collect();

    per_triplet.into_iter().flatten().collect()
}
