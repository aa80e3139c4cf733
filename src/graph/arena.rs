use super::interaction::RawEdge;
use super::rules::is_sentinel;
use serde::Serialize;

/// One directed half of an undirected interaction.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Edge {
    pub target: usize,
    pub weight: f64,
}

/// Symmetric adjacency arena indexed by triplet position.
///
/// Built in a single pass from undirected edges, so every edge is visible
/// from both endpoints with the same weight.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ConflictGraph {
    adjacency: Vec<Vec<Edge>>,
    edge_count: usize,
}

impl ConflictGraph {
    pub fn from_edges(triplet_count: usize, edges: &[RawEdge]) -> Self {
        let mut adjacency = vec![Vec::new(); triplet_count];
        for e in edges {
            adjacency[e.i].push(Edge {
                target: e.j,
                weight: e.weight,
            });
            adjacency[e.j].push(Edge {
                target: e.i,
                weight: e.weight,
            });
        }
        for list in &mut adjacency {
            list.sort_by_key(|edge| edge.target);
        }
        Self {
            adjacency,
            edge_count: edges.len(),
        }
    }

    /// Number of triplets covered.
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Undirected edge count.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn neighbors(&self, i: usize) -> &[Edge] {
        self.adjacency.get(i).map_or(&[], |n| n.as_slice())
    }

    pub fn weight(&self, i: usize, j: usize) -> Option<f64> {
        let list = self.adjacency.get(i)?;
        list.binary_search_by_key(&j, |e| e.target)
            .ok()
            .map(|k| list[k].weight)
    }

    /// Compatible (negative) edges incident to `i`.
    pub fn negative_degree(&self, i: usize) -> usize {
        self.neighbors(i).iter().filter(|e| e.weight < 0.0).count()
    }

    pub fn sentinel_degree(&self, i: usize) -> usize {
        self.neighbors(i)
            .iter()
            .filter(|e| is_sentinel(e.weight))
            .count()
    }

    /// Undirected edges with `i < j`, ordered by `(i, j)`.
    pub fn edges(&self) -> impl Iterator<Item = RawEdge> + '_ {
        self.adjacency.iter().enumerate().flat_map(|(i, list)| {
            list.iter().filter(move |e| e.target > i).map(move |e| RawEdge {
                i,
                j: e.target,
                weight: e.weight,
            })
        })
    }

    pub fn is_symmetric(&self) -> bool {
        self.adjacency.iter().enumerate().all(|(i, list)| {
            list.iter()
                .all(|e| self.weight(e.target, i) == Some(e.weight))
        })
    }
}
