//! Graph instances for partitioning.

use std::collections::BTreeSet;

/// An undirected graph over the fixed vertex universe `0..n`.
///
/// Stored as an edge list; parallel edges are allowed and each counts
/// separately toward the cut. Immutable once constructed and shared by
/// every node of a search run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Graph {
    n: usize,
    edges: Vec<(usize, usize)>,
}

impl Graph {
    /// Builds a graph from a vertex count and an edge list.
    ///
    /// Returns an error for out-of-range endpoints or self-loops.
    pub fn new(n: usize, edges: Vec<(usize, usize)>) -> Result<Self, String> {
        for &(a, b) in &edges {
            if a >= n || b >= n {
                return Err(format!("edge ({a}, {b}) out of range for {n} vertices"));
            }
            if a == b {
                return Err(format!("self-loop at vertex {a}"));
            }
        }
        Ok(Self { n, edges })
    }

    /// Number of vertices.
    pub fn n(&self) -> usize {
        self.n
    }

    /// The edge list.
    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    /// Number of edges with exactly one endpoint in `p` (the cut size).
    ///
    /// This is the canonical partition cost: lower means fewer crossing
    /// edges.
    pub fn cutsize(&self, p: &BTreeSet<usize>) -> usize {
        self.edges
            .iter()
            .filter(|&&(a, b)| p.contains(&a) != p.contains(&b))
            .count()
    }
}
