//! Seeded random instance generators.
//!
//! Every generator draws from an explicitly injected [`Rng`], so a fixed
//! seed reproduces the same instance, search run, and comparison.

use std::collections::BTreeSet;

use rand::seq::SliceRandom;
use rand::Rng;
use rand_distr::StandardNormal;

use crate::assignment::CostMatrix;
use crate::partition::Graph;

/// Random `n`×`n` cost matrix with i.i.d. standard-normal entries.
pub fn random_matrix<R: Rng>(n: usize, rng: &mut R) -> Result<CostMatrix, String> {
    let rows: Vec<Vec<f64>> = (0..n)
        .map(|_| (0..n).map(|_| rng.sample::<f64, _>(StandardNormal)).collect())
        .collect();
    CostMatrix::new(rows)
}

/// Random undirected graph where each vertex pair is an edge with
/// probability `p`.
pub fn random_graph<R: Rng>(n: usize, p: f64, rng: &mut R) -> Result<Graph, String> {
    if !(0.0..=1.0).contains(&p) {
        return Err(format!("edge probability must be in [0, 1], got {p}"));
    }
    let mut edges = Vec::new();
    for a in 0..n {
        for b in (a + 1)..n {
            if rng.random::<f64>() < p {
                edges.push((a, b));
            }
        }
    }
    Graph::new(n, edges)
}

/// Uniformly random permutation of `0..n`.
pub fn random_permutation<R: Rng>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut permutation: Vec<usize> = (0..n).collect();
    permutation.shuffle(rng);
    permutation
}

/// Uniformly random subset of `⌊n/2⌋` of the vertices `0..n`.
pub fn random_partition<R: Rng>(n: usize, rng: &mut R) -> BTreeSet<usize> {
    let mut vertices: Vec<usize> = (0..n).collect();
    vertices.shuffle(rng);
    vertices.truncate(n / 2);
    vertices.into_iter().collect()
}
