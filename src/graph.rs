//! Weighted directed graphs as adjacency lists, plus a seeded random
//! generator for benchmarks and tests
//!
//! Vertices are dense indices in `[0, |V|)` and weights are non-negative
//! integers, so per-vertex state in the search algorithms can live in plain
//! vectors.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Vertex identifier: an index into the adjacency structure
pub type Vertex = usize;

/// Non-negative edge weight
pub type Weight = u64;

/// An outgoing edge: target vertex and weight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub to: Vertex,
    pub weight: Weight,
}

/// Adjacency structure: for each vertex, its outgoing edges in insertion
/// order
pub type Graph = Vec<Vec<Edge>>;

/// Generates a random directed graph with `num_edges` edges over
/// `num_nodes` vertices
///
/// Endpoints are drawn uniformly (self-loops and parallel edges are
/// possible) and weights uniformly from `0..=max_weight`. The same seed
/// always produces the same graph.
///
/// # Panics
/// Panics unless either both `num_nodes` and `num_edges` are zero, or
/// `num_edges <= num_nodes * (num_nodes - 1) / 2`.
pub fn generate_random_graph(
    num_nodes: usize,
    num_edges: usize,
    max_weight: Weight,
    seed: u64,
) -> Graph {
    assert!(
        (num_nodes == 0 && num_edges == 0)
            || num_edges <= num_nodes * num_nodes.saturating_sub(1) / 2,
        "cannot place {} edges in a graph of {} nodes",
        num_edges,
        num_nodes
    );

    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph: Graph = vec![Vec::new(); num_nodes];

    for _ in 0..num_edges {
        let from = rng.gen_range(0..num_nodes);
        let to = rng.gen_range(0..num_nodes);
        let weight = rng.gen_range(0..=max_weight);
        graph[from].push(Edge { to, weight });
    }

    graph
}
