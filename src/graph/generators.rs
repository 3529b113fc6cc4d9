use crate::graph::{AdjacencyMatrix, MutableGraph};
use rand::prelude::*;
use rand::rngs::StdRng;

/// Generates a random directed graph with roughly `edge_factor * n` edges.
/// Weights are drawn from `1..=max_weight`; the same seed gives the same graph.
pub fn generate_random_matrix(n: usize, edge_factor: f64, max_weight: i64, seed: u64) -> AdjacencyMatrix<i64> {
    let mut graph: AdjacencyMatrix<i64> = AdjacencyMatrix::with_capacity(n);
    if n < 2 {
        return graph;
    }
    let mut rng = StdRng::seed_from_u64(seed);

    let num_edges = (edge_factor * n as f64) as usize;
    let max_weight = max_weight.max(1);

    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        // Avoid self-loops
        if u != v {
            graph.add_edge(u, v, rng.gen_range(1..=max_weight));
        }
    }

    graph
}

/// Generates a `width` x `height` grid with unit-weight edges between
/// 4-connected neighbours in both directions. Vertex `(x, y)` has id `y * width + x`.
pub fn generate_grid_matrix(width: usize, height: usize) -> AdjacencyMatrix<i64> {
    let mut graph: AdjacencyMatrix<i64> = AdjacencyMatrix::with_capacity(width * height);

    for y in 0..height {
        for x in 0..width {
            let current = y * width + x;
            if x + 1 < width {
                graph.add_edge(current, current + 1, 1);
                graph.add_edge(current + 1, current, 1);
            }
            if y + 1 < height {
                graph.add_edge(current, current + width, 1);
                graph.add_edge(current + width, current, 1);
            }
        }
    }

    graph
}
