use std::env;
use std::time::{Duration, Instant};

use indexed_sssp::algorithm::vertices_for;
use indexed_sssp::graph::generators::generate_random_matrix;
use indexed_sssp::graph::{AdjacencyMatrix, Graph};
use indexed_sssp::{Dijkstra, ShortestPathAlgorithm};

// Function to benchmark the engine on a graph
fn benchmark_graph(graph: &AdjacencyMatrix<i64>, source: usize) -> Result<Duration, indexed_sssp::Error> {
    println!("Running Dijkstra on graph with {} vertices...", graph.vertex_count());

    let mut vertices = vertices_for::<i64>(graph.vertex_count());
    let start = Instant::now();
    let summary = Dijkstra::new().run(&mut vertices, graph, source)?;
    let duration = start.elapsed();

    // Count reachable vertices
    let reachable = vertices.iter().filter(|v| v.is_reachable()).count();
    println!(
        "  - Found {} reachable vertices ({} relaxations) in {:?}",
        reachable, summary.edges_relaxed, duration
    );

    Ok(duration)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let edge_factor: f64 = args.get(1).and_then(|a| a.parse().ok()).unwrap_or(4.0);
    let seed: u64 = args.get(2).and_then(|a| a.parse().ok()).unwrap_or(42);

    // Dense matrices: memory grows with the square of the vertex count
    let graph_sizes = vec![100, 500, 1_000, 2_000, 4_000];

    println!("=====================================================");
    println!("Benchmark: indexed-queue Dijkstra");
    println!("Edge factor: {} edges per vertex (on average), seed {}", edge_factor, seed);
    println!("=====================================================");

    let mut results = Vec::new();

    for &size in &graph_sizes {
        println!("\nGenerating random graph with {} vertices...", size);
        let graph = generate_random_matrix(size, edge_factor, 100, seed);
        println!("Graph has {} vertices and {} edges", graph.vertex_count(), graph.edge_count());

        let duration = benchmark_graph(&graph, 0)?;
        results.push((size, graph.edge_count(), duration));
    }

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<10} | {:<10} | {:<12}", "Vertices", "Edges", "Time (ms)");
    println!("-----------------------------------------------------");

    for (size, edges, duration) in &results {
        println!("{:<10} | {:<10} | {:<12.3}", size, edges, duration.as_secs_f64() * 1000.0);
    }

    Ok(())
}
