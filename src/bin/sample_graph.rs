use indexed_sssp::algorithm::vertices_for;
use indexed_sssp::{reconstruct_path, AdjacencyMatrix, Dijkstra, ShortestPathAlgorithm};
use log::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let graph = AdjacencyMatrix::<i32>::from_rows(vec![
        vec![0, 0, 0, 3, 12],
        vec![0, 0, 2, 0, 0],
        vec![0, 0, 0, -2, 0],
        vec![0, 5, 3, 0, 0],
        vec![0, 0, 7, 0, 0],
    ])?;
    let source = 0;
    let destination = 2;

    let mut vertices = vertices_for::<i32>(5);
    let summary = Dijkstra::new().run(&mut vertices, &graph, source)?;

    for &v in &summary.settled {
        info!("Settled vertex {} at distance {}", vertices[v].name, vertices[v].distance);
    }

    for step in reconstruct_path(&vertices, source, destination)? {
        println!("Vertex {} Weight: {}", vertices[step.vertex].name, step.distance);
    }

    Ok(())
}
