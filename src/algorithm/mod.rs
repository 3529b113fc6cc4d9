pub mod traits;
pub mod dijkstra;
pub mod path;

pub use traits::{vertices_for, RunSummary, ShortestPathAlgorithm, ShortestPathResult, Vertex};
pub use path::{reconstruct_path, PathStep};
