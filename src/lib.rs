//! Indexed SSSP - single-source shortest paths over a weighted directed graph
//!
//! The engine is Dijkstra's algorithm driven by an indexable binary-heap
//! priority queue: every vertex is enqueued once, and improved distances are
//! pushed into the queue in place instead of re-inserting the vertex.
//!
//! Graphs are square weight matrices where only strictly positive entries are
//! edges. Results are written into caller-owned vertex records (distance and
//! parent) and paths are rebuilt by walking parent links.

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod web;

pub use algorithm::{
    dijkstra::Dijkstra, reconstruct_path, PathStep, RunSummary, ShortestPathAlgorithm,
    ShortestPathResult, Vertex,
};
/// Re-export main types for convenient use
pub use data_structures::{IndexedPriorityQueue, QueueOrder};
pub use graph::AdjacencyMatrix;

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Cannot dequeue from an empty queue")]
    EmptyQueue,

    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    #[error("Vertex name {0:?} is not a valid row index")]
    InvalidVertexName(String),

    #[error("Vertex count {vertices} does not match graph size {graph}")]
    VertexCountMismatch { vertices: usize, graph: usize },

    #[error("Matrix row {row} has {found} entries, expected {expected}")]
    MalformedMatrix { row: usize, expected: usize, found: usize },

    #[error("Destination {0} is unreachable from the source")]
    Unreachable(usize),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
