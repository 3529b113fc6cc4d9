use crate::algorithm::path::{reconstruct_path, PathStep};
use crate::graph::{Graph, Weight};
use crate::Result;

/// A vertex record in the arena an algorithm run mutates.
///
/// `name` must parse to the vertex's row index in the graph. `parent` is an
/// index into the same vertex slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex<W>
where
    W: Weight,
{
    pub name: String,
    pub distance: W,
    pub parent: Option<usize>,
}

impl<W> Vertex<W>
where
    W: Weight,
{
    /// Creates a vertex with no distance information yet
    pub fn new(name: impl Into<String>) -> Self {
        Vertex {
            name: name.into(),
            distance: W::max_value(),
            parent: None,
        }
    }

    /// Creates a vertex whose name is its index
    pub fn numbered(index: usize) -> Self {
        Self::new(index.to_string())
    }

    /// Returns false while the distance is still the "infinite" sentinel
    pub fn is_reachable(&self) -> bool {
        self.distance != W::max_value()
    }
}

/// Creates `n` vertices named `"0"` .. `"n-1"`
pub fn vertices_for<W: Weight>(n: usize) -> Vec<Vertex<W>> {
    (0..n).map(Vertex::numbered).collect()
}

/// Counters from a single algorithm run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Vertices in the order they were settled
    pub settled: Vec<usize>,

    /// Relaxations that improved a distance
    pub edges_relaxed: usize,

    /// Improvements that re-prioritized a vertex still in the queue
    pub priority_updates: usize,
}

/// Result of a shortest path algorithm execution
#[derive(Debug, Clone)]
pub struct ShortestPathResult<W>
where
    W: Weight,
{
    /// Final vertex records, holding distance and parent
    pub vertices: Vec<Vertex<W>>,

    /// Vertices in the order they were settled
    pub settled: Vec<usize>,

    /// Source vertex ID
    pub source: usize,

    pub edges_relaxed: usize,
    pub priority_updates: usize,
}

impl<W> ShortestPathResult<W>
where
    W: Weight,
{
    /// Distance to `vertex`, or None if it is unreachable or out of range
    pub fn distance(&self, vertex: usize) -> Option<W> {
        self.vertices
            .get(vertex)
            .filter(|v| v.is_reachable())
            .map(|v| v.distance)
    }

    /// Predecessor of `vertex` in the shortest path tree
    pub fn parent(&self, vertex: usize) -> Option<usize> {
        self.vertices.get(vertex).and_then(|v| v.parent)
    }

    /// Path from the source to `destination` with cumulative distances
    pub fn path_to(&self, destination: usize) -> Result<Vec<PathStep<W>>> {
        reconstruct_path(&self.vertices, self.source, destination)
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Weight,
    G: Graph<W>,
{
    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Computes shortest paths from `source`, writing distance and parent into
    /// the caller's vertex records.
    fn run(&self, vertices: &mut [Vertex<W>], graph: &G, source: usize) -> Result<RunSummary>;

    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        let mut vertices = vertices_for(graph.vertex_count());
        let summary = self.run(&mut vertices, graph, source)?;

        Ok(ShortestPathResult {
            vertices,
            settled: summary.settled,
            source,
            edges_relaxed: summary.edges_relaxed,
            priority_updates: summary.priority_updates,
        })
    }

    /// Get the shortest path from source to target as a sequence of vertices
    fn get_path(&self, result: &ShortestPathResult<W>, target: usize) -> Result<Vec<usize>> {
        let steps = result.path_to(target)?;
        Ok(steps.into_iter().map(|step| step.vertex).collect())
    }
}
