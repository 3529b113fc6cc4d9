use log::{debug, trace};

use crate::algorithm::traits::{RunSummary, ShortestPathAlgorithm, Vertex};
use crate::data_structures::{IndexedPriorityQueue, QueueOrder};
use crate::graph::{Graph, Weight};
use crate::{Error, Result};

/// Dijkstra's algorithm over an indexable priority queue.
///
/// Every vertex is enqueued up front; a vertex is settled when it is
/// dequeued, and improved distances are pushed into the queue in place.
/// Distances are only guaranteed minimal when no negative cycle is reachable.
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }

    /// Resets every vertex to the sentinel distance and no parent, then sets
    /// the source distance to zero.
    pub fn initialize_single_source<W: Weight>(vertices: &mut [Vertex<W>], source: usize) {
        for vertex in vertices.iter_mut() {
            vertex.distance = W::max_value();
            vertex.parent = None;
        }
        if let Some(vertex) = vertices.get_mut(source) {
            vertex.distance = W::zero();
        }
    }

    /// Improves `v` through `u` if `distance[u] + weight < distance[v]`.
    /// Returns true when `v` changed; out-of-range indices change nothing.
    pub fn relax<W: Weight>(vertices: &mut [Vertex<W>], u: usize, v: usize, weight: W) -> bool {
        let du = match vertices.get(u) {
            Some(vertex) if vertex.is_reachable() => vertex.distance,
            _ => return false,
        };
        let target = match vertices.get_mut(v) {
            Some(vertex) => vertex,
            None => return false,
        };
        // An overflowing sum is never shorter than a representable distance.
        match du.checked_add(&weight) {
            Some(candidate) if candidate < target.distance => {
                target.distance = candidate;
                target.parent = Some(u);
                true
            }
            _ => false,
        }
    }
}

/// Maps each vertex name to its graph row, rejecting names that are not a
/// valid row index.
pub(crate) fn resolve_rows<W: Weight>(vertices: &[Vertex<W>], vertex_count: usize) -> Result<Vec<usize>> {
    vertices
        .iter()
        .map(|vertex| match vertex.name.trim().parse::<usize>() {
            Ok(row) if row < vertex_count => Ok(row),
            _ => Err(Error::InvalidVertexName(vertex.name.clone())),
        })
        .collect()
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Weight,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn run(&self, vertices: &mut [Vertex<W>], graph: &G, source: usize) -> Result<RunSummary> {
        let n = graph.vertex_count();
        if vertices.len() != n {
            return Err(Error::VertexCountMismatch {
                vertices: vertices.len(),
                graph: n,
            });
        }
        if source >= n {
            return Err(Error::InvalidVertex(source));
        }
        let rows = resolve_rows(vertices, n)?;

        debug!("Running Dijkstra from vertex {} on {} vertices", source, n);

        Self::initialize_single_source(vertices, source);

        let mut queue = IndexedPriorityQueue::with_capacity(QueueOrder::Min, n);
        for (index, vertex) in vertices.iter().enumerate() {
            queue.enqueue(vertex.distance, index);
        }

        let mut summary = RunSummary {
            settled: Vec::with_capacity(n),
            ..RunSummary::default()
        };

        while !queue.is_empty() {
            let u = queue.dequeue()?;
            summary.settled.push(u);
            trace!("Settled vertex {} at distance {:?}", u, vertices[u].distance);

            for (v, weight) in graph.outgoing_edges(rows[u]) {
                if v >= n {
                    return Err(Error::InvalidVertex(v));
                }
                if Self::relax(vertices, u, v, weight) {
                    summary.edges_relaxed += 1;
                    trace!("Relaxed {} -> {}: distance {:?}", u, v, vertices[v].distance);
                    if queue.is_in_queue(&v) {
                        queue.update_priority(&v, vertices[v].distance);
                        summary.priority_updates += 1;
                    }
                }
            }
        }

        debug!(
            "Dijkstra settled {} vertices with {} improving relaxations",
            summary.settled.len(),
            summary.edges_relaxed
        );

        Ok(summary)
    }
}
