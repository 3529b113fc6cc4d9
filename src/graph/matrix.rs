use crate::graph::traits::{Graph, MutableGraph, Weight};
use crate::{Error, Result};

/// A directed graph stored as a square weight matrix.
///
/// Entry `[i][j]` is the weight of the edge `i -> j`. Only strictly positive
/// entries are edges: zero means "no edge", and negative entries are kept in
/// the matrix but never reported as edges. A genuine zero-weight edge cannot
/// be expressed in this representation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyMatrix<W>
where
    W: Weight,
{
    rows: Vec<Vec<W>>,
}

impl<W> AdjacencyMatrix<W>
where
    W: Weight,
{
    /// Creates a graph with `vertices` vertices and no edges
    pub fn with_capacity(vertices: usize) -> Self {
        AdjacencyMatrix {
            rows: vec![vec![W::zero(); vertices]; vertices],
        }
    }

    /// Builds a graph from matrix rows, rejecting non-square input
    pub fn from_rows(rows: Vec<Vec<W>>) -> Result<Self> {
        let n = rows.len();
        for (row, entries) in rows.iter().enumerate() {
            if entries.len() != n {
                return Err(Error::MalformedMatrix {
                    row,
                    expected: n,
                    found: entries.len(),
                });
            }
        }
        Ok(AdjacencyMatrix { rows })
    }

    /// Raw matrix entry, including zero and negative values
    pub fn entry(&self, from: usize, to: usize) -> Option<W> {
        self.rows.get(from).and_then(|row| row.get(to)).copied()
    }

    /// Borrow the underlying rows
    pub fn rows(&self) -> &[Vec<W>] {
        &self.rows
    }

    /// Consumes the graph and returns its rows
    pub fn into_rows(self) -> Vec<Vec<W>> {
        self.rows
    }
}

impl<W> Graph<W> for AdjacencyMatrix<W>
where
    W: Weight,
{
    fn vertex_count(&self) -> usize {
        self.rows.len()
    }

    fn edge_count(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.iter().filter(|w| **w > W::zero()).count())
            .sum()
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        match self.rows.get(vertex) {
            Some(row) => Box::new(
                row.iter()
                    .copied()
                    .enumerate()
                    .filter(|(_, w)| *w > W::zero()),
            ),
            None => Box::new(std::iter::empty()),
        }
    }

    fn incoming_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        if vertex >= self.rows.len() {
            return Box::new(std::iter::empty());
        }
        Box::new(
            self.rows
                .iter()
                .enumerate()
                .map(move |(from, row)| (from, row[vertex]))
                .filter(|(_, w)| *w > W::zero()),
        )
    }

    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W> {
        self.entry(from, to).filter(|w| *w > W::zero())
    }
}

impl<W> MutableGraph<W> for AdjacencyMatrix<W>
where
    W: Weight,
{
    fn add_vertex(&mut self) -> usize {
        let new_id = self.rows.len();
        for row in self.rows.iter_mut() {
            row.push(W::zero());
        }
        self.rows.push(vec![W::zero(); new_id + 1]);
        new_id
    }

    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> bool {
        if !self.has_vertex(from) || !self.has_vertex(to) || weight <= W::zero() {
            return false;
        }
        self.rows[from][to] = weight;
        true
    }

    fn remove_edge(&mut self, from: usize, to: usize) -> bool {
        if !self.has_edge(from, to) {
            return false;
        }
        self.rows[from][to] = W::zero();
        true
    }
}

impl<W> Default for AdjacencyMatrix<W>
where
    W: Weight,
{
    fn default() -> Self {
        Self::with_capacity(0)
    }
}
