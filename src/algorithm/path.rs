use log::warn;

use crate::algorithm::traits::Vertex;
use crate::graph::Weight;
use crate::{Error, Result};

/// One vertex on a reconstructed path with its distance from the source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathStep<W> {
    pub vertex: usize,
    pub distance: W,
}

/// Walks parent links from `destination` back to `source` and returns the
/// path in source-to-destination order.
///
/// Fails with `Error::Unreachable` when the walk hits a vertex other than the
/// source that has no parent, or runs longer than there are vertices.
pub fn reconstruct_path<W>(vertices: &[Vertex<W>], source: usize, destination: usize) -> Result<Vec<PathStep<W>>>
where
    W: Weight,
{
    if source >= vertices.len() {
        return Err(Error::InvalidVertex(source));
    }
    if destination >= vertices.len() {
        return Err(Error::InvalidVertex(destination));
    }

    let mut path = Vec::new();
    let mut current = destination;

    while current != source {
        path.push(PathStep {
            vertex: current,
            distance: vertices[current].distance,
        });

        current = match vertices[current].parent {
            Some(parent) if parent < vertices.len() => parent,
            Some(parent) => return Err(Error::InvalidVertex(parent)),
            None => return Err(Error::Unreachable(destination)),
        };

        if path.len() >= vertices.len() {
            warn!("Parent chain from {} never reaches source {}", destination, source);
            return Err(Error::Unreachable(destination));
        }
    }

    path.push(PathStep {
        vertex: source,
        distance: vertices[source].distance,
    });
    path.reverse();

    Ok(path)
}
