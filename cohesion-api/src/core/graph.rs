//! Capability contracts consumed by the clustering algorithms.
//!
//! [`GraphStructure`] covers the structural queries (vertices, edges, degree, edge test and
//! directedness) and [`TriangleCounter`] is the independent contract for counting triangles,
//! so that storage backends and counting strategies can be swapped separately.

use crate::{core::Direction, GraphType};
use std::{fmt::Debug, hash::Hash};

/// Read-only structural view of a graph.
///
/// Implementations must return the vertices in the same order on every call as long as the
/// graph is not mutated.
pub trait GraphStructure {
    type Vertex: Clone + Eq + Hash + Debug;

    fn graph_type(&self) -> GraphType;

    fn is_undirected(&self) -> bool {
        self.graph_type().is_undirected()
    }

    fn num_vertices(&self) -> usize;

    fn num_edges(&self) -> usize;

    fn vertices(&self) -> impl Iterator<Item = Self::Vertex> + '_;

    /// All edges as `(src, dst)` pairs. Undirected edges are reported once.
    fn edges(&self) -> impl Iterator<Item = (Self::Vertex, Self::Vertex)> + '_;

    fn contains_vertex(&self, v: &Self::Vertex) -> bool;

    fn contains_edge(&self, src: &Self::Vertex, dst: &Self::Vertex) -> bool;

    /// Number of edge endpoints at `v`. A self-loop counts twice in an undirected graph,
    /// in a directed graph this is the in-degree plus the out-degree.
    fn degree(&self, v: &Self::Vertex) -> usize;

    /// Adjacent vertices of `v`. `OUT` yields successors, `IN` predecessors and `BOTH` the
    /// union of the two. For undirected graphs every direction yields the full adjacency.
    fn neighbours(&self, v: &Self::Vertex, dir: Direction)
        -> impl Iterator<Item = Self::Vertex> + '_;
}

/// Reports the total number of triangles of a graph.
pub trait TriangleCounter<G: GraphStructure + ?Sized> {
    fn count_triangles(&self, graph: &G) -> usize;
}

impl<G, F> TriangleCounter<G> for F
where
    G: GraphStructure + ?Sized,
    F: Fn(&G) -> usize,
{
    fn count_triangles(&self, graph: &G) -> usize {
        self(graph)
    }
}
