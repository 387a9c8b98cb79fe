use cohesion_api::core::{
    entities::VID,
    graph::{GraphStructure, TriangleCounter},
    Direction,
};
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

/// Computes the number of triangles in a graph.
///
/// Edge directions are ignored, reciprocal edges and self-loops do not form triangles. Vertices
/// are ranked by their position in the vertex set and every triangle `u < v < w` is counted
/// once, on the edge `(u, v)`, by intersecting the higher-ranked neighbours of `u` and `v`.
///
/// # Example
/// ```rust
/// use cohesion::prelude::*;
///
/// let edges = vec![
///     // triangle 1
///     (1, 2),
///     (2, 3),
///     (3, 1),
///     // triangle 2
///     (4, 5),
///     (5, 6),
///     (6, 4),
///     // triangles 3 and 4
///     (7, 8),
///     (8, 9),
///     (9, 7),
///     (8, 10),
///     (10, 9),
/// ];
/// let graph: Graph = Graph::from_edges(GraphType::Directed, edges);
///
/// assert_eq!(triangle_count(&graph), 4);
/// ```
pub fn triangle_count<G: GraphStructure + ?Sized>(graph: &G) -> usize {
    let index: FxHashMap<G::Vertex, VID> = graph
        .vertices()
        .enumerate()
        .map(|(i, v)| (v, VID(i)))
        .collect();

    let mut nbors: Vec<FxHashSet<VID>> = vec![FxHashSet::default(); index.len()];
    for (v, &s) in &index {
        for t in graph.neighbours(v, Direction::BOTH) {
            if let Some(&t) = index.get(&t) {
                if s < t {
                    nbors[s.index()].insert(t);
                }
            }
        }
    }

    let count: usize = nbors
        .iter()
        .map(|s_nbors| {
            s_nbors
                .iter()
                .map(|t| s_nbors.intersection(&nbors[t.index()]).count())
                .sum::<usize>()
        })
        .sum();
    debug!(triangles = count, "counted triangles");
    count
}

/// The default triangle counter, see [`triangle_count`].
#[derive(Clone, Copy, Debug, Default)]
pub struct TriangleCount;

impl<G: GraphStructure + ?Sized> TriangleCounter<G> for TriangleCount {
    fn count_triangles(&self, graph: &G) -> usize {
        triangle_count(graph)
    }
}
