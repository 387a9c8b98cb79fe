use crate::algorithms::metrics::clustering_coefficient::neighbour_cache::NeighbourCache;
use cohesion_api::core::graph::GraphStructure;

/// Number of triplets centred at the vertices of an undirected graph, `sum(deg * (deg - 1) / 2)`.
pub fn undirected_triplet_count<G: GraphStructure + ?Sized>(graph: &G) -> f64 {
    graph
        .vertices()
        .map(|v| {
            let degree = graph.degree(&v) as f64;
            degree * (degree - 1.0) / 2.0
        })
        .sum()
}

/// Number of directed triplets, every vertex contributes one per (predecessor, successor) pair.
pub fn directed_triplet_count<G: GraphStructure + ?Sized>(
    graph: &G,
    cache: &NeighbourCache<G::Vertex>,
) -> f64 {
    graph
        .vertices()
        .map(|v| cache.predecessors_of(&v).len() as f64 * cache.successors_of(&v).len() as f64)
        .sum()
}

/// `3 * triangles / triplets`.
///
/// Graphs without triplets yield `NaN` (or infinity if the triangle count is positive), this is
/// not special-cased so callers can tell an undefined coefficient from a coefficient of `0`.
pub fn coefficient_from_counts(triangles: usize, triplets: f64) -> f64 {
    3.0 * triangles as f64 / triplets
}
