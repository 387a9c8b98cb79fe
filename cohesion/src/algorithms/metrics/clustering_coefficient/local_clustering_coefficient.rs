//! Local clustering coefficient - measures how close the neighbourhood of a vertex is to being
//! a clique.
//!
//! For a vertex `v` with neighbourhood `N(v)` (vertices adjacent in either direction, `v`
//! excluded) and `k = |N(v)|`, the coefficient is the number of ordered pairs `(p, q)` of
//! `N(v)` connected by an edge `p -> q`, divided by `k * (k - 1)`. Vertices with fewer than two
//! neighbours have a coefficient of `0`.
//!
//! In a social network a high local clustering coefficient indicates that the friends of a
//! person tend to know each other, while a low value points to a person bridging otherwise
//! unconnected groups.
//!
//! # Examples
//!
//! ```rust
//! use cohesion::prelude::*;
//!
//! let g: Graph = Graph::from_edges(
//!     GraphType::Directed,
//!     [(1, 2), (1, 3), (2, 3), (3, 4)],
//! );
//!
//! // neighbours of 3 are {1, 2, 4}, only 1 -> 2 connects two of them
//! let lcc = local_clustering_coefficient(&g, &3).unwrap();
//! assert_eq!(lcc, 1.0 / 6.0);
//! ```

use crate::algorithms::metrics::clustering_coefficient::neighbour_cache::NeighbourCache;
use cohesion_api::core::{
    graph::GraphStructure, state::NodeScores, utils::errors::ScoringError, Direction,
};
use itertools::iproduct;
use rustc_hash::FxHashSet;
use tracing::{debug, trace};

/// Coefficient of a vertex given its neighbourhood (which must not contain the vertex itself).
pub(crate) fn coefficient_from_neighbours<G: GraphStructure + ?Sized>(
    graph: &G,
    nbors: &FxHashSet<G::Vertex>,
) -> f64 {
    let k = nbors.len() as f64;
    if k <= 1.0 {
        return 0.0;
    }
    let connected_pairs = iproduct!(nbors.iter(), nbors.iter())
        .filter(|(p, q)| graph.contains_edge(p, q))
        .count() as f64;
    connected_pairs / (k * (k - 1.0))
}

/// Local coefficients of every vertex, sharing one neighbour cache across the whole pass.
pub(crate) fn compute_scores<G: GraphStructure + ?Sized>(
    graph: &G,
    cache: &NeighbourCache<G::Vertex>,
) -> NodeScores<G::Vertex> {
    let scores: NodeScores<G::Vertex> = graph
        .vertices()
        .map(|v| {
            let lcc = coefficient_from_neighbours(graph, cache.neighbours_of(&v));
            trace!(vertex = ?v, lcc, "local clustering coefficient");
            (v, lcc)
        })
        .collect();
    debug!(num_scores = scores.len(), "computed local clustering coefficients");
    scores
}

/// Local clustering coefficient of a single vertex.
///
/// Only the neighbourhood of `v` is collected, use
/// [`ClusteringCoefficient`](super::ClusteringCoefficient) when scores for many vertices are
/// needed.
///
/// # Arguments
/// - `graph`: a directed or undirected graph
/// - `v`: the vertex
///
/// # Returns
/// the local clustering coefficient of `v`, or [`ScoringError::UnknownVertex`] if `v` is not
/// part of `graph`.
pub fn local_clustering_coefficient<G: GraphStructure + ?Sized>(
    graph: &G,
    v: &G::Vertex,
) -> Result<f64, ScoringError> {
    if !graph.contains_vertex(v) {
        return Err(ScoringError::unknown_vertex(v));
    }
    let nbors: FxHashSet<G::Vertex> = graph
        .neighbours(v, Direction::BOTH)
        .filter(|n| n != v)
        .collect();
    Ok(coefficient_from_neighbours(graph, &nbors))
}
