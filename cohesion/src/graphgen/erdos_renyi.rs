//! Generates a graph using the Erdős-Rényi model
//!
//! # Examples
//!
//! ```
//! use cohesion::{graphgen::erdos_renyi::erdos_renyi, prelude::*};
//! let graph = erdos_renyi(1000, 0.1, GraphType::Undirected, None).unwrap();
//! assert_eq!(graph.num_vertices(), 1000);
//! ```

use crate::{db::graph::Graph, graphgen::make_rng};
use cohesion_api::{core::utils::errors::GraphError, GraphType};
use rand::Rng;

/// Generates an Erdős-Rényi random graph and returns it.
///
/// Each pair of distinct vertices is connected with probability `p`. For directed graphs both
/// orientations of a pair are drawn independently.
///
/// # Arguments
/// * `vertices_to_add` - Number of vertices, with ids `0..vertices_to_add`.
/// * `p` - Probability of edge creation (0.0 = no edges, 1.0 = complete graph).
/// * `graph_type` - Directed or undirected.
/// * `seed` - Optional seed for deterministic generation. If `None`, uses entropy.
///
/// # Returns
/// the generated graph, or [`GraphError::InvalidProbability`] if `p` is not in `[0, 1]`.
pub fn erdos_renyi(
    vertices_to_add: usize,
    p: f64,
    graph_type: GraphType,
    seed: Option<u64>,
) -> Result<Graph<u64>, GraphError> {
    if !(0.0..=1.0).contains(&p) {
        return Err(GraphError::InvalidProbability(p));
    }
    let mut rng = make_rng(seed);
    let mut graph = Graph::new(graph_type);
    let n = vertices_to_add as u64;
    for i in 0..n {
        graph.add_vertex(i);
    }
    for i in 0..n {
        for j in (i + 1)..n {
            if rng.gen_bool(p) {
                graph.add_edge(i, j);
            }
            if !graph_type.is_undirected() && rng.gen_bool(p) {
                graph.add_edge(j, i);
            }
        }
    }
    Ok(graph)
}
