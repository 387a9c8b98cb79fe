//! Generates a graph using the random attachment model
//!
//! This function is a graph generation model based upon:
//! Callaway, Duncan S., et al. "Are randomly grown graphs really random?."
//! Physical Review E 64.4 (2001): 041902.
//!
//! # Examples
//!
//! ```
//! use cohesion::{graphgen::random_attachment::random_attachment, prelude::*};
//!
//! let mut graph: Graph = Graph::undirected();
//! random_attachment(&mut graph, 1000, 10, Some(42)).unwrap();
//! assert_eq!(graph.num_vertices(), 1010);
//! ```

use crate::{db::graph::Graph, graphgen::make_rng};
use cohesion_api::core::{graph::GraphStructure, utils::errors::GraphError};
use rand::seq::SliceRandom;
use tracing::debug;

/// Given a graph this function will add a user defined number of vertices, each with a
/// user defined number of edges.
/// This is an iterative algorithm where at each `step` a vertex is added and its neighbours
/// are chosen from the pool of vertices already within the network.
/// For this model the neighbours are chosen purely at random. This sampling is done
/// without replacement.
///
/// **Note:** If the provided graph doesn't have enough vertices for the initial sample,
/// the missing ones will be added before generation begins.
///
/// # Arguments
/// * `graph` - The graph you wish to add vertices and edges to
/// * `vertices_to_add` - The amount of vertices you wish to add to the graph (steps)
/// * `edges_per_step` - The amount of edges a joining vertex should add to the graph
/// * `seed` - Optional seed for reproducible graphs
///
/// New vertices get the ids following the largest id in the graph. Fails with
/// [`GraphError::VertexIdOverflow`] if those ids would run past `u64::MAX`, in which case the
/// vertices and edges added so far are kept.
pub fn random_attachment(
    graph: &mut Graph<u64>,
    vertices_to_add: usize,
    edges_per_step: usize,
    seed: Option<u64>,
) -> Result<(), GraphError> {
    let rng = &mut make_rng(seed);
    let mut ids: Vec<u64> = graph.vertices().collect();
    let mut last_id = ids.iter().max().copied();

    while ids.len() < edges_per_step {
        let id = next_id(last_id)?;
        graph.add_vertex(id);
        ids.push(id);
        last_id = Some(id);
    }

    for _ in 0..vertices_to_add {
        let id = next_id(last_id)?;
        let neighbours: Vec<u64> = ids.choose_multiple(rng, edges_per_step).copied().collect();
        for neighbour in neighbours {
            graph.add_edge(id, neighbour);
        }
        graph.add_vertex(id);
        ids.push(id);
        last_id = Some(id);
    }
    debug!(
        num_vertices = graph.num_vertices(),
        num_edges = graph.num_edges(),
        "random attachment done"
    );
    Ok(())
}

fn next_id(last_id: Option<u64>) -> Result<u64, GraphError> {
    match last_id {
        None => Ok(0),
        Some(id) => id.checked_add(1).ok_or(GraphError::VertexIdOverflow(id)),
    }
}

#[cfg(test)]
mod random_graph_test {
    use super::*;
    use crate::prelude::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn blank_graph() {
        let mut graph: Graph = Graph::undirected();
        random_attachment(&mut graph, 100, 20, None).unwrap();
        assert_eq!(graph.num_edges(), 2000);
        assert_eq!(graph.num_vertices(), 120);
    }

    #[test]
    fn only_vertices() {
        let mut graph: Graph = Graph::directed();
        for i in 0..10 {
            graph.add_vertex(i);
        }

        random_attachment(&mut graph, 1000, 5, Some(7)).unwrap();
        assert_eq!(graph.num_edges(), 5000);
        assert_eq!(graph.num_vertices(), 1010);
    }

    #[test]
    fn seeded_graphs_are_equal() {
        let mut left: Graph = Graph::undirected();
        let mut right: Graph = Graph::undirected();
        random_attachment(&mut left, 200, 3, Some(1)).unwrap();
        random_attachment(&mut right, 200, 3, Some(1)).unwrap();

        let left_cc = ClusteringCoefficient::new(&left).snapshot();
        let right_cc = ClusteringCoefficient::new(&right).snapshot();
        assert_eq!(left_cc.scores, right_cc.scores);
        assert_eq!(left_cc.global.to_bits(), right_cc.global.to_bits());
    }

    #[test]
    fn ids_after_largest_vertex() {
        let mut graph: Graph = Graph::undirected();
        graph.add_vertex(u64::MAX - 1);

        random_attachment(&mut graph, 1, 1, Some(3)).unwrap();
        assert_eq!(graph.num_vertices(), 2);
        assert!(graph.contains_edge(&u64::MAX, &(u64::MAX - 1)));
    }

    #[test]
    fn exhausted_vertex_ids() {
        let mut graph: Graph = Graph::directed();
        graph.add_vertex(u64::MAX);

        assert_eq!(
            random_attachment(&mut graph, 1, 1, Some(3)),
            Err(GraphError::VertexIdOverflow(u64::MAX))
        );
        assert_eq!(graph.num_vertices(), 1);
        assert_eq!(graph.num_edges(), 0);

        // not enough vertices to sample from, the seed vertices need ids too
        let mut graph: Graph = Graph::undirected();
        graph.add_vertex(u64::MAX);
        assert_eq!(
            random_attachment(&mut graph, 0, 2, None),
            Err(GraphError::VertexIdOverflow(u64::MAX))
        );
    }
}
