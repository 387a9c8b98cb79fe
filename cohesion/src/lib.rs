//! # cohesion
//!
//! Clustering coefficient metrics over directed and undirected graphs: the local coefficient
//! of every vertex, the global coefficient of the graph and the average of the local
//! coefficients.
//!
//! The algorithms work against the [`GraphStructure`](prelude::GraphStructure) contract, so any
//! graph backend can be plugged in. An insertion-ordered in-memory [`Graph`](prelude::Graph) is
//! provided for callers without their own storage.
//!
//! # Example
//!
//! ```rust
//! use cohesion::prelude::*;
//!
//! let graph = Graph::from_edges(GraphType::Undirected, [(1, 2), (2, 3), (3, 1), (3, 4)]);
//! let cc = ClusteringCoefficient::new(&graph);
//!
//! assert_eq!(cc.vertex_score(&1).unwrap(), 1.0);
//! assert_eq!(cc.vertex_score(&4).unwrap(), 0.0);
//! assert_eq!(cc.global_coefficient(), 0.6);
//! ```

pub mod algorithms;
pub mod db;
pub mod graphgen;

#[cfg(test)]
pub mod test_utils;

pub mod prelude {
    pub use crate::{
        algorithms::{
            metrics::clustering_coefficient::{
                average_clustering_coefficient, global_clustering_coefficient,
                local_clustering_coefficient, ClusteringCoefficient, ClusteringSummary,
            },
            motifs::triangle_count::{triangle_count, TriangleCount},
        },
        db::graph::Graph,
    };
    pub use cohesion_api::{
        core::{
            graph::{GraphStructure, TriangleCounter},
            state::{NodeScores, VertexScoring},
            utils::errors::{GraphError, ScoringError},
            Direction,
        },
        GraphType,
    };
}
