//! Clustering coefficient - measures the degree to which vertices of a graph tend to cluster
//! together.
//!
//! Three related metrics are computed, for directed as well as undirected graphs:
//!
//! - the *local* clustering coefficient of every vertex (Watts and Strogatz, 1998), see
//!   [`local_clustering_coefficient`],
//! - the *global* clustering coefficient `3 * triangles / triplets` (Luce and Perry, 1949). For
//!   undirected graphs a vertex of degree `d` is the centre of `d * (d - 1) / 2` triplets, for
//!   directed graphs of `|predecessors| * |successors|` triplets,
//! - the *average* clustering coefficient, the mean of all local coefficients (`0` for a graph
//!   without vertices).
//!
//! [`ClusteringCoefficient`] computes each of them lazily and at most once. The running time of
//! the local pass is `O(|V| + Δ(G)^2)` with `Δ(G)` the maximum degree.
//!
//! # Examples
//!
//! ```rust
//! use cohesion::prelude::*;
//!
//! let g: Graph = Graph::from_edges(
//!     GraphType::Undirected,
//!     [(1, 2), (1, 3), (1, 4), (2, 6), (2, 7), (3, 4), (3, 7), (4, 5), (4, 6), (5, 6)],
//! );
//!
//! let cc = ClusteringCoefficient::new(&g);
//! assert_eq!(cc.global_coefficient(), 0.3);
//! assert_eq!(cc.vertex_score(&5).unwrap(), 1.0);
//! println!("average clustering coefficient: {}", cc.average_coefficient());
//! ```

use crate::algorithms::motifs::triangle_count::TriangleCount;
use cohesion_api::core::{
    graph::{GraphStructure, TriangleCounter},
    state::{NodeScores, VertexScoring},
    utils::errors::ScoringError,
};
use once_cell::unsync::OnceCell;
use tracing::debug;

pub mod global_clustering_coefficient;
pub mod local_clustering_coefficient;
pub mod neighbour_cache;

pub use local_clustering_coefficient::local_clustering_coefficient;
use neighbour_cache::NeighbourCache;

/// Lazily computed clustering coefficients of one graph.
///
/// The neighbour cache, the local scores, the global coefficient and the average coefficient
/// each live in their own cell, filled on first use and never recomputed. Asking for the
/// global coefficient does not compute local scores and vice versa, the average needs the
/// local scores.
///
/// The graph is borrowed for the lifetime of the instance and must not change underneath it.
/// The cells are not synchronised, so the type is not `Sync`; use
/// [`snapshot`](Self::snapshot) to share results across threads.
pub struct ClusteringCoefficient<'graph, G: GraphStructure + ?Sized, T = TriangleCount> {
    graph: &'graph G,
    triangle_counter: T,
    neighbour_cache: OnceCell<NeighbourCache<G::Vertex>>,
    scores: OnceCell<NodeScores<G::Vertex>>,
    global: OnceCell<f64>,
    average: OnceCell<f64>,
}

/// Owned, immutable results of a [`ClusteringCoefficient`].
#[derive(Clone, Debug)]
pub struct ClusteringSummary<V> {
    pub global: f64,
    pub average: f64,
    pub scores: NodeScores<V>,
}

impl<'graph, G: GraphStructure + ?Sized> ClusteringCoefficient<'graph, G> {
    /// Clustering coefficients of `graph`, using [`TriangleCount`] for the global coefficient.
    pub fn new(graph: &'graph G) -> Self {
        Self::with_triangle_counter(graph, TriangleCount)
    }

    /// Like [`new`](Self::new) but fails with [`ScoringError::MissingGraph`] when no graph is
    /// given.
    pub fn try_new(graph: Option<&'graph G>) -> Result<Self, ScoringError> {
        graph.map(Self::new).ok_or(ScoringError::MissingGraph)
    }
}

impl<'graph, G, T> ClusteringCoefficient<'graph, G, T>
where
    G: GraphStructure + ?Sized,
    T: TriangleCounter<G>,
{
    pub fn with_triangle_counter(graph: &'graph G, triangle_counter: T) -> Self {
        Self {
            graph,
            triangle_counter,
            neighbour_cache: OnceCell::new(),
            scores: OnceCell::new(),
            global: OnceCell::new(),
            average: OnceCell::new(),
        }
    }

    fn neighbour_cache(&self) -> &NeighbourCache<G::Vertex> {
        self.neighbour_cache
            .get_or_init(|| NeighbourCache::new(self.graph))
    }

    /// Global clustering coefficient, `3 * triangles / triplets`.
    ///
    /// Graphs without any triplet yield `NaN` (or infinity if the triangle counter reports
    /// triangles anyway).
    pub fn global_coefficient(&self) -> f64 {
        *self.global.get_or_init(|| {
            let triplets = if self.graph.is_undirected() {
                global_clustering_coefficient::undirected_triplet_count(self.graph)
            } else {
                global_clustering_coefficient::directed_triplet_count(
                    self.graph,
                    self.neighbour_cache(),
                )
            };
            let triangles = self.triangle_counter.count_triangles(self.graph);
            let global = global_clustering_coefficient::coefficient_from_counts(triangles, triplets);
            debug!(triangles, triplets, global, "computed global clustering coefficient");
            global
        })
    }

    /// Mean of the local clustering coefficients, `0` for a graph without vertices.
    pub fn average_coefficient(&self) -> f64 {
        *self.average.get_or_init(|| {
            if self.graph.num_vertices() == 0 {
                return 0.0;
            }
            let average = self.score_map().mean();
            debug!(average, "computed average clustering coefficient");
            average
        })
    }

    /// Local clustering coefficients of all vertices.
    pub fn score_map(&self) -> &NodeScores<G::Vertex> {
        self.scores.get_or_init(|| {
            local_clustering_coefficient::compute_scores(self.graph, self.neighbour_cache())
        })
    }

    /// Local clustering coefficient of `v`.
    pub fn vertex_score(&self, v: &G::Vertex) -> Result<f64, ScoringError> {
        let known = match self.scores.get() {
            Some(scores) => scores.contains(v),
            None => self.graph.contains_vertex(v),
        };
        if !known {
            return Err(ScoringError::unknown_vertex(v));
        }
        self.score_map()
            .get(v)
            .copied()
            .ok_or_else(|| ScoringError::unknown_vertex(v))
    }

    /// Computes all results and returns an owned copy of them.
    pub fn snapshot(&self) -> ClusteringSummary<G::Vertex> {
        ClusteringSummary {
            global: self.global_coefficient(),
            average: self.average_coefficient(),
            scores: self.score_map().clone(),
        }
    }
}

impl<'graph, G, T> VertexScoring for ClusteringCoefficient<'graph, G, T>
where
    G: GraphStructure + ?Sized,
    T: TriangleCounter<G>,
{
    type Vertex = G::Vertex;
    type Score = f64;

    fn scores(&self) -> &NodeScores<G::Vertex> {
        self.score_map()
    }

    fn vertex_score(&self, v: &G::Vertex) -> Result<f64, ScoringError> {
        ClusteringCoefficient::vertex_score(self, v)
    }
}

/// Global clustering coefficient of `graph`, see [`ClusteringCoefficient::global_coefficient`].
pub fn global_clustering_coefficient<G: GraphStructure + ?Sized>(graph: &G) -> f64 {
    ClusteringCoefficient::new(graph).global_coefficient()
}

/// Average clustering coefficient of `graph`, see
/// [`ClusteringCoefficient::average_coefficient`].
pub fn average_clustering_coefficient<G: GraphStructure + ?Sized>(graph: &G) -> f64 {
    ClusteringCoefficient::new(graph).average_coefficient()
}
