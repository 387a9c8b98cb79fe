//! In-memory adjacency graph.
//!
//! Vertices are kept in insertion order so repeated passes over the vertex set always see the
//! same order. Edges are deduplicated, adding the same edge twice is a no-op.
//!
//! # Examples
//!
//! ```rust
//! use cohesion::prelude::*;
//!
//! let mut g: Graph = Graph::new(GraphType::Directed);
//! g.add_edge(1, 2);
//! g.add_edge(2, 3);
//! g.add_vertex(4);
//!
//! assert_eq!(g.num_vertices(), 4);
//! assert_eq!(g.num_edges(), 2);
//! assert!(g.contains_edge(&1, &2));
//! assert!(!g.contains_edge(&2, &1));
//! ```

use cohesion_api::{
    core::{graph::GraphStructure, Direction},
    GraphType,
};
use indexmap::IndexMap;
use itertools::Either;
use rustc_hash::{FxBuildHasher, FxHashSet};
use std::{fmt::Debug, hash::Hash, iter};

#[derive(Clone, Debug)]
struct Adjacency<V> {
    out: FxHashSet<V>,
    into: FxHashSet<V>,
}

impl<V> Default for Adjacency<V> {
    fn default() -> Self {
        Self {
            out: FxHashSet::default(),
            into: FxHashSet::default(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Graph<V = u64> {
    graph_type: GraphType,
    adj: IndexMap<V, Adjacency<V>, FxBuildHasher>,
    num_edges: usize,
}

impl<V> Default for Graph<V> {
    fn default() -> Self {
        Self::new(GraphType::default())
    }
}

impl<V> Graph<V> {
    pub fn new(graph_type: GraphType) -> Self {
        Self {
            graph_type,
            adj: IndexMap::default(),
            num_edges: 0,
        }
    }

    pub fn directed() -> Self {
        Self::new(GraphType::Directed)
    }

    pub fn undirected() -> Self {
        Self::new(GraphType::Undirected)
    }
}

impl<V: Clone + Eq + Hash> Graph<V> {
    pub fn from_edges(graph_type: GraphType, edges: impl IntoIterator<Item = (V, V)>) -> Self {
        let mut graph = Self::new(graph_type);
        graph.extend(edges);
        graph
    }

    /// Adds `v` to the graph, returns `false` if it was already present.
    pub fn add_vertex(&mut self, v: V) -> bool {
        match self.adj.entry(v) {
            indexmap::map::Entry::Occupied(_) => false,
            indexmap::map::Entry::Vacant(entry) => {
                entry.insert(Adjacency::default());
                true
            }
        }
    }

    /// Adds the edge `src -> dst` (`src -- dst` for undirected graphs), inserting missing
    /// endpoints. Returns `false` if the edge already existed.
    pub fn add_edge(&mut self, src: V, dst: V) -> bool {
        self.add_vertex(src.clone());
        self.add_vertex(dst.clone());
        let inserted = self
            .adj
            .get_mut(&src)
            .is_some_and(|adj| adj.out.insert(dst.clone()));
        if inserted {
            if let Some(adj) = self.adj.get_mut(&dst) {
                if self.graph_type.is_undirected() {
                    adj.out.insert(src);
                } else {
                    adj.into.insert(src);
                }
            }
            self.num_edges += 1;
        }
        inserted
    }
}

impl<V: Clone + Eq + Hash> Extend<(V, V)> for Graph<V> {
    fn extend<I: IntoIterator<Item = (V, V)>>(&mut self, iter: I) {
        for (src, dst) in iter {
            self.add_edge(src, dst);
        }
    }
}

impl<V: Clone + Eq + Hash + Debug> GraphStructure for Graph<V> {
    type Vertex = V;

    fn graph_type(&self) -> GraphType {
        self.graph_type
    }

    fn num_vertices(&self) -> usize {
        self.adj.len()
    }

    fn num_edges(&self) -> usize {
        self.num_edges
    }

    fn vertices(&self) -> impl Iterator<Item = V> + '_ {
        self.adj.keys().cloned()
    }

    fn edges(&self) -> impl Iterator<Item = (V, V)> + '_ {
        let undirected = self.graph_type.is_undirected();
        self.adj
            .iter()
            .enumerate()
            .flat_map(move |(pos, (src, adj))| {
                adj.out.iter().filter_map(move |dst| {
                    // report undirected edges from the endpoint inserted first
                    let keep = !undirected
                        || self.adj.get_index_of(dst).is_some_and(|dst_pos| pos <= dst_pos);
                    keep.then(|| (src.clone(), dst.clone()))
                })
            })
    }

    fn contains_vertex(&self, v: &V) -> bool {
        self.adj.contains_key(v)
    }

    fn contains_edge(&self, src: &V, dst: &V) -> bool {
        self.adj.get(src).is_some_and(|adj| adj.out.contains(dst))
    }

    fn degree(&self, v: &V) -> usize {
        match self.adj.get(v) {
            None => 0,
            Some(adj) if self.graph_type.is_undirected() => {
                adj.out.len() + usize::from(adj.out.contains(v))
            }
            Some(adj) => adj.out.len() + adj.into.len(),
        }
    }

    fn neighbours(&self, v: &V, dir: Direction) -> impl Iterator<Item = V> + '_ {
        match self.adj.get(v) {
            None => Either::Left(iter::empty()),
            Some(adj) if self.graph_type.is_undirected() => {
                Either::Right(Either::Left(adj.out.iter().cloned()))
            }
            Some(adj) => Either::Right(Either::Right(match dir {
                Direction::OUT => Either::Left(adj.out.iter().cloned()),
                Direction::IN => Either::Right(Either::Left(adj.into.iter().cloned())),
                Direction::BOTH => Either::Right(Either::Right(
                    adj.out
                        .iter()
                        .chain(adj.into.iter().filter(move |n| !adj.out.contains(*n)))
                        .cloned(),
                )),
            })),
        }
    }
}

#[cfg(test)]
mod graph_test {
    use super::*;
    use itertools::Itertools;
    use pretty_assertions::assert_eq;

    #[test]
    fn directed_adjacency() {
        let g = Graph::from_edges(GraphType::Directed, [(1, 2), (1, 3), (3, 1), (2, 2)]);

        assert_eq!(g.num_vertices(), 3);
        assert_eq!(g.num_edges(), 4);
        assert_eq!(g.vertices().collect_vec(), vec![1, 2, 3]);

        assert_eq!(g.neighbours(&1, Direction::OUT).sorted().collect_vec(), vec![2, 3]);
        assert_eq!(g.neighbours(&1, Direction::IN).sorted().collect_vec(), vec![3]);
        assert_eq!(g.neighbours(&1, Direction::BOTH).sorted().collect_vec(), vec![2, 3]);
        assert_eq!(g.neighbours(&2, Direction::BOTH).sorted().collect_vec(), vec![1, 2]);

        assert_eq!(g.degree(&1), 3);
        assert_eq!(g.degree(&2), 3);
        assert_eq!(g.degree(&4), 0);
        assert_eq!(g.neighbours(&4, Direction::BOTH).count(), 0);
    }

    #[test]
    fn undirected_adjacency() {
        let g = Graph::from_edges(GraphType::Undirected, [(1, 2), (2, 1), (2, 3), (3, 3)]);

        assert_eq!(g.num_edges(), 3);
        assert!(g.contains_edge(&2, &1));
        assert!(g.contains_edge(&1, &2));
        assert_eq!(g.neighbours(&2, Direction::IN).sorted().collect_vec(), vec![1, 3]);
        assert_eq!(g.neighbours(&2, Direction::OUT).sorted().collect_vec(), vec![1, 3]);
        assert_eq!(g.degree(&2), 2);
        // self-loop counts twice
        assert_eq!(g.degree(&3), 3);
    }

    #[test]
    fn edges_are_reported_once() {
        let undirected = Graph::from_edges(GraphType::Undirected, [(1, 2), (2, 3), (3, 1), (3, 3)]);
        let edges = undirected.edges().collect_vec();
        assert_eq!(edges.len(), undirected.num_edges());
        assert_eq!(edges.len(), 4);

        let directed = Graph::from_edges(GraphType::Directed, [(1, 2), (2, 1)]);
        assert_eq!(
            directed.edges().sorted().collect_vec(),
            vec![(1, 2), (2, 1)]
        );
    }

    #[test]
    fn add_is_idempotent() {
        let mut g: Graph = Graph::undirected();
        assert!(g.add_vertex(1));
        assert!(!g.add_vertex(1));
        assert!(g.add_edge(1, 2));
        assert!(!g.add_edge(1, 2));
        assert!(!g.add_edge(2, 1));
        assert_eq!(g.num_edges(), 1);
        assert!(g.contains_vertex(&2));
        assert!(!g.contains_vertex(&3));
    }
}
