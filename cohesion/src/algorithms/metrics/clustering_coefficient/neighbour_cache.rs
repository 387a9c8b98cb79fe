use cohesion_api::core::{graph::GraphStructure, Direction};
use rustc_hash::{FxHashMap, FxHashSet};
use std::hash::Hash;
use tracing::debug;

/// Predecessors, successors and neighbours of every vertex, collected in a single pass.
///
/// For undirected graphs the predecessors and successors of a vertex are both its full
/// adjacency. Neighbour sets never contain the vertex itself, predecessor and successor sets
/// keep self-loops as reported by the graph.
#[derive(Clone, Debug)]
pub struct NeighbourCache<V> {
    undirected: bool,
    successors: FxHashMap<V, FxHashSet<V>>,
    predecessors: FxHashMap<V, FxHashSet<V>>,
    neighbours: FxHashMap<V, FxHashSet<V>>,
    empty: FxHashSet<V>,
}

impl<V: Clone + Eq + Hash> NeighbourCache<V> {
    pub fn new<G: GraphStructure<Vertex = V> + ?Sized>(graph: &G) -> Self {
        let undirected = graph.is_undirected();
        let num_vertices = graph.num_vertices();
        debug!(num_vertices, undirected, "building neighbour cache");

        let mut successors =
            FxHashMap::with_capacity_and_hasher(num_vertices, Default::default());
        let mut predecessors = FxHashMap::default();
        let mut neighbours = FxHashMap::with_capacity_and_hasher(num_vertices, Default::default());

        for v in graph.vertices() {
            let out: FxHashSet<V> = graph.neighbours(&v, Direction::OUT).collect();
            let mut nbors = if undirected {
                out.clone()
            } else {
                let into: FxHashSet<V> = graph.neighbours(&v, Direction::IN).collect();
                let nbors = out.union(&into).cloned().collect();
                predecessors.insert(v.clone(), into);
                nbors
            };
            nbors.remove(&v);
            neighbours.insert(v.clone(), nbors);
            successors.insert(v, out);
        }

        Self {
            undirected,
            successors,
            predecessors,
            neighbours,
            empty: FxHashSet::default(),
        }
    }

    /// Vertices adjacent to `v` in either direction, excluding `v`.
    pub fn neighbours_of(&self, v: &V) -> &FxHashSet<V> {
        self.neighbours.get(v).unwrap_or(&self.empty)
    }

    pub fn successors_of(&self, v: &V) -> &FxHashSet<V> {
        self.successors.get(v).unwrap_or(&self.empty)
    }

    pub fn predecessors_of(&self, v: &V) -> &FxHashSet<V> {
        if self.undirected {
            self.successors_of(v)
        } else {
            self.predecessors.get(v).unwrap_or(&self.empty)
        }
    }

    pub fn len(&self) -> usize {
        self.neighbours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neighbours.is_empty()
    }
}

#[cfg(test)]
mod neighbour_cache_test {
    use super::NeighbourCache;
    use crate::{prelude::*, test_utils::CountingGraph};
    use itertools::Itertools;
    use pretty_assertions::assert_eq;

    fn sorted<'a>(set: impl IntoIterator<Item = &'a u64>) -> Vec<u64> {
        set.into_iter().copied().sorted().collect()
    }

    #[test]
    fn directed_sets() {
        let graph: Graph = Graph::from_edges(
            GraphType::Directed,
            [(1, 2), (2, 3), (3, 1), (1, 3), (2, 2)],
        );
        let cache = NeighbourCache::new(&graph);

        assert_eq!(cache.len(), 3);
        assert_eq!(sorted(cache.successors_of(&1)), vec![2, 3]);
        assert_eq!(sorted(cache.predecessors_of(&1)), vec![3]);
        assert_eq!(sorted(cache.neighbours_of(&1)), vec![2, 3]);

        // the self-loop shows up as predecessor and successor but not as neighbour
        assert_eq!(sorted(cache.successors_of(&2)), vec![2, 3]);
        assert_eq!(sorted(cache.predecessors_of(&2)), vec![1, 2]);
        assert_eq!(sorted(cache.neighbours_of(&2)), vec![1, 3]);
    }

    #[test]
    fn undirected_sets() {
        let graph: Graph = Graph::from_edges(GraphType::Undirected, [(1, 2), (2, 3), (3, 3)]);
        let cache = NeighbourCache::new(&graph);

        assert_eq!(sorted(cache.neighbours_of(&2)), vec![1, 3]);
        assert_eq!(sorted(cache.predecessors_of(&2)), vec![1, 3]);
        assert_eq!(sorted(cache.successors_of(&2)), vec![1, 3]);
        assert_eq!(sorted(cache.successors_of(&3)), vec![2, 3]);
        assert_eq!(sorted(cache.neighbours_of(&3)), vec![2]);
    }

    #[test]
    fn unknown_vertex_is_empty() {
        let graph: Graph = Graph::from_edges(GraphType::Directed, [(1, 2)]);
        let cache = NeighbourCache::new(&graph);

        assert!(cache.neighbours_of(&7).is_empty());
        assert!(cache.predecessors_of(&7).is_empty());
        assert!(cache.successors_of(&7).is_empty());
    }

    #[test]
    fn single_pass_over_graph() {
        let graph = CountingGraph::new(Graph::from_edges(
            GraphType::Directed,
            [(1, 2), (2, 3), (3, 1)],
        ));
        let _cache = NeighbourCache::new(&graph);

        assert_eq!(graph.calls("vertices"), 1);
        // one OUT and one IN lookup per vertex
        assert_eq!(graph.calls("neighbours"), 6);
    }
}
