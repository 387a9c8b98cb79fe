use crate::prelude::*;
use proptest::prelude::*;
use rustc_hash::FxHashMap;
use std::cell::RefCell;

/// Random edge lists over vertices `0..num_nodes`, possibly with duplicates and self-loops.
pub fn build_edge_list(len: usize, num_nodes: u64) -> impl Strategy<Value = Vec<(u64, u64)>> {
    proptest::collection::vec((0..num_nodes, 0..num_nodes), 0..=len)
}

/// Wraps a [`Graph`] and records how often each accessor method is called.
pub struct CountingGraph {
    graph: Graph,
    calls: RefCell<FxHashMap<&'static str, usize>>,
}

impl CountingGraph {
    pub fn new(graph: Graph) -> Self {
        Self {
            graph,
            calls: RefCell::default(),
        }
    }

    fn record(&self, method: &'static str) {
        *self.calls.borrow_mut().entry(method).or_default() += 1;
    }

    pub fn calls(&self, method: &str) -> usize {
        self.calls.borrow().get(method).copied().unwrap_or(0)
    }

    pub fn total_calls(&self) -> usize {
        self.calls.borrow().values().sum()
    }
}

impl GraphStructure for CountingGraph {
    type Vertex = u64;

    fn graph_type(&self) -> GraphType {
        self.record("graph_type");
        self.graph.graph_type()
    }

    fn num_vertices(&self) -> usize {
        self.record("num_vertices");
        self.graph.num_vertices()
    }

    fn num_edges(&self) -> usize {
        self.record("num_edges");
        self.graph.num_edges()
    }

    fn vertices(&self) -> impl Iterator<Item = u64> + '_ {
        self.record("vertices");
        self.graph.vertices()
    }

    fn edges(&self) -> impl Iterator<Item = (u64, u64)> + '_ {
        self.record("edges");
        self.graph.edges()
    }

    fn contains_vertex(&self, v: &u64) -> bool {
        self.record("contains_vertex");
        self.graph.contains_vertex(v)
    }

    fn contains_edge(&self, src: &u64, dst: &u64) -> bool {
        self.record("contains_edge");
        self.graph.contains_edge(src, dst)
    }

    fn degree(&self, v: &u64) -> usize {
        self.record("degree");
        self.graph.degree(v)
    }

    fn neighbours(&self, v: &u64, dir: Direction) -> impl Iterator<Item = u64> + '_ {
        self.record("neighbours");
        self.graph.neighbours(v, dir)
    }
}
