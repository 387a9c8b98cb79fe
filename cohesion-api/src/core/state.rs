//! Read-only per-vertex results and the scoring contract producing them.

use crate::core::utils::errors::ScoringError;
use rustc_hash::FxHashMap;
use std::{
    borrow::Borrow,
    collections::hash_map,
    fmt::{Debug, Formatter},
    hash::Hash,
    ops::Index,
};

/// An algorithm assigning a score to every vertex of a graph.
pub trait VertexScoring {
    type Vertex;
    type Score;

    /// Scores for all vertices of the graph.
    fn scores(&self) -> &NodeScores<Self::Vertex, Self::Score>;

    /// Score of a single vertex, failing if `v` is not part of the graph.
    fn vertex_score(&self, v: &Self::Vertex) -> Result<Self::Score, ScoringError>;
}

/// Immutable mapping from vertex to score.
///
/// There are no mutating methods, a `NodeScores` handed out by reference can only be read.
#[derive(Clone)]
pub struct NodeScores<V, S = f64> {
    values: FxHashMap<V, S>,
}

impl<V: Debug, S: Debug> Debug for NodeScores<V, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.values.iter()).finish()
    }
}

impl<V: Hash + Eq, S: PartialEq> PartialEq for NodeScores<V, S> {
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values
    }
}

impl<V: Hash + Eq, S> NodeScores<V, S> {
    pub fn get<Q>(&self, v: &Q) -> Option<&S>
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.values.get(v)
    }

    pub fn contains<Q>(&self, v: &Q) -> bool
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.values.contains_key(v)
    }
}

impl<V, S> NodeScores<V, S> {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, V, S> {
        self.values.iter()
    }

    pub fn keys(&self) -> hash_map::Keys<'_, V, S> {
        self.values.keys()
    }

    pub fn values(&self) -> hash_map::Values<'_, V, S> {
        self.values.values()
    }
}

impl<V> NodeScores<V, f64> {
    /// Arithmetic mean of the scores, `0.0` when there are none.
    pub fn mean(&self) -> f64 {
        if self.values.is_empty() {
            0.0
        } else {
            self.values.values().sum::<f64>() / self.values.len() as f64
        }
    }
}

impl<V: Hash + Eq, S> FromIterator<(V, S)> for NodeScores<V, S> {
    fn from_iter<I: IntoIterator<Item = (V, S)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl<'a, V, S> IntoIterator for &'a NodeScores<V, S> {
    type Item = (&'a V, &'a S);
    type IntoIter = hash_map::Iter<'a, V, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl<V, S> IntoIterator for NodeScores<V, S> {
    type Item = (V, S);
    type IntoIter = hash_map::IntoIter<V, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<V, S, Q> Index<&Q> for NodeScores<V, S>
where
    V: Hash + Eq + Borrow<Q>,
    Q: Hash + Eq + ?Sized,
{
    type Output = S;

    fn index(&self, index: &Q) -> &Self::Output {
        &self.values[index]
    }
}
