//! Node potentials (dual variables).

use crate::WeightedGraph;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A `node -> potential` map, kept in insertion order and serialised as a JSON object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Potentials(IndexMap<String, f64>);

impl Potentials {
    pub fn new() -> Self {
        Self::default()
    }

    /// All-zero potentials over the nodes of `g`, in graph order.
    pub fn zeros(g: &WeightedGraph) -> Self {
        g.nodes().map(|id| (id, 0.0)).collect()
    }

    pub fn get(&self, node: &str) -> Option<f64> {
        self.0.get(node).copied()
    }

    pub fn set(&mut self, node: impl Into<String>, value: f64) -> &mut Self {
        self.0.insert(node.into(), value);
        self
    }

    pub fn contains(&self, node: &str) -> bool {
        self.0.contains_key(node)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, &v)| (k.as_str(), v))
    }

    pub fn as_map(&self) -> &IndexMap<String, f64> {
        &self.0
    }

    /// Potentials of `g`'s nodes by node index. Callers validate coverage first.
    pub(crate) fn to_dense(&self, g: &WeightedGraph) -> Vec<f64> {
        g.nodes()
            .map(|id| self.get(id).unwrap_or_default())
            .collect()
    }

    pub(crate) fn from_dense(g: &WeightedGraph, dense: &[f64]) -> Self {
        g.nodes().zip(dense.iter().copied()).collect()
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for Potentials {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl<K: Into<String>, const N: usize> From<[(K, f64); N]> for Potentials {
    fn from(value: [(K, f64); N]) -> Self {
        value.into_iter().collect()
    }
}

impl From<IndexMap<String, f64>> for Potentials {
    fn from(value: IndexMap<String, f64>) -> Self {
        Self(value)
    }
}
