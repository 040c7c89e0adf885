//! JSON input model: a node list, weighted edges and optional initial potentials.
//!
//! ```json
//! {
//!   "nodes": ["s", "a", "b"],
//!   "edges": [
//!     { "from": "s", "to": "a", "weight": 2 },
//!     { "from": "a", "to": "b", "weight": -3 }
//!   ],
//!   "potentials": { "s": 0, "a": 0, "b": 0 }
//! }
//! ```

use crate::graphlib::{Graph, GraphOptions};
use crate::{Error, Potentials, Result, WeightedGraph};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A node id as written in JSON: a string or an integer. Integers are stringified.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeId {
    Index(i64),
    Name(String),
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeId::Index(i) => write!(f, "{i}"),
            NodeId::Name(s) => f.write_str(s),
        }
    }
}

impl From<&str> for NodeId {
    fn from(value: &str) -> Self {
        NodeId::Name(value.to_string())
    }
}

impl From<i64> for NodeId {
    fn from(value: i64) -> Self {
        NodeId::Index(value)
    }
}

fn default_weight() -> f64 {
    1.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeInput {
    pub from: NodeId,
    pub to: NodeId,
    /// Defaults to `1` when omitted.
    #[serde(default = "default_weight")]
    pub weight: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphInput {
    /// When present, every edge endpoint must be listed here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nodes: Option<Vec<NodeId>>,
    #[serde(default)]
    pub edges: Vec<EdgeInput>,
    /// JSON object keys are always strings, so these are keyed by the stringified id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub potentials: Option<IndexMap<String, f64>>,
}

impl GraphInput {
    pub fn from_json(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_reader(reader: impl std::io::Read) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Snapshot of `g` (all nodes listed) with optional potentials.
    pub fn from_graph(g: &WeightedGraph, potentials: Option<&Potentials>) -> Self {
        let mut edges: Vec<EdgeInput> = Vec::with_capacity(g.edge_count());
        g.for_each_edge_ix(|_, _, key, &weight| {
            edges.push(EdgeInput {
                from: key.v.as_str().into(),
                to: key.w.as_str().into(),
                weight,
            });
        });
        Self {
            nodes: Some(g.nodes().map(NodeId::from).collect()),
            edges,
            potentials: potentials.map(|y| y.as_map().clone()),
        }
    }

    /// Builds the graph, rejecting undeclared endpoints, repeated ordered pairs and
    /// non-finite weights.
    pub fn build(&self) -> Result<WeightedGraph> {
        let mut g: WeightedGraph = Graph::new(GraphOptions::default());
        if let Some(nodes) = &self.nodes {
            for node in nodes {
                g.set_node(node.to_string(), ());
            }
        }

        for edge in &self.edges {
            let from = edge.from.to_string();
            let to = edge.to.to_string();
            if self.nodes.is_some() {
                let missing = [&from, &to].into_iter().find(|n| !g.has_node(n)).cloned();
                if let Some(node) = missing {
                    return Err(Error::UnknownEndpoint { node, from, to });
                }
            }
            if !edge.weight.is_finite() {
                return Err(Error::NonFiniteWeight { from, to });
            }
            if g.has_edge(&from, &to, None) {
                return Err(Error::DuplicateEdge { from, to });
            }
            g.set_edge(from, to, edge.weight);
        }
        Ok(g)
    }

    /// The supplied potentials, or all zeros over `g` when the input has none.
    pub fn initial_potentials(&self, g: &WeightedGraph) -> Potentials {
        match &self.potentials {
            Some(map) => Potentials::from(map.clone()),
            None => Potentials::zeros(g),
        }
    }
}
