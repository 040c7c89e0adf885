//! One-shot repair by shortest-path shift.
//!
//! Every edge is weighted by its reduced length under `initial` and the distances `δ` from a
//! source are added to the potentials: `y(v) = initial(v) + δ(v)`. With a virtual
//! super-source (zero-weight edges to every node, as in Johnson's reweighting) all nodes are
//! reached and the result is always feasible. With a named source, nodes it cannot reach end
//! up at `+∞`.

use crate::graphlib::{Graph, alg};
use crate::{Error, Potentials, Result, WeightedGraph, reduced, validate};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ShiftSource {
    #[default]
    Virtual,
    Node(String),
}

fn unique_source_name(g: &WeightedGraph) -> String {
    let mut candidate = String::from("__source");
    let mut i = 1usize;
    while g.has_node(&candidate) {
        candidate = format!("__source{i}");
        i += 1;
    }
    candidate
}

pub fn shift_potentials(
    g: &WeightedGraph,
    initial: &Potentials,
    source: ShiftSource,
) -> Result<Potentials> {
    validate::check_weights(g)?;
    validate::check_potentials(g, initial)?;

    let mut h: WeightedGraph = Graph::new(g.options());
    for id in g.nodes() {
        h.set_node(id, ());
    }
    for (key, len) in reduced::reduced_lengths(g, initial)? {
        h.set_edge_named(key.v, key.w, key.name, len);
    }

    let source = match source {
        ShiftSource::Node(node) => {
            if !g.has_node(&node) {
                return Err(Error::UnknownSource { node });
            }
            node
        }
        ShiftSource::Virtual => {
            let name = unique_source_name(g);
            h.set_node(name.clone(), ());
            for id in g.nodes() {
                h.set_edge(name.as_str(), id, 0.0);
            }
            name
        }
    };

    let delta = alg::bellman_ford(&h, &source, |_, &w| w)?;
    tracing::debug!(source = %source, nodes = g.node_count(), "shifted potentials");

    Ok(g
        .nodes()
        .map(|node| {
            let y = initial.get(node).unwrap_or_default();
            let d = delta.get(node).map_or(f64::INFINITY, |p| p.distance);
            (node, y + d)
        })
        .collect())
}
