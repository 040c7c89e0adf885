//! The residual subgraph G⁻: every node of the input graph plus the edges whose reduced
//! length is `<= 0`, labelled with that reduced length.
//!
//! Zero-length edges are kept on purpose: they may close zero-length cycles, and those
//! nodes have to be contracted together for the layering to be correct.

use crate::WeightedGraph;
use crate::graphlib::Graph;

/// Builds G⁻ from `g` and the reduced length of each of its edges (in edge order).
///
/// Nodes are inserted in `g`'s order, so node indices of G⁻ and `g` coincide.
pub fn residual_subgraph(g: &WeightedGraph, reduced: &[f64]) -> WeightedGraph {
    let mut out: WeightedGraph = Graph::new(g.options());
    for id in g.nodes() {
        out.set_node(id, ());
    }

    let mut edge_ix = 0usize;
    g.for_each_edge_ix(|_v_ix, _w_ix, key, _weight| {
        let len = reduced.get(edge_ix).copied().unwrap_or(f64::INFINITY);
        edge_ix += 1;
        if len <= 0.0 {
            out.set_edge_named(key.v.clone(), key.w.clone(), key.name.clone(), len);
        }
    });
    out
}
