//! SCC contraction of the residual subgraph.
//!
//! The contracted graph H has one node per strongly connected component of G⁻ (node id =
//! component id as a decimal string) plus [`SUPER_SOURCE`], which has a zero-weight edge to
//! every component. Every G⁻ edge that crosses two components becomes an H edge carrying
//! the same reduced length. H is a multigraph: parallel edges between one pair of
//! components are all kept and shortest paths simply relax each of them.

use crate::WeightedGraph;
use crate::graphlib::{Graph, GraphOptions, alg};

/// Id of the synthetic super-source node in the contracted graph.
pub const SUPER_SOURCE: &str = "super-source";

#[derive(Debug, Clone)]
pub struct Contraction {
    /// Node indices (of G⁻, equal to those of the input graph) per component.
    pub components: Vec<Vec<usize>>,
    /// Component id by node index.
    pub component_of: Vec<usize>,
    /// The contracted graph H.
    pub graph: WeightedGraph,
}

impl Contraction {
    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// H node id of component `component`.
    pub fn node_id(component: usize) -> String {
        component.to_string()
    }

    pub fn same_component(&self, u: usize, v: usize) -> bool {
        self.component_of.get(u).is_some_and(|cu| self.component_of.get(v) == Some(cu))
    }
}

pub fn contract(residual: &WeightedGraph) -> Contraction {
    let components = alg::tarjan_ix(residual);
    let mut component_of: Vec<usize> = vec![0; residual.node_count()];
    for (id, members) in components.iter().enumerate() {
        for &v in members {
            component_of[v] = id;
        }
    }

    let mut h: WeightedGraph = Graph::new(GraphOptions { multigraph: true });
    for id in 0..components.len() {
        h.set_node(Contraction::node_id(id), ());
    }

    let mut edge_ix = 0usize;
    residual.for_each_edge_ix(|v_ix, w_ix, _key, &len| {
        let (cv, cw) = (component_of[v_ix], component_of[w_ix]);
        if cv != cw {
            h.set_edge_named(
                Contraction::node_id(cv),
                Contraction::node_id(cw),
                Some(edge_ix.to_string()),
                len,
            );
        }
        edge_ix += 1;
    });

    h.set_node(SUPER_SOURCE, ());
    for id in 0..components.len() {
        h.set_edge(SUPER_SOURCE, Contraction::node_id(id), 0.0);
    }

    Contraction {
        components,
        component_of,
        graph: h,
    }
}
