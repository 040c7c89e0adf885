//! Reduced edge lengths `w(u, v) + y(u) - y(v)`.
//!
//! Reduced lengths are derived values: they are recomputed from the current potentials
//! whenever needed and never cached across a potential update.

use crate::graphlib::EdgeKey;
use crate::{Error, Potentials, Result, WeightedGraph};

pub fn reduced_length(weight: f64, from: f64, to: f64) -> f64 {
    weight + from - to
}

/// Reduced length of every edge of `g`, in edge order.
pub fn reduced_lengths(g: &WeightedGraph, y: &Potentials) -> Result<Vec<(EdgeKey, f64)>> {
    let lookup = |node: &str| {
        y.get(node).ok_or_else(|| Error::MissingPotential {
            node: node.to_string(),
        })
    };

    let mut out: Vec<(EdgeKey, f64)> = Vec::with_capacity(g.edge_count());
    for key in g.edges() {
        let weight = g.edge_by_key(key).copied().unwrap_or_default();
        let len = reduced_length(weight, lookup(&key.v)?, lookup(&key.w)?);
        out.push((key.clone(), len));
    }
    Ok(out)
}

/// Edges whose reduced length is strictly negative.
pub fn violations(g: &WeightedGraph, y: &Potentials) -> Result<Vec<(EdgeKey, f64)>> {
    let mut out = reduced_lengths(g, y)?;
    out.retain(|(_, len)| *len < 0.0);
    Ok(out)
}

pub fn is_feasible(g: &WeightedGraph, y: &Potentials) -> Result<bool> {
    Ok(violations(g, y)?.is_empty())
}

/// Static edge data of `g` by edge index, extracted once per rounding call.
#[derive(Debug, Clone)]
pub(crate) struct EdgeTable {
    pub(crate) ends: Vec<(usize, usize)>,
    pub(crate) weights: Vec<f64>,
}

impl EdgeTable {
    pub(crate) fn new(g: &WeightedGraph) -> Self {
        let mut ends: Vec<(usize, usize)> = Vec::with_capacity(g.edge_count());
        let mut weights: Vec<f64> = Vec::with_capacity(g.edge_count());
        g.for_each_edge_ix(|v_ix, w_ix, _key, &weight| {
            ends.push((v_ix, w_ix));
            weights.push(weight);
        });
        Self { ends, weights }
    }

    /// Reduced length of every edge under dense potentials `y` (indexed by node).
    pub(crate) fn reduced(&self, y: &[f64]) -> Vec<f64> {
        self.ends
            .iter()
            .zip(&self.weights)
            .map(|(&(u, v), &weight)| reduced_length(weight, y[u], y[v]))
            .collect()
    }
}
