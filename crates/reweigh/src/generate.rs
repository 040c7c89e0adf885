//! Fixture graphs: small hand-written toys plus seeded random and grid generators.
//!
//! Integer node ids are stored as their decimal strings.

use crate::{Error, Result, WeightedGraph};
use rand::Rng;
use std::ops::RangeInclusive;

fn graph_from(edges: &[(&str, &str, f64)]) -> WeightedGraph {
    let mut g = WeightedGraph::default();
    for &(v, w, weight) in edges {
        g.set_edge(v, w, weight);
    }
    g
}

/// `s -> a (2)`, `s -> b (4)`, `a -> b (-3)`.
pub fn simple_graph() -> WeightedGraph {
    graph_from(&[("s", "a", 2.0), ("s", "b", 4.0), ("a", "b", -3.0)])
}

/// Five nodes, three negative edges, no negative cycle.
pub fn bigger_toy_graph() -> WeightedGraph {
    graph_from(&[
        ("0", "1", 2.0),
        ("1", "2", -3.0),
        ("2", "3", 2.0),
        ("3", "4", -1.0),
        ("4", "2", 1.0),
        ("0", "3", 4.0),
    ])
}

/// Six nodes whose residual components spread over several layers.
pub fn layered_toy_graph() -> WeightedGraph {
    graph_from(&[
        ("0", "1", 2.0),
        ("1", "2", -3.0),
        ("2", "3", 2.0),
        ("1", "3", 2.0),
        ("3", "4", 4.0),
        ("3", "5", 1.0),
        ("4", "5", -4.0),
        ("5", "1", 1.0),
    ])
}

/// `0 -> 1 -> ... -> n-1 -> 0`, every edge weighing `-1`.
pub fn negative_ring(n: usize) -> WeightedGraph {
    let mut g = WeightedGraph::default();
    for i in 0..n {
        g.set_edge(i.to_string(), ((i + 1) % n).to_string(), -1.0);
    }
    g
}

#[derive(Debug, Clone, PartialEq)]
pub struct RandomGraphOptions {
    pub nodes: usize,
    /// Probability of each ordered pair `(u, v)`, `u != v`, carrying an edge.
    pub edge_probability: f64,
    pub min_weight: i64,
    pub max_weight: i64,
    /// When false, weights are raised where needed so that a hidden potential vector is
    /// feasible, which rules out negative cycles.
    pub allow_negative_cycles: bool,
}

impl Default for RandomGraphOptions {
    fn default() -> Self {
        Self {
            nodes: 400,
            edge_probability: 0.1,
            min_weight: -10,
            max_weight: 10,
            allow_negative_cycles: false,
        }
    }
}

fn check_range(range: &RangeInclusive<i64>) -> Result<()> {
    if range.is_empty() {
        return Err(Error::InvalidGenerator {
            reason: format!("empty weight range {}..={}", range.start(), range.end()),
        });
    }
    Ok(())
}

pub fn random_graph<R: Rng + ?Sized>(
    opts: &RandomGraphOptions,
    rng: &mut R,
) -> Result<WeightedGraph> {
    if !(0.0..=1.0).contains(&opts.edge_probability) {
        return Err(Error::InvalidGenerator {
            reason: format!("edge probability {} is outside [0, 1]", opts.edge_probability),
        });
    }
    let range = opts.min_weight..=opts.max_weight;
    check_range(&range)?;

    let hidden: Vec<i64> = if opts.allow_negative_cycles {
        Vec::new()
    } else {
        let depth = opts.min_weight.min(0);
        (0..opts.nodes).map(|_| rng.gen_range(depth..=0)).collect()
    };

    let mut g = WeightedGraph::default();
    for u in 0..opts.nodes {
        g.set_node(u.to_string(), ());
    }
    for u in 0..opts.nodes {
        for v in 0..opts.nodes {
            if u == v || !rng.gen_bool(opts.edge_probability) {
                continue;
            }
            let mut weight = rng.gen_range(range.clone());
            if let (Some(pu), Some(pv)) = (hidden.get(u), hidden.get(v)) {
                weight = weight.max(pv - pu);
            }
            g.set_edge(u.to_string(), v.to_string(), weight as f64);
        }
    }
    tracing::debug!(nodes = g.node_count(), edges = g.edge_count(), "generated random graph");
    Ok(g)
}

/// A `rows x cols` grid with edges to the right and downward neighbours. Node `(i, j)` is
/// `i * cols + j`.
pub fn grid_graph<R: Rng + ?Sized>(
    rows: usize,
    cols: usize,
    range: RangeInclusive<i64>,
    rng: &mut R,
) -> Result<WeightedGraph> {
    check_range(&range)?;

    let mut g = WeightedGraph::default();
    for node in 0..rows * cols {
        g.set_node(node.to_string(), ());
    }
    for i in 0..rows {
        for j in 0..cols {
            let node = i * cols + j;
            if j + 1 < cols {
                let weight = rng.gen_range(range.clone()) as f64;
                g.set_edge(node.to_string(), (node + 1).to_string(), weight);
            }
            if i + 1 < rows {
                let weight = rng.gen_range(range.clone()) as f64;
                g.set_edge(node.to_string(), (node + cols).to_string(), weight);
            }
        }
    }
    Ok(g)
}
