//! Fail-fast input checks, run before the first rounding iteration.

use crate::{Error, Potentials, Result, RoundingOptions, WeightedGraph};

pub fn check_inputs(
    g: &WeightedGraph,
    initial: &Potentials,
    options: &RoundingOptions,
) -> Result<()> {
    if options.max_iterations == 0 {
        return Err(Error::InvalidIterationCap);
    }
    if options.stall_limit == Some(0) {
        return Err(Error::InvalidStallLimit);
    }
    check_weights(g)?;
    check_potentials(g, initial)
}

pub fn check_weights(g: &WeightedGraph) -> Result<()> {
    for key in g.edges() {
        if !g.edge_by_key(key).is_some_and(|w| w.is_finite()) {
            return Err(Error::NonFiniteWeight {
                from: key.v.clone(),
                to: key.w.clone(),
            });
        }
    }
    Ok(())
}

/// `y` must cover every node of `g` with a finite value and name no other node.
pub fn check_potentials(g: &WeightedGraph, y: &Potentials) -> Result<()> {
    for node in g.nodes() {
        match y.get(node) {
            None => {
                return Err(Error::MissingPotential {
                    node: node.to_string(),
                });
            }
            Some(v) if !v.is_finite() => {
                return Err(Error::NonFinitePotential {
                    node: node.to_string(),
                });
            }
            Some(_) => {}
        }
    }
    if let Some((node, _)) = y.iter().find(|(node, _)| !g.has_node(node)) {
        return Err(Error::UnknownPotential {
            node: node.to_string(),
        });
    }
    Ok(())
}
