//! The potential-rounding loop.
//!
//! Each round:
//! 1. computes reduced lengths under the current potentials and stops when none is negative;
//! 2. builds the residual subgraph G⁻ (reduced length `<= 0`) and contracts its SCCs;
//! 3. layers the components by their shortest distance from a super-source in the
//!    contracted graph H;
//! 4. picks the threshold layer `i*` (see [`Layering::threshold`]) and lowers by one every
//!    node of the components at depth `>= i*`, except the head of a violating edge whose
//!    tail is lowered too.
//!
//! A violating edge inside one component of G⁻ closes a cycle of non-positive reduced
//! length with a negative member, so the input graph has a negative cycle. That case and a
//! negative cycle found by Bellman-Ford on H both abort with
//! [`Error::NegativeCycleInContraction`].

use crate::contract::contract;
use crate::graphlib::{self, EdgeKey};
use crate::layer::Layering;
use crate::observer::{IterationEvent, Observer};
use crate::reduced::EdgeTable;
use crate::residual::residual_subgraph;
use crate::{Error, Potentials, Result, RoundingOptions, WeightedGraph, validate};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RoundingStatus {
    /// Every reduced length is non-negative.
    Feasible,
    /// `max_iterations` rounds ran without reaching feasibility.
    IterationCapReached,
    /// The same violating edges and selected components repeated `stall_limit` times.
    Stalled,
    /// The observer asked to stop.
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Rounding {
    pub potentials: Potentials,
    pub status: RoundingStatus,
    /// Decrement rounds performed.
    pub iterations: usize,
    /// Total number of single-node decrements.
    pub decrements: usize,
}

impl Rounding {
    pub fn is_feasible(&self) -> bool {
        self.status == RoundingStatus::Feasible
    }
}

pub fn round_potentials(
    g: &WeightedGraph,
    initial: &Potentials,
    options: &RoundingOptions,
) -> Result<Rounding> {
    round_potentials_with(g, initial, options, &mut ())
}

/// Like [`round_potentials`], reporting every round to `observer` and polling it for
/// cancellation.
pub fn round_potentials_with<O: Observer + ?Sized>(
    g: &WeightedGraph,
    initial: &Potentials,
    options: &RoundingOptions,
    observer: &mut O,
) -> Result<Rounding> {
    validate::check_inputs(g, initial, options)?;

    let table = EdgeTable::new(g);
    let mut y = initial.to_dense(g);
    let stall_limit = options.effective_stall_limit();

    let mut last_round: Option<(Vec<usize>, Vec<Vec<usize>>)> = None;
    let mut stall = 0usize;
    let mut iterations = 0usize;
    let mut decrements = 0usize;
    let mut status: Option<RoundingStatus> = None;

    while iterations < options.max_iterations {
        let reduced = table.reduced(&y);
        let violating: Vec<usize> = (0..reduced.len()).filter(|&e| reduced[e] < 0.0).collect();
        if violating.is_empty() {
            status = Some(RoundingStatus::Feasible);
            break;
        }
        if observer.cancelled() {
            status = Some(RoundingStatus::Cancelled);
            break;
        }
        let iteration = iterations + 1;

        let residual = residual_subgraph(g, &reduced);
        let contraction = contract(&residual);
        if let Some(&e) = violating.iter().find(|&&e| {
            let (u, v) = table.ends[e];
            contraction.same_component(u, v)
        }) {
            return Err(Error::NegativeCycleInContraction {
                iteration,
                edge: g.edge_key(e).cloned(),
            });
        }

        let layering = Layering::assign(&contraction).map_err(|err| match err {
            graphlib::Error::NegativeCycleReachable { .. } => Error::NegativeCycleInContraction {
                iteration,
                edge: None,
            },
            other => Error::from(other),
        })?;
        let Some(threshold) = layering.threshold() else {
            tracing::warn!(iteration, "no layer below the super-source; stopping");
            status = Some(RoundingStatus::Stalled);
            break;
        };
        let selected = layering.select(threshold);

        let mut lower = vec![false; g.node_count()];
        for &c in &selected {
            for &v in &contraction.components[c] {
                lower[v] = true;
            }
        }
        for &e in &violating {
            let (u, v) = table.ends[e];
            if lower[u] && lower[v] {
                lower[v] = false;
            }
        }

        let mut selected_nodes: Vec<Vec<usize>> = selected
            .iter()
            .map(|&c| {
                let mut nodes = contraction.components[c].clone();
                nodes.sort_unstable();
                nodes
            })
            .collect();
        selected_nodes.sort_unstable();
        let this_round = (violating, selected_nodes);
        if last_round.as_ref() == Some(&this_round) {
            stall += 1;
            if stall >= stall_limit {
                tracing::warn!(iteration, stall, "rounding stalled");
                status = Some(RoundingStatus::Stalled);
                break;
            }
        } else {
            stall = 0;
        }

        let decremented: Vec<&str> = (0..lower.len())
            .filter(|&v| lower[v])
            .filter_map(|v| g.node_id(v))
            .collect();
        let violating_keys: Vec<&EdgeKey> = this_round
            .0
            .iter()
            .filter_map(|&e| g.edge_key(e))
            .collect();
        tracing::debug!(
            iteration,
            violating = violating_keys.len(),
            components = contraction.component_count(),
            threshold,
            decremented = decremented.len(),
            "rounding iteration"
        );
        observer.on_iteration(&IterationEvent {
            iteration,
            violating: &violating_keys,
            components: contraction.component_count(),
            threshold,
            selected: selected.len(),
            decremented: &decremented,
        });

        for (v, value) in y.iter_mut().enumerate() {
            if lower[v] {
                *value -= 1.0;
            }
        }
        decrements += decremented.len();
        iterations = iteration;
        last_round = Some(this_round);
    }

    let status = match status {
        Some(status) => status,
        None if table.reduced(&y).iter().all(|&len| len >= 0.0) => RoundingStatus::Feasible,
        None => {
            tracing::warn!(
                max_iterations = options.max_iterations,
                "iteration cap reached before feasibility"
            );
            RoundingStatus::IterationCapReached
        }
    };
    tracing::info!(?status, iterations, decrements, "rounding finished");

    Ok(Rounding {
        potentials: Potentials::from_dense(g, &y),
        status,
        iterations,
        decrements,
    })
}
