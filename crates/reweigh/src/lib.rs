#![forbid(unsafe_code)]

//! Potential rounding for directed graphs with negative edge weights.
//!
//! Given edge weights `w` and a predicted potential vector `y` (for example from a
//! heuristic or a learned model), [`round_potentials`] repairs `y` until every edge has a
//! non-negative reduced length `w(u, v) + y(u) - y(v)`, or reports that the graph has a
//! negative cycle and no such vector exists. Feasible potentials let downstream code run
//! Dijkstra-style algorithms on the reweighted graph.
//!
//! Each round builds the subgraph of non-positive reduced lengths, contracts its strongly
//! connected components, layers the components by their shortest distance from a
//! super-source (Bellman-Ford), and lowers the potentials of the deepest layers by one.

pub use reweigh_graphlib as graphlib;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod contract;
pub mod error;
pub mod generate;
pub mod input;
pub mod layer;
pub mod observer;
pub mod options;
pub mod potentials;
pub mod reduced;
pub mod residual;
pub mod round;
pub mod shift;
pub mod validate;

pub use error::{Error, Result};
pub use input::{EdgeInput, GraphInput, NodeId};
pub use observer::{CancelFlag, EventLog, IterationEvent, Observer};
pub use options::RoundingOptions;
pub use potentials::Potentials;
pub use round::{Rounding, RoundingStatus, round_potentials, round_potentials_with};
pub use shift::{ShiftSource, shift_potentials};

/// The graph type the rounding engine consumes: unit node labels, edge label = weight.
pub type WeightedGraph = graphlib::Graph<(), f64>;
