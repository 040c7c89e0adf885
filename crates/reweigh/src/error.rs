use crate::graphlib::{self, EdgeKey};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("negative-weight cycle reachable from `{node}`")]
    NegativeCycleReachable { node: String },

    /// No potential vector can make every reduced length non-negative.
    #[error("negative cycle in contracted graph at iteration {iteration}{}", witness(.edge))]
    NegativeCycleInContraction {
        iteration: usize,
        edge: Option<EdgeKey>,
    },

    #[error("source node `{node}` is not in the graph")]
    UnknownSource { node: String },

    #[error("edge {from} -> {to} references unknown node `{node}`")]
    UnknownEndpoint {
        from: String,
        to: String,
        node: String,
    },

    #[error("duplicate edge {from} -> {to}")]
    DuplicateEdge { from: String, to: String },

    #[error("edge {from} -> {to} has a non-finite weight")]
    NonFiniteWeight { from: String, to: String },

    #[error("no potential given for node `{node}`")]
    MissingPotential { node: String },

    #[error("potential of node `{node}` is not finite")]
    NonFinitePotential { node: String },

    #[error("potential given for unknown node `{node}`")]
    UnknownPotential { node: String },

    #[error("iteration cap must be positive")]
    InvalidIterationCap,

    #[error("stall limit must be positive")]
    InvalidStallLimit,

    #[error("invalid generator parameters: {reason}")]
    InvalidGenerator { reason: String },

    #[error("invalid graph input: {0}")]
    Json(#[from] serde_json::Error),
}

fn witness(edge: &Option<EdgeKey>) -> String {
    match edge {
        Some(edge) => format!(" (edge {edge})"),
        None => String::new(),
    }
}

impl Error {
    /// True for the two variants that mean the input graph has a negative cycle.
    pub fn is_negative_cycle(&self) -> bool {
        matches!(
            self,
            Self::NegativeCycleReachable { .. } | Self::NegativeCycleInContraction { .. }
        )
    }
}

impl From<graphlib::Error> for Error {
    fn from(value: graphlib::Error) -> Self {
        match value {
            graphlib::Error::NegativeCycleReachable { node } => {
                Self::NegativeCycleReachable { node }
            }
            graphlib::Error::UnknownSource { node } => Self::UnknownSource { node },
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
