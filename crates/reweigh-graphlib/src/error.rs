#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("negative-weight cycle reachable from `{node}`")]
    NegativeCycleReachable { node: String },

    #[error("source node `{node}` is not in the graph")]
    UnknownSource { node: String },
}

pub type Result<T> = std::result::Result<T, Error>;
