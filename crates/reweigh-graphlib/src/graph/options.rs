//! Graph configuration options.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GraphOptions {
    /// Allow several edges between the same ordered pair, told apart by an edge name.
    pub multigraph: bool,
}
