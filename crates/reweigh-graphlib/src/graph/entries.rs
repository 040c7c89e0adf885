//! Row types backing [`Graph`](super::Graph); positions in the owning `Vec` are the node
//! and edge indices.

use super::EdgeKey;

#[derive(Debug, Clone)]
pub(in crate::graph) struct NodeSlot<N> {
    pub(in crate::graph) id: String,
    pub(in crate::graph) label: N,
}

#[derive(Debug, Clone)]
pub(in crate::graph) struct EdgeSlot<E> {
    pub(in crate::graph) key: EdgeKey,
    pub(in crate::graph) tail: usize,
    pub(in crate::graph) head: usize,
    pub(in crate::graph) label: E,
}

impl<E> EdgeSlot<E> {
    pub(in crate::graph) fn ends(&self) -> (usize, usize) {
        (self.tail, self.head)
    }
}
