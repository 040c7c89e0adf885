//! Adjacency cache used by [`Graph`](super::Graph).
//!
//! SCC search and the successor queries walk adjacency lists many times per rounding
//! iteration; scanning all edges each time is O(E) per query. The cache stores out-edge
//! indices in CSR form and is rebuilt lazily after the edge set changes.

#[derive(Debug, Clone)]
pub(in crate::graph) struct DirectedAdjCache {
    pub(in crate::graph) generation: u64,
    pub(in crate::graph) out_offsets: Vec<usize>,
    pub(in crate::graph) out_edges: Vec<usize>,
}

impl DirectedAdjCache {
    pub(in crate::graph) fn build(
        generation: u64,
        node_count: usize,
        endpoints: impl Iterator<Item = (usize, usize)> + Clone,
    ) -> Self {
        let mut out_offsets = vec![0usize; node_count + 1];
        for (v_ix, _) in endpoints.clone() {
            out_offsets[v_ix + 1] += 1;
        }
        for ix in 0..node_count {
            out_offsets[ix + 1] += out_offsets[ix];
        }

        let mut fill = out_offsets.clone();
        let mut out_edges = vec![0usize; out_offsets[node_count]];
        for (edge_ix, (v_ix, _)) in endpoints.enumerate() {
            out_edges[fill[v_ix]] = edge_ix;
            fill[v_ix] += 1;
        }

        Self {
            generation,
            out_offsets,
            out_edges,
        }
    }

    pub(in crate::graph) fn out_edges(&self, v_ix: usize) -> &[usize] {
        let start = self.out_offsets[v_ix];
        let end = self.out_offsets[v_ix + 1];
        &self.out_edges[start..end]
    }
}
