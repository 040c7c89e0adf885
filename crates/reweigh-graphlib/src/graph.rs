//! Directed graph container.
//!
//! This module contains the core `Graph` container plus the graph algorithms re-exported
//! as `reweigh_graphlib::alg`.

use rustc_hash::FxBuildHasher;
use std::cell::RefCell;

mod adj_cache;
pub mod alg;
mod edge_key;
mod entries;
mod options;

use adj_cache::DirectedAdjCache;
use edge_key::EdgeKeyView;
use entries::{EdgeSlot, NodeSlot};

pub use edge_key::EdgeKey;
pub use options::GraphOptions;

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

pub struct Graph<N, E> {
    options: GraphOptions,

    nodes: Vec<NodeSlot<N>>,
    node_index: HashMap<String, usize>,

    edges: Vec<EdgeSlot<E>>,
    edge_index: HashMap<EdgeKey, usize>,

    // Interior mutability keeps the adjacency queries on `&self`.
    adj_gen: u64,
    adj_cache: RefCell<Option<DirectedAdjCache>>,
}

impl<N, E> Default for Graph<N, E> {
    fn default() -> Self {
        Self::new(GraphOptions::default())
    }
}

impl<N: Clone, E: Clone> Clone for Graph<N, E> {
    fn clone(&self) -> Self {
        Self {
            options: self.options,
            nodes: self.nodes.clone(),
            node_index: self.node_index.clone(),
            edges: self.edges.clone(),
            edge_index: self.edge_index.clone(),
            adj_gen: self.adj_gen,
            adj_cache: RefCell::new(None),
        }
    }
}

impl<N, E> std::fmt::Debug for Graph<N, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Graph")
            .field("options", &self.options)
            .field("nodes", &self.nodes.len())
            .field("edges", &self.edges.len())
            .finish()
    }
}

impl<N, E> Graph<N, E> {
    fn invalidate_adj(&mut self) {
        self.adj_gen = self.adj_gen.wrapping_add(1);
        *self.adj_cache.get_mut() = None;
    }

    fn ensure_adj(&self) -> std::cell::Ref<'_, DirectedAdjCache> {
        let stale = self
            .adj_cache
            .borrow()
            .as_ref()
            .is_none_or(|c| c.generation != self.adj_gen);
        if stale {
            let cache = DirectedAdjCache::build(
                self.adj_gen,
                self.nodes.len(),
                self.edges.iter().map(EdgeSlot::ends),
            );
            *self.adj_cache.borrow_mut() = Some(cache);
        }
        std::cell::Ref::map(self.adj_cache.borrow(), |c| {
            c.as_ref()
                .expect("adjacency cache should be present after ensure")
        })
    }

    fn edge_key_view<'a>(&self, v: &'a str, w: &'a str, name: Option<&'a str>) -> EdgeKeyView<'a> {
        let name = if self.options.multigraph { name } else { None };
        EdgeKeyView { v, w, name }
    }

    pub fn new(options: GraphOptions) -> Self {
        Self {
            options,
            nodes: Vec::new(),
            node_index: HashMap::default(),
            edges: Vec::new(),
            edge_index: HashMap::default(),
            adj_gen: 0,
            adj_cache: RefCell::new(None),
        }
    }

    pub fn options(&self) -> GraphOptions {
        self.options
    }

    pub fn has_node(&self, id: &str) -> bool {
        self.node_index.contains_key(id)
    }

    pub fn set_node(&mut self, id: impl Into<String>, label: N) -> &mut Self {
        let id = id.into();
        if let Some(&idx) = self.node_index.get(&id) {
            self.nodes[idx].label = label;
            return self;
        }
        let idx = self.nodes.len();
        self.nodes.push(NodeSlot {
            id: id.clone(),
            label,
        });
        self.node_index.insert(id, idx);
        self.invalidate_adj();
        self
    }

    fn ensure_node_ix(&mut self, id: String) -> usize
    where
        N: Default,
    {
        if let Some(&idx) = self.node_index.get(&id) {
            return idx;
        }
        let idx = self.nodes.len();
        self.set_node(id, N::default());
        idx
    }

    pub fn node_ix(&self, id: &str) -> Option<usize> {
        self.node_index.get(id).copied()
    }

    pub fn node_id(&self, ix: usize) -> Option<&str> {
        self.nodes.get(ix).map(|n| n.id.as_str())
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(|n| n.id.as_str())
    }

    pub fn node_ids(&self) -> Vec<String> {
        self.nodes.iter().map(|n| n.id.clone()).collect()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edges(&self) -> impl Iterator<Item = &EdgeKey> {
        self.edges.iter().map(|e| &e.key)
    }

    pub fn edge_keys(&self) -> Vec<EdgeKey> {
        self.edges.iter().map(|e| e.key.clone()).collect()
    }

    pub fn edge_key(&self, edge_ix: usize) -> Option<&EdgeKey> {
        self.edges.get(edge_ix).map(|e| &e.key)
    }

    /// Visits edges in insertion order as `(tail_ix, head_ix, key, label)`; the position of
    /// an edge in this walk is its edge index.
    pub fn for_each_edge_ix<F>(&self, mut f: F)
    where
        F: FnMut(usize, usize, &EdgeKey, &E),
    {
        for e in &self.edges {
            f(e.tail, e.head, &e.key, &e.label);
        }
    }

    pub fn set_edge(&mut self, v: impl Into<String>, w: impl Into<String>, label: E) -> &mut Self
    where
        N: Default,
    {
        self.set_edge_named(v, w, None::<String>, label)
    }

    pub fn set_edge_named(
        &mut self,
        v: impl Into<String>,
        w: impl Into<String>,
        name: Option<impl Into<String>>,
        label: E,
    ) -> &mut Self
    where
        N: Default,
    {
        let v = v.into();
        let w = w.into();
        let tail = self.ensure_node_ix(v.clone());
        let head = self.ensure_node_ix(w.clone());

        let name = if self.options.multigraph {
            name.map(Into::into)
        } else {
            None
        };
        let key = EdgeKey { v, w, name };

        if let Some(&idx) = self.edge_index.get(&key) {
            self.edges[idx].label = label;
            return self;
        }

        let idx = self.edges.len();
        self.edges.push(EdgeSlot {
            key: key.clone(),
            tail,
            head,
            label,
        });
        self.edge_index.insert(key, idx);
        self.invalidate_adj();
        self
    }

    pub fn has_edge(&self, v: &str, w: &str, name: Option<&str>) -> bool {
        let view = self.edge_key_view(v, w, name);
        self.edge_index.contains_key(&view)
    }

    pub fn edge(&self, v: &str, w: &str, name: Option<&str>) -> Option<&E> {
        let view = self.edge_key_view(v, w, name);
        self.edge_index.get(&view).map(|&idx| &self.edges[idx].label)
    }

    pub fn edge_by_key(&self, key: &EdgeKey) -> Option<&E> {
        self.edge(&key.v, &key.w, key.name.as_deref())
    }

    pub fn successors(&self, v: &str) -> Vec<&str> {
        let Some(v_ix) = self.node_ix(v) else {
            return Vec::new();
        };
        let adj = self.ensure_adj();
        let mut out: Vec<&str> = Vec::new();
        for &edge_ix in adj.out_edges(v_ix) {
            let w = self.nodes[self.edges[edge_ix].head].id.as_str();
            if !out.contains(&w) {
                out.push(w);
            }
        }
        out
    }

    /// Head indices of the out-edges of `v_ix`, one entry per edge (parallel edges repeat).
    pub fn successor_ixs(&self, v_ix: usize) -> Vec<usize> {
        if v_ix >= self.nodes.len() {
            return Vec::new();
        }
        let adj = self.ensure_adj();
        adj.out_edges(v_ix)
            .iter()
            .map(|&edge_ix| self.edges[edge_ix].head)
            .collect()
    }

    pub fn out_edges(&self, v: &str, w: Option<&str>) -> Vec<EdgeKey> {
        let Some(v_ix) = self.node_ix(v) else {
            return Vec::new();
        };
        let adj = self.ensure_adj();
        adj.out_edges(v_ix)
            .iter()
            .map(|&edge_ix| &self.edges[edge_ix].key)
            .filter(|key| w.is_none_or(|w| key.w == w))
            .cloned()
            .collect()
    }
}
