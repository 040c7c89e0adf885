#![forbid(unsafe_code)]

//! Directed graph container plus the two graph primitives `reweigh` is built on:
//! strongly connected components (`alg::tarjan`) and single-source shortest paths with
//! negative-cycle detection (`alg::bellman_ford`).
//!
//! Node ids are strings. Nodes and edges iterate in insertion order, so every algorithm in
//! this crate is deterministic for a given construction order.

pub mod error;
pub mod graph;

pub use error::{Error, Result};
pub use graph::{EdgeKey, Graph, GraphOptions, alg};
