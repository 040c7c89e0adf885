//! Graph algorithms: strongly connected components and Bellman-Ford shortest paths.

use super::{EdgeKey, Graph};
use crate::error::{Error, Result};
use rustc_hash::FxHashMap as HashMap;

const UNVISITED: usize = usize::MAX;

/// Strongly connected components (Tarjan), singletons included, as node indices.
///
/// Components are emitted in completion order, which is a reverse topological order of the
/// condensation. The search keeps an explicit frame stack so long paths cannot overflow the
/// call stack.
pub fn tarjan_ix<N, E>(g: &Graph<N, E>) -> Vec<Vec<usize>> {
    struct Tarjan {
        succ: Vec<Vec<usize>>,
        next_index: usize,
        index: Vec<usize>,
        lowlink: Vec<usize>,
        on_stack: Vec<bool>,
        stack: Vec<usize>,
        sccs: Vec<Vec<usize>>,
    }

    impl Tarjan {
        fn visit(&mut self, v: usize) {
            self.index[v] = self.next_index;
            self.lowlink[v] = self.next_index;
            self.next_index += 1;
            self.stack.push(v);
            self.on_stack[v] = true;
        }

        fn strongconnect(&mut self, root: usize) {
            // (node, position of the next successor to look at)
            let mut frames: Vec<(usize, usize)> = vec![(root, 0)];
            self.visit(root);

            while let Some(frame) = frames.last_mut() {
                let v = frame.0;
                if let Some(&w) = self.succ[v].get(frame.1) {
                    frame.1 += 1;
                    if self.index[w] == UNVISITED {
                        self.visit(w);
                        frames.push((w, 0));
                    } else if self.on_stack[w] {
                        self.lowlink[v] = self.lowlink[v].min(self.index[w]);
                    }
                    continue;
                }

                frames.pop();
                if let Some(&(parent, _)) = frames.last() {
                    self.lowlink[parent] = self.lowlink[parent].min(self.lowlink[v]);
                }

                if self.lowlink[v] == self.index[v] {
                    let mut scc: Vec<usize> = Vec::new();
                    while let Some(w) = self.stack.pop() {
                        self.on_stack[w] = false;
                        scc.push(w);
                        if w == v {
                            break;
                        }
                    }
                    self.sccs.push(scc);
                }
            }
        }
    }

    let n = g.node_count();
    let mut tarjan = Tarjan {
        succ: (0..n).map(|ix| g.successor_ixs(ix)).collect(),
        next_index: 0,
        index: vec![UNVISITED; n],
        lowlink: vec![0; n],
        on_stack: vec![false; n],
        stack: Vec::new(),
        sccs: Vec::new(),
    };

    for v in 0..n {
        if tarjan.index[v] == UNVISITED {
            tarjan.strongconnect(v);
        }
    }
    tarjan.sccs
}

/// Strongly connected components (Tarjan), singletons included, as node ids.
pub fn tarjan<N, E>(g: &Graph<N, E>) -> Vec<Vec<String>> {
    tarjan_ix(g)
        .into_iter()
        .map(|scc| {
            scc.into_iter()
                .filter_map(|ix| g.node_id(ix))
                .map(str::to_string)
                .collect()
        })
        .collect()
}

/// SCCs that contain a cycle: components with more than one node, or a self-loop.
pub fn find_cycles<N, E>(g: &Graph<N, E>) -> Vec<Vec<String>> {
    let mut cycles: Vec<Vec<usize>> = Vec::new();
    for mut scc in tarjan_ix(g) {
        if scc.len() > 1 {
            // Deterministic node order: use original insertion order.
            scc.sort_unstable();
            cycles.push(scc);
        } else if g.successor_ixs(scc[0]).contains(&scc[0]) {
            cycles.push(scc);
        }
    }
    cycles.sort_by_key(|scc| scc.first().copied());
    cycles
        .into_iter()
        .map(|scc| {
            scc.into_iter()
                .filter_map(|ix| g.node_id(ix))
                .map(str::to_string)
                .collect()
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct PathEntry {
    /// `f64::INFINITY` when the node is unreachable from the source.
    pub distance: f64,
    pub predecessor: Option<String>,
}

/// Single-source shortest paths that tolerate negative edge weights.
///
/// Every node gets an entry. Relaxation runs at most `N - 1` full passes over the edges and
/// stops early once a pass changes nothing; one more verification pass then fails with
/// [`Error::NegativeCycleReachable`] if any edge can still be relaxed. Parallel edges are
/// relaxed independently, so the cheapest one wins.
pub fn bellman_ford<N, E, F>(
    g: &Graph<N, E>,
    source: &str,
    mut weight_fn: F,
) -> Result<HashMap<String, PathEntry>>
where
    F: FnMut(&EdgeKey, &E) -> f64,
{
    let Some(source_ix) = g.node_ix(source) else {
        return Err(Error::UnknownSource {
            node: source.to_string(),
        });
    };

    let mut edges: Vec<(usize, usize, f64)> = Vec::with_capacity(g.edge_count());
    g.for_each_edge_ix(|v_ix, w_ix, key, label| {
        edges.push((v_ix, w_ix, weight_fn(key, label)));
    });

    let n = g.node_count();
    let mut dist: Vec<f64> = vec![f64::INFINITY; n];
    let mut pred: Vec<Option<usize>> = vec![None; n];
    dist[source_ix] = 0.0;

    let mut passes = 0usize;
    for _ in 1..n {
        passes += 1;
        let mut changed = false;
        for &(v_ix, w_ix, weight) in &edges {
            let candidate = dist[v_ix] + weight;
            if candidate < dist[w_ix] {
                dist[w_ix] = candidate;
                pred[w_ix] = Some(v_ix);
                changed = true;
            }
        }
        if !changed {
            break;
        }
    }
    tracing::trace!(source, nodes = n, edges = edges.len(), passes, "bellman-ford relaxed");

    if edges
        .iter()
        .any(|&(v_ix, w_ix, weight)| dist[v_ix] + weight < dist[w_ix])
    {
        return Err(Error::NegativeCycleReachable {
            node: source.to_string(),
        });
    }

    let mut out: HashMap<String, PathEntry> = HashMap::default();
    out.reserve(n);
    for (ix, (&distance, p)) in dist.iter().zip(&pred).enumerate() {
        let Some(id) = g.node_id(ix) else {
            continue;
        };
        let predecessor = p.and_then(|p| g.node_id(p)).map(str::to_string);
        out.insert(
            id.to_string(),
            PathEntry {
                distance,
                predecessor,
            },
        );
    }
    Ok(out)
}

/// Node ids on the shortest path from the source to `target`, both ends included.
///
/// Returns `None` when `target` is unknown or unreachable.
pub fn path_to(paths: &HashMap<String, PathEntry>, target: &str) -> Option<Vec<String>> {
    let entry = paths.get(target)?;
    if !entry.distance.is_finite() {
        return None;
    }

    let mut path: Vec<String> = vec![target.to_string()];
    let mut cur = entry.predecessor.as_deref();
    while let Some(v) = cur {
        // A hand-assembled map may contain a predecessor loop.
        if path.len() > paths.len() {
            return None;
        }
        path.push(v.to_string());
        cur = paths.get(v).and_then(|e| e.predecessor.as_deref());
    }
    path.reverse();
    Some(path)
}
