use reweigh_graphlib::{Graph, alg};

fn sorted(mut sccs: Vec<Vec<String>>) -> Vec<Vec<String>> {
    for scc in &mut sccs {
        scc.sort();
    }
    sccs.sort();
    sccs
}

fn path(g: &mut Graph<(), f64>, nodes: &[&str]) {
    for pair in nodes.windows(2) {
        g.set_edge(pair[0], pair[1], 1.0);
    }
}

#[test]
fn tarjan_returns_an_empty_list_for_an_empty_graph() {
    let g: Graph<(), f64> = Graph::default();
    assert!(alg::tarjan(&g).is_empty());
}

#[test]
fn tarjan_returns_singletons_for_isolated_nodes() {
    let mut g: Graph<(), f64> = Graph::default();
    g.set_node("a", ());
    g.set_node("b", ());

    assert_eq!(
        sorted(alg::tarjan(&g)),
        vec![vec!["a".to_string()], vec!["b".to_string()]]
    );
}

#[test]
fn tarjan_merges_mutually_reachable_nodes() {
    let mut g: Graph<(), f64> = Graph::default();
    path(&mut g, &["a", "b", "c", "a"]);
    path(&mut g, &["c", "d", "e", "d"]);
    g.set_node("f", ());

    assert_eq!(
        sorted(alg::tarjan(&g)),
        vec![
            vec!["a".to_string(), "b".to_string(), "c".to_string()],
            vec!["d".to_string(), "e".to_string()],
            vec!["f".to_string()],
        ]
    );
}

#[test]
fn tarjan_partitions_every_node_exactly_once() {
    let mut g: Graph<(), f64> = Graph::default();
    path(&mut g, &["a", "b", "a"]);
    path(&mut g, &["b", "c", "d"]);
    path(&mut g, &["d", "e", "c"]);
    g.set_node("x", ());

    let sccs = alg::tarjan_ix(&g);
    let mut seen: Vec<usize> = sccs.iter().flatten().copied().collect();
    seen.sort_unstable();
    assert_eq!(seen, (0..g.node_count()).collect::<Vec<_>>());
}

#[test]
fn tarjan_emits_components_in_reverse_topological_order() {
    let mut g: Graph<(), f64> = Graph::default();
    path(&mut g, &["a", "b", "c"]);

    assert_eq!(
        alg::tarjan(&g),
        vec![
            vec!["c".to_string()],
            vec!["b".to_string()],
            vec!["a".to_string()],
        ]
    );
}

#[test]
fn tarjan_handles_long_paths_without_recursion() {
    let mut g: Graph<(), f64> = Graph::default();
    let ids: Vec<String> = (0..200_000).map(|i| format!("n{i}")).collect();
    for pair in ids.windows(2) {
        g.set_edge(pair[0].clone(), pair[1].clone(), 1.0);
    }
    g.set_edge(ids[ids.len() - 1].clone(), ids[0].clone(), 1.0);

    let sccs = alg::tarjan_ix(&g);
    assert_eq!(sccs.len(), 1);
    assert_eq!(sccs[0].len(), ids.len());
}

#[test]
fn find_cycles_ignores_acyclic_graphs() {
    let mut g: Graph<(), f64> = Graph::default();
    path(&mut g, &["a", "b", "c"]);
    assert_eq!(alg::find_cycles(&g), Vec::<Vec<String>>::new());
}

#[test]
fn find_cycles_reports_cycles_and_self_loops_in_insertion_order() {
    let mut g: Graph<(), f64> = Graph::default();
    path(&mut g, &["a", "b", "a"]);
    path(&mut g, &["c", "d", "e", "c"]);
    g.set_edge("f", "f", 1.0);
    g.set_node("g", ());

    assert_eq!(
        alg::find_cycles(&g),
        vec![
            vec!["a".to_string(), "b".to_string()],
            vec!["c".to_string(), "d".to_string(), "e".to_string()],
            vec!["f".to_string()],
        ]
    );
}
