use reweigh_graphlib::{EdgeKey, Graph, GraphOptions};

#[test]
fn nodes_and_edges_iterate_in_insertion_order() {
    let mut g: Graph<(), f64> = Graph::default();
    g.set_node("c", ());
    g.set_edge("b", "a", 1.0);
    g.set_edge("c", "b", 2.0);

    assert_eq!(g.nodes().collect::<Vec<_>>(), vec!["c", "b", "a"]);
    assert_eq!(
        g.edges().map(|e| (e.v.as_str(), e.w.as_str())).collect::<Vec<_>>(),
        vec![("b", "a"), ("c", "b")]
    );
    assert_eq!(g.node_ix("a"), Some(2));
    assert_eq!(g.node_id(0), Some("c"));
}

#[test]
fn set_edge_adds_missing_endpoints() {
    let mut g: Graph<(), f64> = Graph::default();
    g.set_edge("a", "b", -3.0);

    assert!(g.has_node("a"));
    assert!(g.has_node("b"));
    assert_eq!(g.node_count(), 2);
    assert_eq!(g.edge("a", "b", None), Some(&-3.0));
    assert_eq!(g.edge("b", "a", None), None);
}

#[test]
fn simple_graphs_keep_one_edge_per_ordered_pair() {
    let mut g: Graph<(), f64> = Graph::default();
    g.set_edge("a", "b", 1.0);
    g.set_edge_named("a", "b", Some("ignored"), 5.0);

    assert_eq!(g.edge_count(), 1);
    assert_eq!(g.edge("a", "b", Some("whatever")), Some(&5.0));
}

#[test]
fn multigraphs_keep_parallel_edges_apart_by_name() {
    let mut g: Graph<(), f64> = Graph::new(GraphOptions { multigraph: true });
    g.set_edge_named("a", "b", Some("x"), 1.0);
    g.set_edge_named("a", "b", Some("y"), 2.0);
    g.set_edge("a", "b", 3.0);

    assert_eq!(g.edge_count(), 3);
    assert_eq!(g.edge("a", "b", Some("x")), Some(&1.0));
    assert_eq!(g.edge("a", "b", Some("y")), Some(&2.0));
    assert_eq!(g.edge("a", "b", None), Some(&3.0));
    assert_eq!(g.out_edges("a", Some("b")).len(), 3);
    assert_eq!(g.successors("a"), vec!["b"]);
    assert_eq!(g.successor_ixs(0), vec![1, 1, 1]);
    assert_eq!(
        g.edge_by_key(&EdgeKey::new("a", "b", Some("y"))),
        Some(&2.0)
    );
}

#[test]
fn successors_follow_edge_direction() {
    let mut g: Graph<(), f64> = Graph::default();
    g.set_edge("a", "b", 1.0);
    g.set_edge("a", "c", 1.0);
    g.set_edge("c", "b", 1.0);

    assert_eq!(g.successors("a"), vec!["b", "c"]);
    assert_eq!(g.successors("b"), Vec::<&str>::new());
    assert_eq!(g.out_edges("c", Some("b")), vec![EdgeKey::new("c", "b", None::<String>)]);
    assert!(g.successors("missing").is_empty());
}

#[test]
fn adjacency_is_refreshed_after_new_edges() {
    let mut g: Graph<(), f64> = Graph::default();
    g.set_edge("a", "b", 1.0);
    assert_eq!(g.successors("a"), vec!["b"]);

    g.set_edge("a", "c", 1.0);
    assert_eq!(g.successors("a"), vec!["b", "c"]);
    assert_eq!(g.successor_ixs(0), vec![1, 2]);
}

#[test]
fn edge_keys_display_with_optional_name() {
    assert_eq!(EdgeKey::new("a", "b", None::<String>).to_string(), "a -> b");
    assert_eq!(EdgeKey::new("a", "b", Some("7")).to_string(), "a -> b (7)");
}
