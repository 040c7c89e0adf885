use reweigh::contract::{Contraction, SUPER_SOURCE, contract};
use reweigh::layer::Layering;
use reweigh::reduced::reduced_lengths;
use reweigh::residual::residual_subgraph;
use reweigh::{Potentials, WeightedGraph};

fn graph(edges: &[(&str, &str, f64)]) -> WeightedGraph {
    let mut g = WeightedGraph::default();
    for &(v, w, weight) in edges {
        g.set_edge(v, w, weight);
    }
    g
}

fn contracted(g: &WeightedGraph, y: &Potentials) -> Contraction {
    let reduced: Vec<f64> = reduced_lengths(g, y)
        .unwrap()
        .into_iter()
        .map(|(_, len)| len)
        .collect();
    contract(&residual_subgraph(g, &reduced))
}

fn component_of(g: &WeightedGraph, c: &Contraction, node: &str) -> usize {
    c.component_of[g.node_ix(node).unwrap()]
}

#[test]
fn zero_cycles_merge_and_parallel_edges_survive() {
    let g = graph(&[
        ("a", "b", 0.0),
        ("b", "a", 0.0),
        ("b", "c", -2.0),
        ("a", "c", -1.0),
        ("c", "d", 5.0),
    ]);
    let c = contracted(&g, &Potentials::zeros(&g));

    assert_eq!(c.component_count(), 3);
    assert!(c.same_component(g.node_ix("a").unwrap(), g.node_ix("b").unwrap()));
    assert!(!c.same_component(g.node_ix("b").unwrap(), g.node_ix("c").unwrap()));

    let ab = Contraction::node_id(component_of(&g, &c, "a"));
    let cc = Contraction::node_id(component_of(&g, &c, "c"));
    assert!(c.graph.options().multigraph);
    assert_eq!(c.graph.out_edges(&ab, Some(cc.as_str())).len(), 2);
    assert_eq!(c.graph.node_count(), 4);
    assert_eq!(c.graph.edge_count(), 2 + 3);
    assert_eq!(c.graph.successors(SUPER_SOURCE).len(), 3);

    let layering = Layering::assign(&c).unwrap();
    assert_eq!(layering.layer_of(component_of(&g, &c, "a")), Some(0.0));
    assert_eq!(layering.layer_of(component_of(&g, &c, "c")), Some(2.0));
    assert_eq!(layering.layer_of(component_of(&g, &c, "d")), Some(0.0));
    assert_eq!(layering.threshold(), Some(2.0));
    assert_eq!(
        layering.select(2.0),
        vec![component_of(&g, &c, "c")]
    );
}

#[test]
fn positive_edges_stay_out_of_the_residual_graph() {
    let g = graph(&[("s", "a", 2.0), ("s", "b", 4.0), ("a", "b", -3.0)]);
    let y = Potentials::from([("s", 0.0), ("a", 0.0), ("b", -3.0)]);
    let c = contracted(&g, &y);

    // a -> b sits at exactly zero and is the only residual edge.
    assert_eq!(c.component_count(), 3);
    assert_eq!(c.graph.edge_count(), 1 + 3);
    let layering = Layering::assign(&c).unwrap();
    assert_eq!(layering.layers.len(), 1);
    assert_eq!(layering.threshold(), None);
}

#[test]
fn layers_follow_shortest_distance_in_the_contraction() {
    // Two routes into d: the deeper one decides its layer.
    let g = graph(&[
        ("s", "a", -1.0),
        ("a", "d", -1.0),
        ("s", "d", -1.0),
        ("x", "y", -1.0),
    ]);
    let c = contracted(&g, &Potentials::zeros(&g));
    let layering = Layering::assign(&c).unwrap();

    let indices: Vec<(f64, usize)> = layering
        .layers
        .iter()
        .map(|l| (l.index, l.components.len()))
        .collect();
    assert_eq!(indices, vec![(0.0, 2), (1.0, 2), (2.0, 1)]);
    assert_eq!(layering.layer_of(component_of(&g, &c, "d")), Some(2.0));
    assert_eq!(layering.threshold(), Some(1.0));
    assert_eq!(layering.select(1.0).len(), 3);
}
