use rand::SeedableRng;
use rand::rngs::StdRng;
use reweigh::generate::{self, RandomGraphOptions};
use reweigh::graphlib::alg;
use reweigh::{Error, Potentials, RoundingOptions, round_potentials};

#[test]
fn toy_graphs_have_the_documented_shape() {
    let g = generate::simple_graph();
    assert_eq!(g.node_ids(), vec!["s", "a", "b"]);
    assert_eq!(g.edge("a", "b", None), Some(&-3.0));

    assert_eq!(generate::bigger_toy_graph().edge_count(), 6);
    assert_eq!(generate::layered_toy_graph().edge_count(), 8);

    let ring = generate::negative_ring(5);
    assert_eq!(ring.node_count(), 5);
    assert_eq!(alg::find_cycles(&ring).len(), 1);
    assert_eq!(generate::negative_ring(0).node_count(), 0);
}

#[test]
fn seeded_random_graphs_are_reproducible() {
    let opts = RandomGraphOptions {
        nodes: 30,
        edge_probability: 0.2,
        ..Default::default()
    };
    let a = generate::random_graph(&opts, &mut StdRng::seed_from_u64(11)).unwrap();
    let b = generate::random_graph(&opts, &mut StdRng::seed_from_u64(11)).unwrap();

    assert_eq!(a.node_count(), 30);
    assert_eq!(a.edge_keys(), b.edge_keys());
    for key in a.edges() {
        assert_eq!(a.edge_by_key(key), b.edge_by_key(key));
        assert_ne!(key.v, key.w);
    }
}

#[test]
fn random_graphs_without_negative_cycles_round_to_feasibility() {
    let mut rng = StdRng::seed_from_u64(3);
    for nodes in [5usize, 20, 60] {
        let opts = RandomGraphOptions {
            nodes,
            edge_probability: 0.15,
            min_weight: -6,
            max_weight: 6,
            allow_negative_cycles: false,
        };
        let g = generate::random_graph(&opts, &mut rng).unwrap();
        assert!(alg::bellman_ford(&g, "0", |_, &w| w).is_ok());

        let out = round_potentials(&g, &Potentials::zeros(&g), &RoundingOptions::default())
            .unwrap();
        assert!(out.is_feasible(), "{nodes} nodes: {:?}", out.status);
    }
}

#[test]
fn grid_graphs_point_right_and_down() {
    let mut rng = StdRng::seed_from_u64(5);
    let g = generate::grid_graph(3, 4, 1..=10, &mut rng).unwrap();

    assert_eq!(g.node_count(), 12);
    assert_eq!(g.edge_count(), 3 * 3 + 2 * 4);
    assert!(g.has_edge("0", "1", None));
    assert!(g.has_edge("0", "4", None));
    assert!(!g.has_edge("3", "4", None));
    assert!(g.edges().all(|k| {
        let w = *g.edge_by_key(k).unwrap();
        (1.0..=10.0).contains(&w)
    }));
}

#[test]
fn generator_parameters_are_checked() {
    let mut rng = StdRng::seed_from_u64(0);
    let bad_p = RandomGraphOptions {
        edge_probability: 1.5,
        ..Default::default()
    };
    assert!(matches!(
        generate::random_graph(&bad_p, &mut rng),
        Err(Error::InvalidGenerator { .. })
    ));
    #[allow(clippy::reversed_empty_ranges)]
    let err = generate::grid_graph(2, 2, 5..=1, &mut rng);
    assert!(matches!(err, Err(Error::InvalidGenerator { .. })));
}
