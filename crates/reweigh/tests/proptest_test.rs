use proptest::prelude::*;
use reweigh::reduced::{is_feasible, violations};
use reweigh::{Potentials, RoundingOptions, RoundingStatus, WeightedGraph, round_potentials};

/// Graphs that admit the hidden potentials `p`, so they never contain a negative cycle.
fn feasible_case() -> impl Strategy<Value = (WeightedGraph, Potentials)> {
    (1usize..10).prop_flat_map(|n| {
        (
            prop::collection::vec(-8i64..=8, n),
            prop::collection::vec((0..n, 0..n, 0i64..=5), 0..30),
            prop::collection::vec(-5i64..=5, n),
        )
            .prop_map(move |(hidden, edges, initial)| {
                let mut g = WeightedGraph::default();
                for v in 0..n {
                    g.set_node(v.to_string(), ());
                }
                for (u, v, slack) in edges {
                    if u == v || g.has_edge(&u.to_string(), &v.to_string(), None) {
                        continue;
                    }
                    let weight = hidden[v] - hidden[u] + slack;
                    g.set_edge(u.to_string(), v.to_string(), weight as f64);
                }
                let y: Potentials = initial
                    .iter()
                    .enumerate()
                    .map(|(v, &y)| (v.to_string(), y as f64))
                    .collect();
                (g, y)
            })
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn rounding_reaches_feasibility((g, y) in feasible_case()) {
        let out = round_potentials(&g, &y, &RoundingOptions::default()).unwrap();
        prop_assert_eq!(out.status, RoundingStatus::Feasible);
        prop_assert!(violations(&g, &out.potentials).unwrap().is_empty());
        prop_assert!(out.potentials.iter().all(|(node, v)| v <= y.get(node).unwrap()));
    }

    #[test]
    fn rounding_is_idempotent((g, y) in feasible_case()) {
        let first = round_potentials(&g, &y, &RoundingOptions::default()).unwrap();
        prop_assert!(is_feasible(&g, &first.potentials).unwrap());

        let second = round_potentials(&g, &first.potentials, &RoundingOptions::default()).unwrap();
        prop_assert_eq!(second.iterations, 0);
        prop_assert_eq!(second.decrements, 0);
        prop_assert_eq!(second.potentials, first.potentials);
    }
}
