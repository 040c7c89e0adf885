//! Layering of contracted components by their shortest distance from the super-source.

use crate::contract::{Contraction, SUPER_SOURCE};
use crate::graphlib::{self, alg};

#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    /// Negated shortest distance from the super-source; `0.0` for the shallowest layer.
    pub index: f64,
    /// Component ids in this layer, ascending.
    pub components: Vec<usize>,
}

/// Layers sorted by ascending index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Layering {
    pub layers: Vec<Layer>,
}

impl Layering {
    /// Runs Bellman-Ford over the contracted graph and groups components by layer index.
    pub fn assign(contraction: &Contraction) -> graphlib::Result<Self> {
        let paths = alg::bellman_ford(&contraction.graph, SUPER_SOURCE, |_, &w| w)?;

        let mut indexed: Vec<(f64, usize)> = (0..contraction.component_count())
            .map(|c| {
                let dist = paths
                    .get(&Contraction::node_id(c))
                    .map_or(0.0, |p| p.distance);
                (0.0 - dist, c)
            })
            .collect();
        indexed.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));

        let mut layers: Vec<Layer> = Vec::new();
        for (index, c) in indexed {
            match layers.last_mut() {
                Some(layer) if layer.index == index => layer.components.push(c),
                _ => layers.push(Layer {
                    index,
                    components: vec![c],
                }),
            }
        }
        Ok(Self { layers })
    }

    /// The decrement threshold `i*`.
    ///
    /// Only layers with a positive index are candidates. Among them the most populated one
    /// wins; ties go to the deeper layer. `None` when every component sits in layer 0.
    /// Letting layer 0 compete makes `s->a (2), s->b (4), a->b (-3)` lower `s` and `a`
    /// forever instead of reaching feasibility.
    pub fn threshold(&self) -> Option<f64> {
        self.layers
            .iter()
            .filter(|l| l.index > 0.0)
            .max_by(|a, b| {
                a.components
                    .len()
                    .cmp(&b.components.len())
                    .then(a.index.total_cmp(&b.index))
            })
            .map(|l| l.index)
    }

    /// Components in every layer whose index is `>= threshold`.
    pub fn select(&self, threshold: f64) -> Vec<usize> {
        let mut out: Vec<usize> = self
            .layers
            .iter()
            .filter(|l| l.index >= threshold)
            .flat_map(|l| l.components.iter().copied())
            .collect();
        out.sort_unstable();
        out
    }

    pub fn layer_of(&self, component: usize) -> Option<f64> {
        self.layers
            .iter()
            .find(|l| l.components.contains(&component))
            .map(|l| l.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layering(layers: &[(f64, &[usize])]) -> Layering {
        Layering {
            layers: layers
                .iter()
                .map(|&(index, components)| Layer {
                    index,
                    components: components.to_vec(),
                })
                .collect(),
        }
    }

    #[test]
    fn threshold_skips_layer_zero() {
        let l = layering(&[(0.0, &[0, 1, 2, 3]), (2.0, &[4])]);
        assert_eq!(l.threshold(), Some(2.0));
        assert_eq!(l.select(2.0), vec![4]);
    }

    #[test]
    fn threshold_prefers_population_then_depth() {
        let l = layering(&[(0.0, &[0]), (1.0, &[1, 2]), (3.0, &[3]), (4.0, &[4, 5])]);
        assert_eq!(l.threshold(), Some(4.0));

        let l = layering(&[(0.0, &[0]), (1.0, &[1, 2, 6]), (3.0, &[3]), (4.0, &[4, 5])]);
        assert_eq!(l.threshold(), Some(1.0));
        assert_eq!(l.select(1.0), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn flat_layering_has_no_threshold() {
        let l = layering(&[(0.0, &[0, 1])]);
        assert_eq!(l.threshold(), None);
        assert_eq!(l.layer_of(1), Some(0.0));
        assert_eq!(l.layer_of(7), None);
    }
}
