//! Initial edge concentrations for polarity simulations.
//!
//! The default set-up places equal amounts of free A, B and C on every edge
//! and perturbs B slightly around the hexagon so that a polarity axis can
//! emerge: edges 0 and 5 start 0.1% low, edges 2 and 3 start 0.1% high.

use rand::Rng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};

use crate::biochemistry::{Species, SPECIES_COUNT};

/// Per-edge starting concentrations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InitialConditions {
    /// Free A on every edge
    pub free_a: f64,
    /// Bound A on every edge
    pub bound_a: f64,
    /// B on every edge before the perimeter offset
    pub b: f64,
    /// C on every edge
    pub c: f64,
    /// Multiplicative offset on B, indexed by edge (cycled when shorter)
    pub b_offsets: Vec<f64>,
    /// Standard deviation of multiplicative Gaussian noise on A, B and C
    pub noise_amplitude: f64,
}

impl Default for InitialConditions {
    fn default() -> Self {
        Self {
            free_a: 0.333,
            bound_a: 0.0,
            b: 0.333,
            c: 0.333,
            b_offsets: vec![0.999, 1.000, 1.001, 1.001, 1.000, 0.999],
            noise_amplitude: 0.0,
        }
    }
}

impl InitialConditions {
    /// Deterministic state for edge `edge_index`
    pub fn edge_state(&self, edge_index: usize) -> [f64; SPECIES_COUNT] {
        let offset = if self.b_offsets.is_empty() {
            1.0
        } else {
            self.b_offsets[edge_index % self.b_offsets.len()]
        };

        let mut state = [0.0; SPECIES_COUNT];
        state[Species::A.index()] = self.free_a;
        state[Species::BoundA.index()] = self.bound_a;
        state[Species::B.index()] = self.b * offset;
        state[Species::C.index()] = self.c;
        state
    }

    /// State for edge `edge_index` with noise on the diffusible species
    pub fn noisy_edge_state<R: Rng + ?Sized>(&self, edge_index: usize, rng: &mut R) -> [f64; SPECIES_COUNT] {
        let mut state = self.edge_state(edge_index);
        if self.noise_amplitude <= 0.0 {
            return state;
        }

        let noise = match Normal::new(0.0, self.noise_amplitude) {
            Ok(noise) => noise,
            Err(e) => {
                log::warn!("Invalid initial condition noise amplitude {}: {}", self.noise_amplitude, e);
                return state;
            }
        };
        for species in Species::DIFFUSIBLE {
            let factor: f64 = 1.0 + noise.sample(rng);
            state[species.index()] = (state[species.index()] * factor).max(0.0);
        }
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_default_offsets() {
        let ic = InitialConditions::default();
        assert!((ic.edge_state(0)[Species::B.index()] - 0.333 * 0.999).abs() < 1e-15);
        assert!((ic.edge_state(3)[Species::B.index()] - 0.333 * 1.001).abs() < 1e-15);
        assert_eq!(ic.edge_state(1)[Species::B.index()], 0.333);
        // Edge 6 wraps to edge 0's offset
        assert_eq!(ic.edge_state(6), ic.edge_state(0));
    }

    #[test]
    fn test_complexes_start_empty() {
        let state = InitialConditions::default().edge_state(2);
        for species in [Species::BoundA, Species::BA, Species::AB, Species::CA, Species::AC] {
            assert_eq!(state[species.index()], 0.0);
        }
        assert_eq!(state[Species::A.index()], 0.333);
        assert_eq!(state[Species::C.index()], 0.333);
    }

    #[test]
    fn test_noise_only_touches_free_species() {
        let ic = InitialConditions {
            noise_amplitude: 0.05,
            bound_a: 0.2,
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(7);
        let state = ic.noisy_edge_state(1, &mut rng);

        assert_eq!(state[Species::BoundA.index()], 0.2);
        assert!(state.iter().all(|&v| v >= 0.0));
        assert_ne!(state[Species::A.index()], 0.333);
    }

    #[test]
    fn test_zero_noise_is_deterministic() {
        let ic = InitialConditions::default();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(ic.noisy_edge_state(4, &mut rng), ic.edge_state(4));
    }
}
