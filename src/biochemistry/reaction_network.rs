//! Reaction kinetics for the edge polarity network.
//!
//! Free A on this edge binds the paired neighbour's free A to form the bound
//! pool. The bound pool then forms directional complexes with B and C, both
//! from this edge (BA, CA) and from the paired edge (AB, AC). Dissociation of
//! each complex is amplified by a Hill function of an opposing complex:
//!
//! ```text
//! R1  = k·A·A_n  − v1·BoundA
//! R2  = k·B·BoundA   − v2·hS·CA·BA
//! Rm2 = k·B_n·BoundA − v2·hSm·CA_n·AB
//! R3  = k·C·BoundA   − v2·hF·BA·CA
//! Rm3 = k·C_n·BoundA − v2·hFm·BA_n·AC
//! ```
//!
//! where `_n` denotes the neighbour value held in the parameter vector. The
//! fast channel `hF` is driven by BA and the slow channel `hS` by CA; this
//! cross-assignment is part of the model.
//!
//! Reference: Fisher KH, Strutt D, Fletcher AG. iScience 2019;17:49-66
//! (simplified core planar polarity model).

use serde::{Deserialize, Serialize};

use super::species::{NeighbourParameter, Species, SPECIES_COUNT};

/// Rate constants of the polarity network
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KineticConstants {
    /// Dissociation constant of the bound A homodimer
    pub kd1: f64,
    /// Dissociation constant of the hetero-complexes
    pub kd2: f64,
    /// Base association rate
    pub k: f64,
    /// Hill half-saturation constant
    pub hill_k: f64,
    /// Maximal fold-change of the fast (BA-driven) channel
    pub v_fast: f64,
    /// Maximal fold-change of the slow (CA-driven) channel
    pub v_slow: f64,
    /// Hill exponent
    pub hill_exponent: f64,
}

impl Default for KineticConstants {
    fn default() -> Self {
        Self {
            kd1: 5.0,
            kd2: 0.1,
            k: 1.0,
            hill_k: 0.1665,
            v_fast: 10.0,
            v_slow: 10.0,
            hill_exponent: 2.0,
        }
    }
}

impl KineticConstants {
    /// Homodimer dissociation rate
    #[inline]
    pub fn v1(&self) -> f64 {
        self.kd1 * self.k
    }

    /// Complex dissociation rate
    #[inline]
    pub fn v2(&self) -> f64 {
        self.kd2 * self.k
    }
}

/// Hill modulation `1 + (V-1)·x^w / (K^w + x^w)`.
///
/// Equals 1 at `x = 0` and tends to `V` as `x` grows.
#[inline]
pub fn hill(x: f64, v_max: f64, k: f64, w: f64) -> f64 {
    let xw = x.powf(w);
    1.0 + ((v_max - 1.0) * xw) / (k.powf(w) + xw)
}

/// The five reaction fluxes of one edge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReactionFluxes {
    /// A + A_n <-> BoundA
    pub r1: f64,
    /// B + BoundA <-> BA
    pub r2: f64,
    /// B_n + BoundA <-> AB
    pub rm2: f64,
    /// C + BoundA <-> CA
    pub r3: f64,
    /// C_n + BoundA <-> AC
    pub rm3: f64,
}

/// Right-hand side of the 8-variable edge ODE.
///
/// Autonomous and side-effect free.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ReactionNetwork {
    pub constants: KineticConstants,
}

impl ReactionNetwork {
    pub fn new(constants: KineticConstants) -> Self {
        Self { constants }
    }

    /// Hill factor of the fast channel
    #[inline]
    pub fn hill_fast(&self, x: f64) -> f64 {
        let c = &self.constants;
        hill(x, c.v_fast, c.hill_k, c.hill_exponent)
    }

    /// Hill factor of the slow channel
    #[inline]
    pub fn hill_slow(&self, x: f64) -> f64 {
        let c = &self.constants;
        hill(x, c.v_slow, c.hill_k, c.hill_exponent)
    }

    /// Compute the reaction fluxes for state `y` and parameters `p`.
    ///
    /// # Panics
    /// If `y` is not exactly [`SPECIES_COUNT`] long or `p` has fewer than 7 entries.
    pub fn fluxes(&self, y: &[f64], p: &[f64]) -> ReactionFluxes {
        assert_eq!(y.len(), SPECIES_COUNT, "edge state vector must hold {SPECIES_COUNT} species");
        assert!(p.len() > NeighbourParameter::CA.index(), "edge parameter vector too short: {}", p.len());

        let bound_a = y[Species::BoundA.index()];
        let a = y[Species::A.index()];
        let b = y[Species::B.index()];
        let c = y[Species::C.index()];
        let ba = y[Species::BA.index()];
        let ab = y[Species::AB.index()];
        let ca = y[Species::CA.index()];
        let ac = y[Species::AC.index()];

        let neigh_a = p[NeighbourParameter::A.index()];
        let neigh_b = p[NeighbourParameter::B.index()];
        let neigh_c = p[NeighbourParameter::C.index()];
        let neigh_ba = p[NeighbourParameter::BA.index()];
        let neigh_ca = p[NeighbourParameter::CA.index()];

        let k = self.constants.k;
        let v1 = self.constants.v1();
        let v2 = self.constants.v2();

        let x_fast = ba;
        let x_slow = ca;
        let x_fast_m = neigh_ba;
        let x_slow_m = neigh_ca;

        let h_fast = self.hill_fast(x_fast);
        let h_slow = self.hill_slow(x_slow);
        let h_fast_m = self.hill_fast(x_fast_m);
        let h_slow_m = self.hill_slow(x_slow_m);

        ReactionFluxes {
            r1: k * a * neigh_a - v1 * bound_a,
            r2: k * b * bound_a - v2 * h_slow * x_slow * ba,
            rm2: k * neigh_b * bound_a - v2 * h_slow_m * x_slow_m * ab,
            r3: k * c * bound_a - v2 * h_fast * x_fast * ca,
            rm3: k * neigh_c * bound_a - v2 * h_fast_m * x_fast_m * ac,
        }
    }

    /// Evaluate `dy/dt`. Time is accepted for integrator compatibility only.
    pub fn evaluate_derivatives(&self, _time: f64, y: &[f64], p: &[f64], dy: &mut [f64]) {
        assert_eq!(dy.len(), SPECIES_COUNT, "derivative vector must hold {SPECIES_COUNT} species");
        let f = self.fluxes(y, p);

        dy[Species::BoundA.index()] = f.r1 - f.r2 - f.rm2 - f.r3 - f.rm3;
        dy[Species::A.index()] = -f.r1;
        dy[Species::B.index()] = -f.r2;
        dy[Species::C.index()] = -f.r3;
        dy[Species::BA.index()] = f.r2;
        dy[Species::AB.index()] = f.rm2;
        dy[Species::CA.index()] = f.r3;
        dy[Species::AC.index()] = f.rm3;
    }
}
