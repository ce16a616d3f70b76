//! Molecular species and neighbour parameters of the edge polarity network.
//!
//! Each cell edge carries eight concentrations and nine parameters. The
//! state vector layout is fixed:
//!
//! | Index | Species  | Description |
//! |-------|----------|-------------|
//! | 0 | A      | Free (unbound) A on this edge |
//! | 1 | BoundA | Bound A homodimer on this edge |
//! | 2 | B      | Receptor-like species B on this edge |
//! | 3 | C      | Receptor-like species C on this edge |
//! | 4 | BA     | Complex of own B with the bound pool |
//! | 5 | AB     | Complex of the neighbour's B with the bound pool |
//! | 6 | CA     | Complex of own C with the bound pool |
//! | 7 | AC     | Complex of the neighbour's C with the bound pool |
//!
//! Only A, B and C diffuse along the cell perimeter; bound and complexed
//! forms are immobile.

use serde::{Deserialize, Serialize};

/// Number of state variables per edge
pub const SPECIES_COUNT: usize = 8;

/// Number of entries in an edge's parameter vector
pub const PARAMETER_COUNT: usize = 9;

/// Parameter slot carried for symmetry but not named or read by the kinetics
pub const RESERVED_PARAMETER_INDEX: usize = 8;

/// Seed value for "neighbour A" before the first neighbour average arrives
pub const DEFAULT_NEIGHBOUR_A: f64 = 0.5;

/// A molecular species tracked on every edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Species {
    A,
    BoundA,
    B,
    C,
    BA,
    AB,
    CA,
    AC,
}

impl Species {
    /// All species in state-vector order
    pub const ALL: [Species; SPECIES_COUNT] = [
        Species::A,
        Species::BoundA,
        Species::B,
        Species::C,
        Species::BA,
        Species::AB,
        Species::CA,
        Species::AC,
    ];

    /// Species that diffuse between perimeter-adjacent edges
    pub const DIFFUSIBLE: [Species; 3] = [Species::A, Species::B, Species::C];

    /// Position in the state vector
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// State variable name
    pub const fn name(self) -> &'static str {
        match self {
            Species::BoundA => "BoundA",
            Species::A => "A",
            Species::B => "B",
            Species::C => "C",
            Species::BA => "BA",
            Species::AB => "AB",
            Species::CA => "CA",
            Species::AC => "AC",
        }
    }

    /// Look up a species by its state variable name.
    ///
    /// # Panics
    /// The name set is fixed; an unknown name is a programming error.
    pub fn from_name(name: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|s| s.name() == name)
            .unwrap_or_else(|| panic!("no state variable named {name:?} in the edge polarity system"))
    }

    /// Whether this species takes part in perimeter diffusion
    pub const fn is_diffusible(self) -> bool {
        matches!(self, Species::A | Species::B | Species::C)
    }

    /// The neighbour parameter that mirrors this species
    pub const fn neighbour_parameter(self) -> NeighbourParameter {
        match self {
            Species::BoundA => NeighbourParameter::BoundA,
            Species::A => NeighbourParameter::A,
            Species::B => NeighbourParameter::B,
            Species::C => NeighbourParameter::C,
            Species::BA => NeighbourParameter::BA,
            Species::AB => NeighbourParameter::AB,
            Species::CA => NeighbourParameter::CA,
            Species::AC => NeighbourParameter::AC,
        }
    }

    /// Per-cell published key holding this species' post-diffusion edge values
    pub const fn edge_key(self) -> &'static str {
        match self {
            Species::BoundA => "edge boundA",
            Species::A => "edge A",
            Species::B => "edge B",
            Species::C => "edge C",
            Species::BA => "edge BA",
            Species::AB => "edge AB",
            Species::CA => "edge CA",
            Species::AC => "edge AC",
        }
    }

    /// Per-cell published key holding the neighbour mean of this species
    pub const fn neighbour_key(self) -> &'static str {
        self.neighbour_parameter().name()
    }

    /// Per-cell published key holding a copy of the edge values for downstream readers
    pub const fn in_key(self) -> &'static str {
        match self {
            Species::BoundA => "in boundA",
            Species::A => "in A",
            Species::B => "in B",
            Species::C => "in C",
            Species::BA => "in BA",
            Species::AB => "in AB",
            Species::CA => "in CA",
            Species::AC => "in AC",
        }
    }
}

/// A named entry of the edge parameter vector, mirrored from the paired edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NeighbourParameter {
    A,
    BoundA,
    B,
    C,
    BA,
    AB,
    CA,
    AC,
}

impl NeighbourParameter {
    /// All named parameters in parameter-vector order
    pub const ALL: [NeighbourParameter; 8] = [
        NeighbourParameter::A,
        NeighbourParameter::BoundA,
        NeighbourParameter::B,
        NeighbourParameter::C,
        NeighbourParameter::BA,
        NeighbourParameter::AB,
        NeighbourParameter::CA,
        NeighbourParameter::AC,
    ];

    /// Position in the parameter vector
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        match self {
            NeighbourParameter::A => "neighbour A",
            NeighbourParameter::BoundA => "neighbour boundA",
            NeighbourParameter::B => "neighbour B",
            NeighbourParameter::C => "neighbour C",
            NeighbourParameter::BA => "neighbour BA",
            NeighbourParameter::AB => "neighbour AB",
            NeighbourParameter::CA => "neighbour CA",
            NeighbourParameter::AC => "neighbour AC",
        }
    }

    /// Look up a parameter by name.
    ///
    /// # Panics
    /// Unknown names are a programming error.
    pub fn from_name(name: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|p| p.name() == name)
            .unwrap_or_else(|| panic!("no parameter named {name:?} in the edge polarity system"))
    }

    /// The species this parameter mirrors
    pub const fn species(self) -> Species {
        match self {
            NeighbourParameter::A => Species::A,
            NeighbourParameter::BoundA => Species::BoundA,
            NeighbourParameter::B => Species::B,
            NeighbourParameter::C => Species::C,
            NeighbourParameter::BA => Species::BA,
            NeighbourParameter::AB => Species::AB,
            NeighbourParameter::CA => Species::CA,
            NeighbourParameter::AC => Species::AC,
        }
    }
}
