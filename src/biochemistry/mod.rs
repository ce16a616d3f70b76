//! Biochemistry of edge-localised polarity signaling.
//!
//! Each cell edge runs a small reaction network between a ligand-like
//! species A and two receptor-like species B and C:
//! - A binds the paired neighbour edge's A to form a bound pool
//! - The bound pool forms directional complexes with B and C from both sides
//! - Complex dissociation is modulated by Hill feedback from opposing complexes
//!
//! The modules here cover the ODE right-hand side, the per-edge state that
//! wraps it, and the per-cell edge collection that follows mesh remodelling.
//!
//! References:
//! - Fisher KH, Strutt D, Fletcher AG. iScience. 2019;17:49-66
//! - Collier JR et al. J Theor Biol. 1996;183:429-446

pub mod cell_srn;
pub mod edge_srn;
pub mod integrator;
pub mod reaction_network;
pub mod species;

pub use cell_srn::{CellEdgeSrn, EdgeRemodelEvent};
pub use edge_srn::EdgeSignalingState;
pub use integrator::{IntegratorConfig, OdeIntegrator, RK4Integrator};
pub use reaction_network::{hill, KineticConstants, ReactionFluxes, ReactionNetwork};
pub use species::{
    NeighbourParameter, Species, DEFAULT_NEIGHBOUR_A, PARAMETER_COUNT, RESERVED_PARAMETER_INDEX,
    SPECIES_COUNT,
};
