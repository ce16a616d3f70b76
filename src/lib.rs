//! Edge Polarity Sim - edge-level protein signaling for vertex-based tissues
//!
//! Each polygonal cell edge carries an 8-species reaction network
//! (A, bound A, B, C and four A-complexes). Free A, B and C diffuse around
//! each cell perimeter, and every edge sees the averaged concentrations of
//! the edges it touches in neighbouring cells.

pub mod biochemistry;
pub mod config;
pub mod coupling;
pub mod export;
pub mod geometry;
pub mod state;

pub use biochemistry::{
    CellEdgeSrn, EdgeRemodelEvent, EdgeSignalingState, KineticConstants, NeighbourParameter, OdeIntegrator,
    RK4Integrator, ReactionNetwork, Species, PARAMETER_COUNT, SPECIES_COUNT,
};
pub use config::Parameters;
pub use coupling::{EdgeSignalingSolver, EdgeTrackingModifier, StepClock};
pub use geometry::{EdgeTopology, VertexTissue};
pub use state::{CellEdgeData, InitialConditions, SignalingCell, SignalingMetrics};
