//! State management for edge signaling.
//!
//! Contains the per-cell containers the coupling step reads and writes:
//! published edge data, the cell wrapper, initial conditions and metrics.

mod cell;
mod edge_data;
mod initial_conditions;
mod metrics;

pub use cell::SignalingCell;
pub use edge_data::CellEdgeData;
pub use initial_conditions::InitialConditions;
pub use metrics::SignalingMetrics;
