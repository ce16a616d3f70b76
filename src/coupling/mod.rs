//! Coupling between edges of the same cell and across cell boundaries.
//!
//! - **Perimeter diffusion**: free A, B and C move between adjacent edges of a cell
//! - **Neighbour averaging**: each edge sees the mean of the edges it touches in other cells
//! - **Time loop**: [`EdgeSignalingSolver`] integrates every edge, then couples

mod diffusion;
mod edge_tracking;
mod tissue_solver;

pub use diffusion::{perimeter_diffusion_step, uniform_mean};
pub use edge_tracking::{EdgeTrackingModifier, StepClock};
pub use tissue_solver::EdgeSignalingSolver;
