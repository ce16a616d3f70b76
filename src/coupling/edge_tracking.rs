//! Once-per-timestep edge coupling.
//!
//! Runs at setup and at the end of every time step. It has three stages:
//! 1. **Diffusion**: free A, B and C diffuse around each cell's perimeter.
//!    The new values are written back to the edges and published as `"edge …"`.
//! 2. **Neighbour averaging**: each edge takes the mean of the `"edge …"`
//!    values published by the edges of other cells sharing its boundary, and
//!    publishes the result as `"neighbour …"`.
//! 3. The `"edge …"` values are copied to `"in …"`.
//!
//! Stage 1 finishes for every cell before stage 2 reads anything.

use serde::{Deserialize, Serialize};

use super::diffusion::{perimeter_diffusion_step, uniform_mean};
use crate::biochemistry::{Species, SPECIES_COUNT};
use crate::config::DiffusionParameters;
use crate::geometry::EdgeTopology;
use crate::state::SignalingCell;

/// Simulation clock passed into the coupling step
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepClock {
    /// Outer time step
    pub dt: f64,
    /// Completed time steps
    pub steps_elapsed: u64,
}

impl StepClock {
    pub fn new(dt: f64, steps_elapsed: u64) -> Self {
        Self { dt, steps_elapsed }
    }

    /// Clock before any step has run
    pub fn at_setup(dt: f64) -> Self {
        Self::new(dt, 0)
    }

    /// Whether any simulation time has passed
    pub fn has_elapsed(&self) -> bool {
        self.steps_elapsed > 0
    }

    /// Elapsed simulation time
    pub fn time(&self) -> f64 {
        self.dt * self.steps_elapsed as f64
    }

    /// Clock one step later
    pub fn advanced(self) -> Self {
        Self::new(self.dt, self.steps_elapsed + 1)
    }
}

/// Couples edge signaling within and between cells
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeTrackingModifier {
    /// Diffusion coefficient of unbound A, B and C along the perimeter
    pub diffusion_coefficient: f64,
}

impl Default for EdgeTrackingModifier {
    fn default() -> Self {
        Self::new(&DiffusionParameters::default())
    }
}

impl EdgeTrackingModifier {
    pub fn new(params: &DiffusionParameters) -> Self {
        Self {
            diffusion_coefficient: params.unbound_protein_diffusion_coefficient,
        }
    }

    /// Publish initial edge data before the first time step.
    ///
    /// Nothing diffuses because no time has elapsed.
    pub fn setup_solve<T: EdgeTopology + ?Sized>(&self, topology: &T, cells: &mut [SignalingCell], dt: f64) {
        log::info!(
            "Setting up edge tracking for {} cells (D = {})",
            cells.len(),
            self.diffusion_coefficient
        );
        self.update_cell_data(topology, cells, StepClock::at_setup(dt));
    }

    /// Hook run after every time step
    pub fn update_at_end_of_time_step<T: EdgeTopology + ?Sized>(
        &self,
        topology: &T,
        cells: &mut [SignalingCell],
        clock: StepClock,
    ) {
        self.update_cell_data(topology, cells, clock);
    }

    /// Diffuse, publish and average edge concentrations for every cell.
    ///
    /// # Panics
    /// If `cells` does not match `topology` cell for cell and edge for edge,
    /// or the topology names a neighbouring edge that does not exist.
    pub fn update_cell_data<T: EdgeTopology + ?Sized>(
        &self,
        topology: &T,
        cells: &mut [SignalingCell],
        clock: StepClock,
    ) {
        assert_eq!(
            cells.len(),
            topology.num_cells(),
            "cell population has {} cells but the tissue has {}",
            cells.len(),
            topology.num_cells()
        );
        for (index, cell) in cells.iter().enumerate() {
            assert_eq!(
                cell.num_edges(),
                topology.num_edges(index),
                "cell {index} has {} edge signaling models but {} edges",
                cell.num_edges(),
                topology.num_edges(index)
            );
        }

        for cell in cells.iter_mut() {
            self.diffuse_and_publish(cell, clock);
        }

        let means: Vec<[Vec<f64>; SPECIES_COUNT]> = (0..cells.len())
            .map(|index| neighbour_means(topology, cells, index))
            .collect();

        for (cell, means) in cells.iter_mut().zip(means) {
            for (species, values) in Species::ALL.into_iter().zip(means) {
                cell.edge_data.set_item(species.neighbour_key(), values);
            }
            for species in Species::ALL {
                let values = cell.edge_data.get_item(species.edge_key()).to_vec();
                cell.edge_data.set_item(species.in_key(), values);
            }
        }

        log::debug!(
            "Edge coupling done at step {} for {} cells",
            clock.steps_elapsed,
            cells.len()
        );
    }

    /// Diffuse free species around one cell and publish its `"edge …"` items
    fn diffuse_and_publish(&self, cell: &mut SignalingCell, clock: StepClock) {
        for species in Species::ALL {
            let old: Vec<f64> = cell.srn.edges().iter().map(|e| e.get(species)).collect();
            let new = if species.is_diffusible() && clock.has_elapsed() {
                perimeter_diffusion_step(&old, self.diffusion_coefficient, clock.dt)
            } else {
                old
            };

            for (edge, &value) in cell.srn.edges_mut().iter_mut().zip(&new) {
                edge.set(species, value);
            }
            cell.edge_data.set_item(species.edge_key(), new);
        }
    }
}

/// Mean published `"edge …"` values over the neighbours of every edge of `cell`
fn neighbour_means<T: EdgeTopology + ?Sized>(
    topology: &T,
    cells: &[SignalingCell],
    cell: usize,
) -> [Vec<f64>; SPECIES_COUNT] {
    let num_edges = topology.num_edges(cell);
    let neighbours: Vec<Vec<(usize, usize)>> = (0..num_edges)
        .map(|edge| topology.neighbouring_edge_indices(cell, edge))
        .collect();

    for &(other, other_edge) in neighbours.iter().flatten() {
        assert!(other < cells.len(), "neighbouring cell {other} out of range");
        assert!(
            other_edge < cells[other].num_edges(),
            "neighbouring edge {other_edge} out of range for cell {other} ({} edges)",
            cells[other].num_edges()
        );
    }

    Species::ALL.map(|species| {
        neighbours
            .iter()
            .map(|pairs| {
                uniform_mean(pairs.iter().map(|&(other, other_edge)| {
                    cells[other].edge_data.get_item(species.edge_key())[other_edge]
                }))
            })
            .collect()
    })
}
