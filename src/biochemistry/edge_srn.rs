//! Per-edge signaling state.
//!
//! Every polygon edge of every cell owns one [`EdgeSignalingState`]: the eight
//! species concentrations plus the nine-entry parameter vector mirrored from
//! the paired edge of the neighbouring cell. The owning cell's
//! edge collection decides how many states exist; nothing else keeps a
//! reference to a state beyond its edge's lifetime.
//!
//! ## Lifecycle
//! ```text
//! Created ─► Active ⟲ (refresh parameters ─► integrate)
//!              │
//!              ├─► duplicated into a daughter cell (deep copy)
//!              ├─► merged / shrunk away (content added to a survivor)
//!              └─► split (rescaled by its share of the old length)
//! ```

use serde::{Deserialize, Serialize};

use super::integrator::OdeIntegrator;
use super::reaction_network::ReactionNetwork;
use super::species::{
    NeighbourParameter, Species, DEFAULT_NEIGHBOUR_A, PARAMETER_COUNT, SPECIES_COUNT,
};
use crate::state::CellEdgeData;

/// Concentrations and neighbour parameters of one cell edge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeSignalingState {
    state: [f64; SPECIES_COUNT],
    parameters: [f64; PARAMETER_COUNT],
    network: ReactionNetwork,
}

impl Default for EdgeSignalingState {
    /// All-ones placeholder state, overwritten by real initial conditions
    fn default() -> Self {
        Self::new([1.0; SPECIES_COUNT])
    }
}

impl EdgeSignalingState {
    /// Create an edge with the given initial concentrations and default kinetics
    pub fn new(initial: [f64; SPECIES_COUNT]) -> Self {
        Self::with_network(initial, ReactionNetwork::default())
    }

    /// Create an edge with custom kinetic constants
    pub fn with_network(initial: [f64; SPECIES_COUNT], network: ReactionNetwork) -> Self {
        let mut parameters = [0.0; PARAMETER_COUNT];
        parameters[NeighbourParameter::A.index()] = DEFAULT_NEIGHBOUR_A;
        Self {
            state: initial,
            parameters,
            network,
        }
    }

    /// Create an edge from a slice of initial conditions.
    ///
    /// # Panics
    /// If `initial` does not hold exactly [`SPECIES_COUNT`] values.
    pub fn from_slice(initial: &[f64]) -> Self {
        let state: [f64; SPECIES_COUNT] = initial.try_into().unwrap_or_else(|_| {
            panic!(
                "edge initial conditions must hold {SPECIES_COUNT} values, got {}",
                initial.len()
            )
        });
        Self::new(state)
    }

    pub fn network(&self) -> &ReactionNetwork {
        &self.network
    }

    #[inline]
    pub fn get(&self, species: Species) -> f64 {
        self.state[species.index()]
    }

    #[inline]
    pub fn set(&mut self, species: Species, value: f64) {
        self.state[species.index()] = value;
    }

    /// Read a species by its state variable name (fatal if unknown)
    pub fn get_by_name(&self, name: &str) -> f64 {
        self.get(Species::from_name(name))
    }

    /// Write a species by its state variable name (fatal if unknown)
    pub fn set_by_name(&mut self, name: &str, value: f64) {
        self.set(Species::from_name(name), value);
    }

    #[inline]
    pub fn parameter(&self, parameter: NeighbourParameter) -> f64 {
        self.parameters[parameter.index()]
    }

    #[inline]
    pub fn set_parameter(&mut self, parameter: NeighbourParameter, value: f64) {
        self.parameters[parameter.index()] = value;
    }

    /// Read a parameter by name (fatal if unknown)
    pub fn parameter_by_name(&self, name: &str) -> f64 {
        self.parameter(NeighbourParameter::from_name(name))
    }

    /// Write a parameter by name (fatal if unknown)
    pub fn set_parameter_by_name(&mut self, name: &str, value: f64) {
        self.set_parameter(NeighbourParameter::from_name(name), value);
    }

    pub fn state(&self) -> &[f64; SPECIES_COUNT] {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut [f64; SPECIES_COUNT] {
        &mut self.state
    }

    pub fn parameters(&self) -> &[f64; PARAMETER_COUNT] {
        &self.parameters
    }

    pub fn parameters_mut(&mut self) -> &mut [f64; PARAMETER_COUNT] {
        &mut self.parameters
    }

    // Named accessors

    pub fn bound_a(&self) -> f64 {
        self.get(Species::BoundA)
    }

    pub fn a(&self) -> f64 {
        self.get(Species::A)
    }

    pub fn b(&self) -> f64 {
        self.get(Species::B)
    }

    pub fn c(&self) -> f64 {
        self.get(Species::C)
    }

    pub fn ba(&self) -> f64 {
        self.get(Species::BA)
    }

    pub fn ab(&self) -> f64 {
        self.get(Species::AB)
    }

    pub fn ca(&self) -> f64 {
        self.get(Species::CA)
    }

    pub fn ac(&self) -> f64 {
        self.get(Species::AC)
    }

    /// Evaluate this edge's derivatives at its current parameters
    pub fn evaluate_derivatives(&self, time: f64, y: &[f64], dy: &mut [f64]) {
        self.network.evaluate_derivatives(time, y, &self.parameters, dy);
    }

    /// Copy neighbour means published for this edge into the parameter vector.
    ///
    /// # Panics
    /// If a `"neighbour …"` key is missing or `edge_index` is out of range.
    pub fn update_neighbour_parameters(&mut self, edge_data: &CellEdgeData, edge_index: usize) {
        for parameter in NeighbourParameter::ALL {
            let values = edge_data.get_item(parameter.name());
            assert!(
                edge_index < values.len(),
                "edge index {edge_index} out of range for {:?} ({} edges)",
                parameter.name(),
                values.len()
            );
            self.set_parameter(parameter, values[edge_index]);
        }
    }

    /// Advance the concentrations from `start_time` to `end_time` at fixed parameters
    pub fn integrate(&mut self, integrator: &mut dyn OdeIntegrator, start_time: f64, end_time: f64) {
        let network = self.network;
        let parameters = self.parameters;
        let rhs = move |t: f64, y: &[f64], dy: &mut [f64]| {
            network.evaluate_derivatives(t, y, &parameters, dy);
        };
        integrator.advance(&mut self.state, &rhs, start_time, end_time);
    }

    /// Refresh neighbour parameters for `edge_index`, then integrate
    pub fn simulate(
        &mut self,
        edge_data: &CellEdgeData,
        edge_index: usize,
        integrator: &mut dyn OdeIntegrator,
        start_time: f64,
        end_time: f64,
    ) {
        self.update_neighbour_parameters(edge_data, edge_index);
        self.integrate(integrator, start_time, end_time);
    }

    // Lifecycle operations

    /// Deep copy for a daughter cell's edge
    pub fn duplicate(&self) -> Self {
        self.clone()
    }

    /// Zero all species and parameters: a freshly introduced edge has no history
    pub fn initialise_new_edge(&mut self) {
        self.state = [0.0; SPECIES_COUNT];
        self.parameters = [0.0; PARAMETER_COUNT];
    }

    /// `self[s] += scale · other[s]` for every species
    pub fn add_quantities(&mut self, other: &EdgeSignalingState, scale: f64) {
        for (mine, theirs) in self.state.iter_mut().zip(other.state.iter()) {
            *mine += scale * theirs;
        }
    }

    /// Absorb the full content of an edge removed by shrinking
    pub fn add_shrunk_edge(&mut self, shrunk: &EdgeSignalingState) {
        self.add_quantities(shrunk, 1.0);
    }

    /// Absorb the full content of an edge merged into this one
    pub fn add_merged_edge(&mut self, merged: &EdgeSignalingState) {
        self.add_quantities(merged, 1.0);
    }

    /// Multiply every species by `factor`
    pub fn scale_quantities(&mut self, factor: f64) {
        for value in &mut self.state {
            *value *= factor;
        }
    }

    /// Keep `relative_position` of the content after a split.
    ///
    /// The complementary edge's share is the caller's responsibility.
    pub fn split(&mut self, relative_position: f64) {
        self.scale_quantities(relative_position);
    }

    /// Sum of all species on this edge
    pub fn total(&self) -> f64 {
        self.state.iter().sum()
    }
}
