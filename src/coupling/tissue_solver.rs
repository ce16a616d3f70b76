//! Tissue-level driver for edge signaling.
//!
//! Owns a fixed topology, the signaling cells and the coupling modifier and
//! runs the outer time loop:
//!
//! 1. Every edge refreshes its neighbour parameters from the cell's published
//!    data and integrates its reaction network from `t` to `t + dt`.
//! 2. The clock advances.
//! 3. The edge tracking modifier diffuses, publishes and averages.
//!
//! ## Usage
//! ```ignore
//! let tissue = VertexTissue::honeycomb(6, 6);
//! let mut solver = EdgeSignalingSolver::from_parameters(tissue, &Parameters::default(), 42);
//! solver.run(10.0);
//! println!("{:?}", solver.metrics());
//! ```

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::edge_tracking::{EdgeTrackingModifier, StepClock};
use crate::biochemistry::{CellEdgeSrn, EdgeSignalingState, OdeIntegrator, RK4Integrator, ReactionNetwork, SPECIES_COUNT};
use crate::config::Parameters;
use crate::geometry::EdgeTopology;
use crate::state::{SignalingCell, SignalingMetrics};

/// Edge signaling solver over a fixed tissue
pub struct EdgeSignalingSolver<T: EdgeTopology> {
    /// Cell/edge topology
    pub tissue: T,
    /// Signaling cells, indexed like the tissue
    pub cells: Vec<SignalingCell>,
    /// Once-per-step coupling
    pub modifier: EdgeTrackingModifier,
    integrator: Box<dyn OdeIntegrator>,
    clock: StepClock,
    is_set_up: bool,
}

impl<T: EdgeTopology> EdgeSignalingSolver<T> {
    /// Create a solver with the default RK4 integrator.
    ///
    /// # Panics
    /// If `dt` is not positive.
    pub fn new(tissue: T, cells: Vec<SignalingCell>, params: &Parameters) -> Self {
        let integrator = RK4Integrator::new(SPECIES_COUNT, params.integrator.clone());
        Self::with_integrator(tissue, cells, params, Box::new(integrator))
    }

    /// Create a solver with a caller-chosen integrator
    pub fn with_integrator(
        tissue: T,
        cells: Vec<SignalingCell>,
        params: &Parameters,
        integrator: Box<dyn OdeIntegrator>,
    ) -> Self {
        let dt = params.simulation.dt;
        assert!(dt > 0.0, "simulation time step must be positive, got {dt}");
        Self {
            tissue,
            cells,
            modifier: EdgeTrackingModifier::new(&params.diffusion),
            integrator,
            clock: StepClock::at_setup(dt),
            is_set_up: false,
        }
    }

    /// Build one cell per tissue cell from the configured initial conditions.
    ///
    /// `seed` drives the optional initial-condition noise.
    pub fn from_parameters(tissue: T, params: &Parameters, seed: u64) -> Self {
        let network = ReactionNetwork::new(params.kinetics);
        let mut rng = StdRng::seed_from_u64(seed);
        let cells = (0..tissue.num_cells())
            .map(|cell| {
                let edges = (0..tissue.num_edges(cell))
                    .map(|edge| {
                        let initial = params.initial_conditions.noisy_edge_state(edge, &mut rng);
                        EdgeSignalingState::with_network(initial, network)
                    })
                    .collect();
                SignalingCell::new(CellEdgeSrn::new(edges))
            })
            .collect();
        Self::new(tissue, cells, params)
    }

    /// Publish initial edge data. Runs automatically before the first step.
    pub fn setup(&mut self) {
        self.modifier.setup_solve(&self.tissue, &mut self.cells, self.clock.dt);
        self.is_set_up = true;
    }

    /// Advance every edge by one time step, then couple
    pub fn step(&mut self) {
        if !self.is_set_up {
            self.setup();
        }

        let start_time = self.clock.time();
        let end_time = start_time + self.clock.dt;
        for cell in self.cells.iter_mut() {
            let SignalingCell { srn, edge_data } = cell;
            for (index, edge) in srn.edges_mut().iter_mut().enumerate() {
                edge.simulate(edge_data, index, self.integrator.as_mut(), start_time, end_time);
            }
        }

        self.clock = self.clock.advanced();
        self.modifier
            .update_at_end_of_time_step(&self.tissue, &mut self.cells, self.clock);
    }

    /// Run for a given duration
    pub fn run(&mut self, duration: f64) {
        self.run_sampled(duration, 0, |_| {});
    }

    /// Run for `duration`, reporting metrics every `sampling_multiple` steps.
    ///
    /// The state before the first step is reported too. A multiple of zero
    /// disables reporting.
    pub fn run_sampled<F>(&mut self, duration: f64, sampling_multiple: u64, mut on_sample: F)
    where
        F: FnMut(&SignalingMetrics),
    {
        if !self.is_set_up {
            self.setup();
        }
        if sampling_multiple > 0 {
            on_sample(&self.metrics());
        }

        let n_steps = if duration > 0.0 {
            (duration / self.clock.dt - 1e-9).ceil() as u64
        } else {
            0
        };
        log::info!("Running {} steps of dt = {}", n_steps, self.clock.dt);

        for _ in 0..n_steps {
            self.step();
            if sampling_multiple > 0 && self.clock.steps_elapsed % sampling_multiple == 0 {
                on_sample(&self.metrics());
            }
        }
    }

    /// Current simulation time
    pub fn time(&self) -> f64 {
        self.clock.time()
    }

    pub fn clock(&self) -> StepClock {
        self.clock
    }

    /// Current tissue totals
    pub fn metrics(&self) -> SignalingMetrics {
        SignalingMetrics::collect(&self.cells, self.clock.time(), self.clock.steps_elapsed)
    }
}
