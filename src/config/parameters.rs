//! Parameter structures loaded from JSON.
//!
//! Every group falls back to its defaults when its file is missing or
//! malformed, so a bare checkout runs with the published polarity model.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::biochemistry::{IntegratorConfig, KineticConstants};
use crate::state::InitialConditions;

/// Default directory searched by [`Parameters::load_or_default`]
pub const DEFAULT_PARAMETER_DIR: &str = "data/parameters";

/// Top-level parameters container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Parameters {
    /// Reaction rate constants and Hill modulation
    pub kinetics: KineticConstants,
    /// Perimeter diffusion
    pub diffusion: DiffusionParameters,
    /// Per-edge ODE integration
    pub integrator: IntegratorConfig,
    /// Outer time loop
    pub simulation: SimulationParameters,
    /// Starting edge concentrations
    pub initial_conditions: InitialConditions,
}

impl Parameters {
    /// Load parameters from JSON files, or use defaults if files don't exist
    pub fn load_or_default() -> Self {
        Self::load_from_dir(DEFAULT_PARAMETER_DIR)
    }

    /// Load parameters from specific directory
    pub fn load_from_dir<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        let mut integrator: IntegratorConfig = load_json_or_default(dir.join("integrator.json"), "integrator");
        if !is_valid_step(integrator.dt) {
            log::warn!("Integrator step {} is not positive, using defaults", integrator.dt);
            integrator = IntegratorConfig::default();
        }
        let mut simulation: SimulationParameters = load_json_or_default(dir.join("simulation.json"), "simulation");
        if !is_valid_step(simulation.dt) {
            log::warn!("Simulation time step {} is not positive, using defaults", simulation.dt);
            simulation = SimulationParameters::default();
        }

        Self {
            kinetics: load_json_or_default(dir.join("kinetics.json"), "kinetic"),
            diffusion: load_json_or_default(dir.join("diffusion.json"), "diffusion"),
            integrator,
            simulation,
            initial_conditions: load_json_or_default(dir.join("initial_conditions.json"), "initial condition"),
        }
    }

    /// Write every group into `dir` as pretty-printed JSON
    pub fn save_to_dir<P: AsRef<Path>>(&self, dir: P) -> anyhow::Result<()> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir)?;
        std::fs::write(dir.join("kinetics.json"), serde_json::to_string_pretty(&self.kinetics)?)?;
        std::fs::write(dir.join("diffusion.json"), serde_json::to_string_pretty(&self.diffusion)?)?;
        std::fs::write(dir.join("integrator.json"), serde_json::to_string_pretty(&self.integrator)?)?;
        std::fs::write(dir.join("simulation.json"), serde_json::to_string_pretty(&self.simulation)?)?;
        std::fs::write(
            dir.join("initial_conditions.json"),
            serde_json::to_string_pretty(&self.initial_conditions)?,
        )?;
        log::info!("Saved parameters to {:?}", dir);
        Ok(())
    }
}

fn is_valid_step(dt: f64) -> bool {
    dt.is_finite() && dt > 0.0
}

/// Load a parameter group from JSON file or return its defaults
pub fn load_json_or_default<T, P>(path: P, what: &str) -> T
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    match std::fs::read_to_string(path.as_ref()) {
        Ok(contents) => match serde_json::from_str(&contents) {
            Ok(params) => {
                log::info!("Loaded {} parameters from {:?}", what, path.as_ref());
                params
            }
            Err(e) => {
                log::warn!("Failed to parse {} parameters: {}, using defaults", what, e);
                T::default()
            }
        },
        Err(_) => {
            log::info!("{} parameters file not found, using defaults", what);
            T::default()
        }
    }
}

/// Diffusion of unbound proteins between perimeter-adjacent edges
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiffusionParameters {
    /// Diffusion coefficient for free A, B and C
    pub unbound_protein_diffusion_coefficient: f64,
}

impl Default for DiffusionParameters {
    fn default() -> Self {
        Self {
            unbound_protein_diffusion_coefficient: 0.03,
        }
    }
}

/// Outer simulation loop
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationParameters {
    /// Time step between coupling updates
    pub dt: f64,
    /// Simulated duration
    pub end_time: f64,
    /// Record output every this many steps
    pub sampling_timestep_multiple: u64,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            dt: 0.1,
            end_time: 100.0,
            sampling_timestep_multiple: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_parameters() {
        let params = Parameters::default();
        assert_eq!(params.diffusion.unbound_protein_diffusion_coefficient, 0.03);
        assert_eq!(params.simulation.dt, 0.1);
        assert_eq!(params.integrator.dt, 0.001);
        assert_eq!(params.kinetics.kd1, 5.0);
        assert_eq!(params.initial_conditions.free_a, 0.333);
    }

    #[test]
    fn test_parameters_serialization() {
        let params = Parameters::default();
        let json = serde_json::to_string_pretty(&params).unwrap();
        let parsed: Parameters = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.kinetics, params.kinetics);
        assert_eq!(parsed.simulation.end_time, params.simulation.end_time);
        assert_eq!(parsed.initial_conditions.b_offsets, params.initial_conditions.b_offsets);
    }

    #[test]
    fn test_missing_directory_uses_defaults() {
        let params = Parameters::load_from_dir("does/not/exist");
        assert_eq!(params.diffusion.unbound_protein_diffusion_coefficient, 0.03);
    }

    #[test]
    fn test_load_from_dir_reads_saved_files() {
        let dir = std::env::temp_dir().join(format!("edge_polarity_params_{}", std::process::id()));
        let mut params = Parameters::default();
        params.diffusion.unbound_protein_diffusion_coefficient = 0.5;
        params.simulation.end_time = 12.0;
        params.save_to_dir(&dir).unwrap();

        let loaded = Parameters::load_from_dir(&dir);
        assert_eq!(loaded.diffusion.unbound_protein_diffusion_coefficient, 0.5);
        assert_eq!(loaded.simulation.end_time, 12.0);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_malformed_file_uses_defaults() {
        let dir = std::env::temp_dir().join(format!("edge_polarity_bad_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("simulation.json"), "{ not json").unwrap();

        let sim: SimulationParameters = load_json_or_default(dir.join("simulation.json"), "simulation");
        assert_eq!(sim.dt, 0.1);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_non_positive_steps_use_defaults() {
        let dir = std::env::temp_dir().join(format!("edge_polarity_steps_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(
            dir.join("simulation.json"),
            r#"{ "dt": 0.0, "end_time": 5.0, "sampling_timestep_multiple": 2 }"#,
        )
        .unwrap();
        std::fs::write(dir.join("integrator.json"), r#"{ "dt": -0.001, "clamp_non_negative": true }"#).unwrap();

        let params = Parameters::load_from_dir(&dir);
        assert_eq!(params.simulation.dt, 0.1);
        assert_eq!(params.simulation.end_time, 100.0);
        assert_eq!(params.integrator.dt, 0.001);
        assert!(!params.integrator.clamp_non_negative);
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
