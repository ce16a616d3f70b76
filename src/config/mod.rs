//! Configuration module for loading simulation parameters.

mod parameters;

pub use parameters::{
    load_json_or_default, DiffusionParameters, Parameters, SimulationParameters, DEFAULT_PARAMETER_DIR,
};
