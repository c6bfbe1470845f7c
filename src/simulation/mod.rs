// src/simulation/mod.rs

pub mod csv;
pub mod error;
pub mod framework;
pub mod load_parameters;
pub mod series;

pub use error::{LoadError, SimulationError};
pub use framework::{run_simulation, run_simulation_with_cancel};
pub use series::{Sample, TimeSeries};
