// src/lib.rs

//! Hodgkin–Huxley 単一コンパートメントモデルの固定刻み数値積分

pub mod config;
pub mod math;
pub mod models;
pub mod simulation;

pub use config::{Scenario, SimulationConfig};
pub use models::NeuronState;
pub use simulation::{run_simulation, run_simulation_with_cancel, LoadError, Sample, SimulationError, TimeSeries};
