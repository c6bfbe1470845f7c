// src/config/mod.rs

pub mod parameters;
pub mod scenario;

pub use parameters::SimulationConfig;
pub use scenario::{RunInstance, Scenario};
