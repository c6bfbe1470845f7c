// src/math/mod.rs

pub mod integrator;
pub mod rates;

pub use integrator::forward_euler;
pub use integrator::forward_euler_scaled;
pub use rates::RateCoefficients;
