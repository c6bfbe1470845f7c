// src/models/mod.rs

pub mod channels;
pub mod neuron;
pub mod stimulus;

pub use neuron::{update_neuron, NeuronState};
pub use stimulus::{injected_current, StimulusWindow, STIMULUS_WINDOW};
