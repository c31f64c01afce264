//! Core types for the ED patient-flow simulator.
//!
//! A [`ScenarioConfiguration`] is the frozen set of parameters that drives
//! sampling for one scenario. Once built it cannot be changed; derive a new
//! configuration instead. Configurations are meant to be shared behind an
//! `Arc` across any number of simulators and threads.

mod error;
mod scenario;

pub use error::ScenarioError;
pub use scenario::{
    ScenarioConfiguration, ScenarioField, DEFAULT_MEAN_DTA, DEFAULT_MEAN_PROCESS_TIME,
    DEFAULT_P_ADMIT,
};
