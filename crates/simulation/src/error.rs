//! Error types for the simulation engine.

use edflow_types::ScenarioField;
use thiserror::Error;

/// Errors raised while constructing a simulator.
#[derive(Debug, Error)]
pub enum SimulationError {
    /// A scenario parameter cannot parameterise its sampling distribution.
    #[error("Invalid distribution parameter {field} = {value}: {reason}")]
    InvalidParameter {
        field: ScenarioField,
        value: f64,
        reason: String,
    },
}
