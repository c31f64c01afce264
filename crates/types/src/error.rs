//! Error types for scenario configuration.

use crate::scenario::ScenarioField;
use thiserror::Error;

/// Errors raised while building or modifying a scenario.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScenarioError {
    /// A field of an already-constructed scenario was written to.
    #[error("Scenario '{scenario}' is immutable: cannot assign to {field}")]
    ImmutabilityViolation {
        scenario: String,
        field: ScenarioField,
    },

    /// A parameter is outside its valid domain.
    #[error("Invalid {field} = {value}: {reason}")]
    InvalidParameter {
        field: ScenarioField,
        value: String,
        reason: &'static str,
    },

    /// A field name did not match any scenario parameter.
    #[error("Unknown scenario field: {0}")]
    UnknownField(String),
}
