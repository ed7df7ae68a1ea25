//! Build errors for machine definitions and transitions.

use crate::machine::DefinitionViolation;
use thiserror::Error;

/// Errors that can occur when building definitions and transitions.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Transition source state not specified. Call .from(state)")]
    MissingFromState,

    #[error("Transition target state not specified. Call .to(state)")]
    MissingToState,

    #[error("Guard '{guard}' is not registered")]
    UnknownGuard { guard: String },

    #[error("Definition is invalid: {}", render_violations(.0))]
    InvalidDefinition(Vec<DefinitionViolation>),

    #[error("Machine description could not be parsed: {0}")]
    Config(#[from] serde_json::Error),
}

fn render_violations(violations: &[DefinitionViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
