//! Errors raised by definitions and running machines.

use thiserror::Error;

/// Errors surfaced when querying a definition or driving a machine.
///
/// None of these leave a machine partially updated: the current state is
/// exactly what it was before the failing call.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MachineError {
    #[error("State '{state}' is not declared by this machine")]
    UndefinedState { state: String },

    #[error("Event '{event}' is not declared by this machine")]
    UndefinedEvent { event: String },

    #[error("Event '{event}' has no transition from state '{from}'")]
    InvalidTransition { event: String, from: String },

    #[error("No state is marked as initial")]
    NoInitialState,
}

/// Problems found when validating a definition in strict mode.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DefinitionViolation {
    #[error("No state is marked as initial")]
    NoInitialState,

    #[error("Several states are marked as initial: {states:?}")]
    MultipleInitialStates { states: Vec<String> },

    #[error("Event '{event}' leaves undeclared state '{state}'")]
    UndeclaredSource { event: String, state: String },

    #[error("Event '{event}' enters undeclared state '{state}'")]
    UndeclaredTarget { event: String, state: String },
}
