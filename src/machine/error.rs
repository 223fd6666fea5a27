//! Errors raised while building or driving a state machine.

use thiserror::Error;

/// Malformed or inconsistent construction input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("no states defined")]
    NoStates,

    #[error("\"*\" cannot be used as a state name")]
    ReservedStateName,

    #[error("transition must be a (source, destination) pair, got {arity} element(s)")]
    MalformedTransition { arity: usize },

    #[error("state {state} not in states")]
    UnknownState { state: String },

    #[error("initial state {state} must be in states")]
    InvalidInitial { state: String },

    #[error("record is missing required field `{0}`")]
    MissingField(&'static str),
}

/// Errors surfaced by state machine operations.
///
/// A failed operation never changes the machine's current state.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MachineError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("state {state} not in states")]
    InvalidState { state: String },

    #[error("invalid transition: {from} -> {to}")]
    InvalidTransition { from: String, to: String },

    #[error("unexpected source state {actual} (expected {expected})")]
    UnexpectedState { expected: String, actual: String },
}

/// Render a state for an error message.
pub(crate) fn describe<S: std::fmt::Debug>(state: &S) -> String {
    format!("{state:?}")
}
