//! Build errors for state machine and transition builders.

use crate::fsm::MachineError;
use crate::validation::Violation;
use thiserror::Error;

/// Errors that can occur when building state machines.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BuildError {
    #[error("No states declared. Add at least one state with .state(...)")]
    NoStates,

    #[error("Transition source state not specified. Call .from(name)")]
    MissingFromState,

    #[error("Transition target state not specified. Call .to(name)")]
    MissingToState,

    #[error("State machine declaration has {} violation(s)", .0.len())]
    Invalid(Vec<Violation>),

    #[error(transparent)]
    Machine(#[from] MachineError),
}
