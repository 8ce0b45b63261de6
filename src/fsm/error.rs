//! State machine error types.

use crate::core::StateId;
use thiserror::Error;
use uuid::Uuid;

/// Errors raised by [`StateMachine`](super::StateMachine).
///
/// Both variants describe a malformed control graph. They are meant to be
/// surfaced immediately, not retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MachineError {
    /// `update` was called before any state was registered.
    #[error("State machine has no active state. Call add_state before the first update")]
    InvalidState,

    /// A transition endpoint is not registered with the machine.
    #[error("Transition references {state}, which is not registered with machine {machine}")]
    DanglingReference { state: StateId, machine: Uuid },
}
