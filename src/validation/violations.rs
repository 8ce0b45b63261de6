//! Authoring mistakes found in a control graph.

use crate::behaviour::NodeKind;
use thiserror::Error;

/// A structural problem in a state machine declaration or behaviour tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("Transition '{transition}' references undeclared state '{state}'")]
    DanglingReference { transition: String, state: String },

    #[error("State '{name}' is declared more than once")]
    DuplicateState { name: String },

    #[error("Initial state '{name}' is not declared")]
    UnknownInitialState { name: String },

    #[error("{kind} '{name}' has no children")]
    EmptyComposite { name: String, kind: NodeKind },
}
