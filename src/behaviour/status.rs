//! Status carried and returned by behaviour nodes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Execution state of a behaviour node.
///
/// `Initialise` and `Ongoing` are non-terminal. `Success` and `Failure` end
/// the current execution pass; a node stays there until it is reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BehaviourState {
    /// Not started yet, or reset since the last pass.
    #[default]
    Initialise,

    /// Started but unresolved. The node expects to be executed again next tick.
    Ongoing,

    Success,

    Failure,
}

impl BehaviourState {
    /// Returns `true` for `Success` and `Failure`.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Success | Self::Failure)
    }

    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }

    #[inline]
    pub fn is_failure(self) -> bool {
        matches!(self, Self::Failure)
    }
}

impl fmt::Display for BehaviourState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Initialise => "Initialise",
            Self::Ongoing => "Ongoing",
            Self::Success => "Success",
            Self::Failure => "Failure",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_initialise() {
        assert_eq!(BehaviourState::default(), BehaviourState::Initialise);
    }

    #[test]
    fn terminal_states() {
        assert!(!BehaviourState::Initialise.is_terminal());
        assert!(!BehaviourState::Ongoing.is_terminal());
        assert!(BehaviourState::Success.is_terminal());
        assert!(BehaviourState::Failure.is_terminal());
    }

    #[test]
    fn success_and_failure_predicates() {
        assert!(BehaviourState::Success.is_success());
        assert!(!BehaviourState::Success.is_failure());
        assert!(BehaviourState::Failure.is_failure());
        assert!(!BehaviourState::Ongoing.is_success());
    }

    #[test]
    fn serializes_as_variant_name() {
        let json = serde_json::to_string(&BehaviourState::Ongoing).unwrap();
        assert_eq!(json, "\"Ongoing\"");
    }
}
