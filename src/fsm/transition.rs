//! Guarded edges between states.

use crate::core::{Guard, StateId};

/// A directed edge `from -> to` that fires when its guard passes.
///
/// Transitions are owned by the machine they are added to. When several
/// transitions leave the same state, the one registered first wins.
#[derive(Debug)]
pub struct Transition {
    pub from: StateId,
    pub to: StateId,
    pub guard: Guard,
}

impl Transition {
    pub fn new(from: StateId, to: StateId, guard: Guard) -> Self {
        Self { from, to, guard }
    }

    /// Build a transition straight from a predicate closure.
    pub fn when<F>(from: StateId, to: StateId, predicate: F) -> Self
    where
        F: Fn() -> bool + 'static,
    {
        Self::new(from, to, Guard::new(predicate))
    }

    /// Transition that fires on the first tick spent in `from`.
    pub fn always(from: StateId, to: StateId) -> Self {
        Self::new(from, to, Guard::always())
    }

    /// Check if this transition fires from the given active state.
    pub fn can_fire(&self, current: StateId) -> bool {
        // The guard is only consulted for transitions leaving the active state
        current == self.from && self.guard.check()
    }
}
