//! States of the guarded state machine.
//!
//! A [`State`] is one discrete mode of an agent: a name used for diagnostics
//! plus a tick action that runs once per frame while the state is active.
//! Registering a state with a machine yields a [`StateId`], the only way to
//! refer to it afterwards.

use serde::Serialize;
use std::fmt;
use uuid::Uuid;

/// Boxed per-frame action of a state.
pub type TickAction = Box<dyn FnMut(f32)>;

/// Handle to a state registered with a particular machine.
///
/// Handles remember which machine minted them, so a handle from one machine
/// handed to another is detected instead of silently aliasing a state.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize)]
pub struct StateId {
    machine: Uuid,
    index: usize,
}

impl StateId {
    pub(crate) fn new(machine: Uuid, index: usize) -> Self {
        Self { machine, index }
    }

    /// Identity of the machine that issued this handle.
    pub fn machine(&self) -> Uuid {
        self.machine
    }

    /// Registration index within the issuing machine.
    pub fn index(&self) -> usize {
        self.index
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "state#{}@{}", self.index, self.machine)
    }
}

/// One discrete mode of a [`StateMachine`](crate::fsm::StateMachine).
///
/// # Example
///
/// ```rust
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use tickflow::core::State;
///
/// let ticks = Rc::new(Cell::new(0));
/// let counter = Rc::clone(&ticks);
/// let mut idle = State::new("Idle", move |_dt| counter.set(counter.get() + 1));
///
/// idle.tick(0.016);
/// idle.tick(0.016);
/// assert_eq!(ticks.get(), 2);
/// assert_eq!(idle.name(), "Idle");
/// ```
pub struct State {
    name: String,
    action: TickAction,
}

impl State {
    /// Create a state from a name and a tick action.
    pub fn new<F>(name: impl Into<String>, action: F) -> Self
    where
        F: FnMut(f32) + 'static,
    {
        Self {
            name: name.into(),
            action: Box::new(action),
        }
    }

    /// Create a state that does nothing while active.
    pub fn idle(name: impl Into<String>) -> Self {
        Self::new(name, |_| {})
    }

    /// Name used in logs and diagnostics.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run the tick action once.
    pub fn tick(&mut self, dt: f32) {
        (self.action)(dt)
    }
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State").field("name", &self.name).finish()
    }
}
