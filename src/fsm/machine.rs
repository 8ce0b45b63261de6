//! Flat state machine driven once per frame.

use crate::core::{State, StateId};
use crate::fsm::error::MachineError;
use crate::fsm::transition::Transition;
use uuid::Uuid;

/// Guarded finite-state machine.
///
/// Each [`update`](StateMachine::update) ticks the active state and then takes
/// at most one transition: the first registered transition leaving the active
/// state whose guard passes. Only the active state is tracked; no history is
/// kept.
///
/// # Example
///
/// ```rust
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use tickflow::core::State;
/// use tickflow::fsm::{StateMachine, Transition};
///
/// let data = Rc::new(Cell::new(0));
/// let mut machine = StateMachine::new();
///
/// let up = Rc::clone(&data);
/// let a = machine.add_state(State::new("A", move |_| up.set(up.get() + 1)));
/// let down = Rc::clone(&data);
/// let b = machine.add_state(State::new("B", move |_| down.set(down.get() - 1)));
///
/// let watched = Rc::clone(&data);
/// machine.add_transition(Transition::when(a, b, move || watched.get() > 2))?;
///
/// for _ in 0..3 {
///     machine.update(1.0)?;
/// }
/// assert_eq!(machine.active_state(), Some(b));
/// # Ok::<(), tickflow::fsm::MachineError>(())
/// ```
#[derive(Debug)]
pub struct StateMachine {
    id: Uuid,
    states: Vec<State>,
    transitions: Vec<Transition>,
    active: Option<StateId>,
}

impl StateMachine {
    /// Create an empty machine with no active state.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            states: Vec::new(),
            transitions: Vec::new(),
            active: None,
        }
    }

    /// Identity stamped into every [`StateId`] this machine issues.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Register a state. The first state registered becomes active.
    pub fn add_state(&mut self, state: State) -> StateId {
        let id = StateId::new(self.id, self.states.len());
        tracing::trace!(state = state.name(), %id, "state registered");
        self.states.push(state);
        if self.active.is_none() {
            self.active = Some(id);
        }
        id
    }

    /// Register a transition. Registration order breaks ties between
    /// transitions leaving the same state.
    pub fn add_transition(&mut self, transition: Transition) -> Result<(), MachineError> {
        self.ensure_registered(transition.from)?;
        self.ensure_registered(transition.to)?;
        self.transitions.push(transition);
        Ok(())
    }

    /// Force the active state, e.g. to start somewhere other than the first
    /// registered state.
    pub fn set_active(&mut self, state: StateId) -> Result<(), MachineError> {
        self.ensure_registered(state)?;
        self.active = Some(state);
        Ok(())
    }

    /// Tick the active state, then take the first transition out of it whose
    /// guard passes.
    pub fn update(&mut self, dt: f32) -> Result<(), MachineError> {
        let active = self.active.ok_or(MachineError::InvalidState)?;
        let state = self
            .states
            .get_mut(active.index())
            .ok_or(MachineError::InvalidState)?;

        tracing::trace!(state = state.name(), dt, "ticking active state");
        state.tick(dt);

        let Some(target) = self
            .transitions
            .iter()
            .find(|t| t.can_fire(active))
            .map(|t| t.to)
        else {
            return Ok(());
        };

        tracing::debug!(
            from = self.name_of(active),
            to = self.name_of(target),
            "state transition"
        );
        self.active = Some(target);
        Ok(())
    }

    /// Currently active state, `None` before the first `add_state`.
    pub fn active_state(&self) -> Option<StateId> {
        self.active
    }

    /// Name of the currently active state.
    pub fn active_state_name(&self) -> Option<&str> {
        self.active.and_then(|id| self.state_name(id))
    }

    /// Name of a registered state.
    pub fn state_name(&self, state: StateId) -> Option<&str> {
        if !self.contains(state) {
            return None;
        }
        self.states.get(state.index()).map(State::name)
    }

    /// Check whether a handle was issued by this machine.
    pub fn contains(&self, state: StateId) -> bool {
        state.machine() == self.id && state.index() < self.states.len()
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    pub fn transition_count(&self) -> usize {
        self.transitions.len()
    }

    fn ensure_registered(&self, state: StateId) -> Result<(), MachineError> {
        if self.contains(state) {
            return Ok(());
        }
        tracing::warn!(%state, machine = %self.id, "rejected dangling state reference");
        Err(MachineError::DanglingReference {
            state,
            machine: self.id,
        })
    }

    fn name_of(&self, state: StateId) -> &str {
        self.state_name(state).unwrap_or("<unregistered>")
    }
}

impl Default for StateMachine {
    fn default() -> Self {
        Self::new()
    }
}
