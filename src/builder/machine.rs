//! Builder for constructing state machines from named states.

use crate::builder::error::BuildError;
use crate::builder::transition::{DeclaredTransition, TransitionBuilder};
use crate::core::{State, StateId};
use crate::fsm::{StateMachine, Transition};
use crate::validation::{accumulate, require, Violation};
use std::collections::{HashMap, HashSet};

/// Builder for constructing state machines with a fluent API.
///
/// States are declared up front and transitions refer to them by name.
/// `build` checks the whole declaration and reports every problem it finds
/// at once.
///
/// # Example
///
/// ```rust
/// use tickflow::builder::{guarded_transition, simple_transition, StateMachineBuilder};
/// use tickflow::core::State;
///
/// let mut machine = StateMachineBuilder::new()
///     .state(State::idle("Red"))
///     .state(State::idle("Green"))
///     .state(State::idle("Yellow"))
///     .transition(simple_transition("Red", "Green"))
///     .transition(simple_transition("Green", "Yellow"))
///     .transition(guarded_transition("Yellow", "Red", || true))
///     .build()?;
///
/// machine.update(1.0)?;
/// assert_eq!(machine.active_state_name(), Some("Green"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Default)]
pub struct StateMachineBuilder {
    states: Vec<State>,
    initial: Option<String>,
    transitions: Vec<TransitionBuilder>,
}

impl StateMachineBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a state. The first declared state starts active unless
    /// [`initial`](Self::initial) says otherwise.
    pub fn state(mut self, state: State) -> Self {
        self.states.push(state);
        self
    }

    /// Choose the starting state by name.
    pub fn initial(mut self, name: impl Into<String>) -> Self {
        self.initial = Some(name.into());
        self
    }

    /// Add a transition. Declaration order is the tie-break order.
    pub fn transition(mut self, builder: TransitionBuilder) -> Self {
        self.transitions.push(builder);
        self
    }

    /// Add multiple transitions at once.
    pub fn transitions(mut self, builders: Vec<TransitionBuilder>) -> Self {
        self.transitions.extend(builders);
        self
    }

    /// Build the state machine.
    pub fn build(self) -> Result<StateMachine, BuildError> {
        if self.states.is_empty() {
            return Err(BuildError::NoStates);
        }

        let declared = self
            .transitions
            .into_iter()
            .map(TransitionBuilder::declare)
            .collect::<Result<Vec<_>, _>>()?;

        validate(&self.states, self.initial.as_deref(), &declared).map_err(BuildError::Invalid)?;

        let mut machine = StateMachine::new();
        let mut ids = HashMap::new();
        for state in self.states {
            let name = state.name().to_string();
            let id = machine.add_state(state);
            ids.insert(name, id);
        }

        if let Some(initial) = &self.initial {
            let id = lookup(&ids, initial, || Violation::UnknownInitialState {
                name: initial.clone(),
            })?;
            machine.set_active(id)?;
        }

        for transition in declared {
            let from = lookup(&ids, &transition.from, || dangling(&transition, &transition.from))?;
            let to = lookup(&ids, &transition.to, || dangling(&transition, &transition.to))?;
            machine.add_transition(Transition::new(from, to, transition.guard))?;
        }

        tracing::debug!(
            states = machine.state_count(),
            transitions = machine.transition_count(),
            initial = machine.active_state_name(),
            "state machine built"
        );
        Ok(machine)
    }
}

fn validate(
    states: &[State],
    initial: Option<&str>,
    transitions: &[DeclaredTransition],
) -> Result<(), Vec<Violation>> {
    let mut checks = Vec::new();
    let mut names = HashSet::new();

    for state in states {
        checks.push(require(names.insert(state.name()), || {
            Violation::DuplicateState {
                name: state.name().to_string(),
            }
        }));
    }

    if let Some(initial) = initial {
        checks.push(require(names.contains(initial), || {
            Violation::UnknownInitialState {
                name: initial.to_string(),
            }
        }));
    }

    for transition in transitions {
        for endpoint in [&transition.from, &transition.to] {
            checks.push(require(names.contains(endpoint.as_str()), || {
                dangling(transition, endpoint)
            }));
        }
    }

    accumulate(checks)
}

fn dangling(transition: &DeclaredTransition, state: &str) -> Violation {
    Violation::DanglingReference {
        transition: transition.label(),
        state: state.to_string(),
    }
}

fn lookup<F>(ids: &HashMap<String, StateId>, name: &str, violation: F) -> Result<StateId, BuildError>
where
    F: FnOnce() -> Violation,
{
    ids.get(name)
        .copied()
        .ok_or_else(|| BuildError::Invalid(vec![violation()]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{guarded_transition, simple_transition};
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn builder_requires_states() {
        let result = StateMachineBuilder::new().build();

        assert!(matches!(result, Err(BuildError::NoStates)));
    }

    #[test]
    fn builder_without_transitions_is_allowed() {
        let machine = StateMachineBuilder::new()
            .state(State::idle("Only"))
            .build()
            .unwrap();

        assert_eq!(machine.active_state_name(), Some("Only"));
        assert_eq!(machine.transition_count(), 0);
    }

    #[test]
    fn missing_fields_fail_before_validation() {
        let result = StateMachineBuilder::new()
            .state(State::idle("A"))
            .transition(TransitionBuilder::new().from("A"))
            .build();

        assert!(matches!(result, Err(BuildError::MissingToState)));
    }

    #[test]
    fn build_reports_all_violations() {
        let result = StateMachineBuilder::new()
            .state(State::idle("A"))
            .state(State::idle("A"))
            .initial("Start")
            .transition(simple_transition("A", "B"))
            .transition(simple_transition("C", "A"))
            .build();

        let Err(BuildError::Invalid(violations)) = result else {
            panic!("expected invalid declaration");
        };
        assert_eq!(
            violations,
            vec![
                Violation::DuplicateState { name: "A".into() },
                Violation::UnknownInitialState {
                    name: "Start".into()
                },
                Violation::DanglingReference {
                    transition: "A -> B".into(),
                    state: "B".into(),
                },
                Violation::DanglingReference {
                    transition: "C -> A".into(),
                    state: "C".into(),
                },
            ]
        );
    }

    #[test]
    fn initial_overrides_first_state() {
        let machine = StateMachineBuilder::new()
            .state(State::idle("A"))
            .state(State::idle("B"))
            .initial("B")
            .build()
            .unwrap();

        assert_eq!(machine.active_state_name(), Some("B"));
    }

    #[test]
    fn declaration_order_breaks_ties() {
        let mut machine = StateMachineBuilder::new()
            .state(State::idle("A"))
            .state(State::idle("B"))
            .state(State::idle("C"))
            .transitions(vec![
                guarded_transition("A", "C", || true),
                simple_transition("A", "B"),
            ])
            .build()
            .unwrap();

        machine.update(1.0).unwrap();

        assert_eq!(machine.active_state_name(), Some("C"));
    }

    #[test]
    fn built_machine_runs_guards() {
        let data = Rc::new(Cell::new(0));
        let up = Rc::clone(&data);
        let watched = Rc::clone(&data);
        let mut machine = StateMachineBuilder::new()
            .state(State::new("Count", move |_| up.set(up.get() + 1)))
            .state(State::idle("Done"))
            .transition(guarded_transition("Count", "Done", move || watched.get() >= 3))
            .build()
            .unwrap();

        for _ in 0..5 {
            machine.update(1.0).unwrap();
        }

        assert_eq!(data.get(), 3);
        assert_eq!(machine.active_state_name(), Some("Done"));
    }
}
