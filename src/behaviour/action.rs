//! Leaf node wrapping an external decision function.

use crate::behaviour::{BehaviourNode, BehaviourState, NodeKind};

/// Boxed decision function of an [`Action`].
pub type Decision = Box<dyn FnMut(f32, BehaviourState) -> BehaviourState>;

/// Leaf node that delegates to a `(dt, current) -> next` decision function.
///
/// The function receives the action's own current state and its result
/// becomes the new current state. A well-behaved function moves from
/// `Initialise` to `Ongoing` (or straight to a terminal state) on its first
/// call, and returns `Ongoing` for as long as it needs more ticks.
///
/// # Example
///
/// ```rust
/// use tickflow::behaviour::{Action, BehaviourNode, BehaviourState};
///
/// let mut remaining = 2.0_f32;
/// let mut wait = Action::new("Wait", move |dt, state| match state {
///     BehaviourState::Initialise => BehaviourState::Ongoing,
///     BehaviourState::Ongoing => {
///         remaining -= dt;
///         if remaining <= 0.0 {
///             BehaviourState::Success
///         } else {
///             BehaviourState::Ongoing
///         }
///     }
///     done => done,
/// });
///
/// assert_eq!(wait.execute(1.0), BehaviourState::Ongoing);
/// assert_eq!(wait.execute(1.0), BehaviourState::Ongoing);
/// assert_eq!(wait.execute(1.0), BehaviourState::Success);
/// ```
pub struct Action {
    name: String,
    state: BehaviourState,
    decide: Decision,
}

impl Action {
    pub fn new<F>(name: impl Into<String>, decide: F) -> Self
    where
        F: FnMut(f32, BehaviourState) -> BehaviourState + 'static,
    {
        Self {
            name: name.into(),
            state: BehaviourState::Initialise,
            decide: Box::new(decide),
        }
    }
}

impl BehaviourNode for Action {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> NodeKind {
        NodeKind::Action
    }

    fn state(&self) -> BehaviourState {
        self.state
    }

    fn execute(&mut self, dt: f32) -> BehaviourState {
        let next = (self.decide)(dt, self.state);
        tracing::trace!(action = %self.name, from = %self.state, to = %next, "action executed");
        self.state = next;
        next
    }

    fn reset(&mut self) {
        self.state = BehaviourState::Initialise;
    }
}
