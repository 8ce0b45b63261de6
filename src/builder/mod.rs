//! Builder API for ergonomic state machine construction.
//!
//! [`StateMachineBuilder`] lets a machine be declared with states addressed
//! by name instead of by [`StateId`](crate::core::StateId) handles. Mistakes
//! in the declaration are collected and reported together by `build`.

pub mod error;
pub mod machine;
pub mod transition;

pub use error::BuildError;
pub use machine::StateMachineBuilder;
pub use transition::TransitionBuilder;

/// Create an unconditional transition.
///
/// # Example
///
/// ```
/// use tickflow::builder::{simple_transition, StateMachineBuilder};
/// use tickflow::core::State;
///
/// let machine = StateMachineBuilder::new()
///     .state(State::idle("Start"))
///     .state(State::idle("End"))
///     .transition(simple_transition("Start", "End"))
///     .build();
/// assert!(machine.is_ok());
/// ```
pub fn simple_transition(from: impl Into<String>, to: impl Into<String>) -> TransitionBuilder {
    TransitionBuilder::new().from(from).to(to)
}

/// Create a transition with a guard predicate.
///
/// # Example
///
/// ```
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use tickflow::builder::guarded_transition;
///
/// let alarm = Rc::new(Cell::new(false));
/// let watched = Rc::clone(&alarm);
/// let flee = guarded_transition("Patrol", "Flee", move || watched.get());
/// ```
pub fn guarded_transition<F>(
    from: impl Into<String>,
    to: impl Into<String>,
    guard: F,
) -> TransitionBuilder
where
    F: Fn() -> bool + 'static,
{
    TransitionBuilder::new().from(from).to(to).when(guard)
}
