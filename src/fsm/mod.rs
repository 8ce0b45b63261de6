//! Guarded finite-state machine.
//!
//! A [`StateMachine`] owns its states and transitions and tracks exactly one
//! active state. It is a pure tick machine: nothing happens outside
//! [`StateMachine::update`], which the owning frame loop calls once per frame.
//!
//! # Key Concepts
//!
//! - **Transitions**: directed edges guarded by a no-argument predicate
//! - **Tie-break**: transitions are scanned in registration order and the
//!   first passing guard wins, so at most one transition fires per tick
//! - **Fail fast**: updating an empty machine or wiring a transition to a
//!   state from another machine is reported as a [`MachineError`]

mod error;
mod machine;
mod transition;

pub use error::MachineError;
pub use machine::StateMachine;
pub use transition::Transition;
