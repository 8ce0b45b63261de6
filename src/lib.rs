//! Tickflow: frame-driven decision making for game agents
//!
//! Every structure in this crate is a tick machine. Nothing happens on its
//! own; the owning frame loop calls `update` or `execute` once per frame with
//! the elapsed time, and all state changes happen inside that call.
//!
//! # Core Concepts
//!
//! - **State machine**: named states, guarded transitions, one active state
//!   ([`fsm`], with a name-addressed [`builder`])
//! - **Pushdown machine**: a stack of modes where the top one runs and can
//!   push a new mode or pop back to the one it covered ([`pushdown`])
//! - **Behaviour tree**: sequences and selectors over leaf actions, with
//!   `Ongoing` suspending the tree until the next tick ([`behaviour`])
//! - **Navigation**: the pathfinding interface leaves use to walk to a goal
//!   ([`nav`])
//!
//! # Example
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use tickflow::builder::{guarded_transition, StateMachineBuilder};
//! use tickflow::State;
//!
//! let data = Rc::new(Cell::new(0));
//! let up = Rc::clone(&data);
//! let down = Rc::clone(&data);
//! let high = Rc::clone(&data);
//! let low = Rc::clone(&data);
//!
//! let mut machine = StateMachineBuilder::new()
//!     .state(State::new("A", move |_| up.set(up.get() + 1)))
//!     .state(State::new("B", move |_| down.set(down.get() - 1)))
//!     .transition(guarded_transition("A", "B", move || high.get() > 10))
//!     .transition(guarded_transition("B", "A", move || low.get() < 0))
//!     .build()?;
//!
//! for _ in 0..12 {
//!     machine.update(1.0)?;
//! }
//! assert_eq!(machine.active_state_name(), Some("B"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod behaviour;
pub mod builder;
pub mod core;
pub mod fsm;
pub mod nav;
pub mod pushdown;
pub mod validation;

// Re-export commonly used types
pub use behaviour::{BehaviourNode, BehaviourState};
pub use core::{Guard, State, StateId};
pub use fsm::{MachineError, StateMachine, Transition};
pub use pushdown::{PushdownMachine, PushdownResult, PushdownState};
