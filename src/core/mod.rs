//! Building blocks of the guarded state machine.
//!
//! - [`State`]: a named per-frame tick action
//! - [`StateId`]: the handle a machine hands out when a state is registered
//! - [`Guard`]: a no-argument predicate deciding whether a transition fires

mod guard;
mod state;

pub use guard::Guard;
pub use state::{State, StateId, TickAction};
