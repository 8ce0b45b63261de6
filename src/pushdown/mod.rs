//! Stack-based state machine for nested modal flow.
//!
//! A [`PushdownMachine`] owns a stack of [`PushdownState`]s and updates the
//! one on top. A state can push a new mode over itself (menu -> game ->
//! pause) or pop back to whatever it covered, so "return to where I came
//! from" needs no explicit history.

mod machine;
mod state;

pub use machine::PushdownMachine;
pub use state::{PushdownResult, PushdownState};
