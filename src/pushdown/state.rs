//! Modal states driven by a pushdown machine.

use std::fmt;

/// Outcome of one [`PushdownState::on_update`] call.
pub enum PushdownResult {
    /// Stay on the current state.
    NoChange,

    /// Cover the current state with a new one. The covered state sleeps
    /// until the new state is popped.
    Push(Box<dyn PushdownState>),

    /// Leave the current state and resume the one beneath it.
    Pop,
}

impl PushdownResult {
    /// Convenience for `PushdownResult::Push(Box::new(state))`.
    pub fn push<S: PushdownState + 'static>(state: S) -> Self {
        Self::Push(Box::new(state))
    }
}

impl fmt::Debug for PushdownResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoChange => f.write_str("NoChange"),
            Self::Push(state) => f.debug_tuple("Push").field(&state.name()).finish(),
            Self::Pop => f.write_str("Pop"),
        }
    }
}

/// One mode of a modal flow (intro screen, gameplay, pause menu, ...).
///
/// # Lifecycle
///
/// - `on_awake`: every time the state becomes the top of the stack, both when
///   first pushed and when resumed after the state above it is popped
/// - `on_update`: once per tick while on top
/// - `on_sleep`: when covered by a pushed state, and right before being popped
pub trait PushdownState {
    fn on_update(&mut self, dt: f32) -> PushdownResult;

    fn on_awake(&mut self) {}

    fn on_sleep(&mut self) {}

    /// Name used in logs. Defaults to the implementing type's name.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}
