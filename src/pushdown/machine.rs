//! Stack of modal states.

use crate::pushdown::{PushdownResult, PushdownState};

/// Pushdown automaton over [`PushdownState`]s.
///
/// The top of the stack is the active state. Pushing remembers where the flow
/// came from; popping returns there. The machine is finished once its last
/// state is popped, which [`update`](Self::update) reports by returning
/// `false`.
///
/// # Example
///
/// ```rust
/// use tickflow::pushdown::{PushdownMachine, PushdownResult, PushdownState};
///
/// struct Pause;
///
/// impl PushdownState for Pause {
///     fn on_update(&mut self, _dt: f32) -> PushdownResult {
///         PushdownResult::Pop
///     }
/// }
///
/// struct Game {
///     paused_once: bool,
/// }
///
/// impl PushdownState for Game {
///     fn on_update(&mut self, _dt: f32) -> PushdownResult {
///         if !self.paused_once {
///             self.paused_once = true;
///             return PushdownResult::push(Pause);
///         }
///         PushdownResult::Pop
///     }
/// }
///
/// let mut machine = PushdownMachine::new(Box::new(Game { paused_once: false }));
/// assert!(machine.update(0.016)); // Game pushes Pause
/// assert_eq!(machine.depth(), 2);
/// assert!(machine.update(0.016)); // Pause pops, Game resumes
/// assert!(!machine.update(0.016)); // Game pops, nothing left
/// ```
pub struct PushdownMachine {
    stack: Vec<Box<dyn PushdownState>>,
}

impl PushdownMachine {
    /// Create a machine and awaken its initial state.
    pub fn new(mut initial: Box<dyn PushdownState>) -> Self {
        tracing::debug!(state = initial.name(), "pushdown machine started");
        initial.on_awake();
        Self {
            stack: vec![initial],
        }
    }

    /// Update the top state and apply the stack change it asks for.
    ///
    /// Returns `false` once the stack is empty; the owning loop should stop.
    pub fn update(&mut self, dt: f32) -> bool {
        let Some(top) = self.stack.last_mut() else {
            return false;
        };

        match top.on_update(dt) {
            PushdownResult::NoChange => {}
            PushdownResult::Push(mut next) => {
                top.on_sleep();
                tracing::debug!(from = top.name(), to = next.name(), "pushdown push");
                next.on_awake();
                self.stack.push(next);
            }
            PushdownResult::Pop => {
                top.on_sleep();
                if let Some(popped) = self.stack.pop() {
                    tracing::debug!(state = popped.name(), depth = self.stack.len(), "pushdown pop");
                }
                let Some(resumed) = self.stack.last_mut() else {
                    tracing::debug!("pushdown stack emptied");
                    return false;
                };
                resumed.on_awake();
            }
        }

        true
    }

    /// Number of states on the stack.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Name of the state on top of the stack.
    pub fn active_name(&self) -> Option<&str> {
        self.stack.last().map(|state| state.name())
    }
}

impl Drop for PushdownMachine {
    fn drop(&mut self) {
        // Destroy top-first so inner modes go before the ones they covered
        while self.stack.pop().is_some() {}
    }
}

impl std::fmt::Debug for PushdownMachine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.stack.iter().map(|s| s.name()).collect();
        f.debug_struct("PushdownMachine").field("stack", &names).finish()
    }
}
