//! Guard predicates for controlling state transitions.
//!
//! Guards are no-argument boolean functions that decide whether a transition
//! fires. Whatever context they inspect is captured by the closure; the
//! machine itself never passes anything in.

use std::fmt;

/// Predicate that determines if a transition fires this tick.
///
/// Guards should be free of side effects: the machine may evaluate them in any
/// tick, and stops evaluating as soon as one guard of the active state passes.
///
/// # Example
///
/// ```rust
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use tickflow::core::Guard;
///
/// let health = Rc::new(Cell::new(100));
/// let watched = Rc::clone(&health);
/// let low_health = Guard::new(move || watched.get() < 25);
///
/// assert!(!low_health.check());
/// health.set(10);
/// assert!(low_health.check());
/// ```
pub struct Guard {
    predicate: Box<dyn Fn() -> bool>,
}

impl Guard {
    /// Create a guard from a predicate closure.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn() -> bool + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
        }
    }

    /// Guard that always passes.
    pub fn always() -> Self {
        Self::new(|| true)
    }

    /// Guard that never passes.
    pub fn never() -> Self {
        Self::new(|| false)
    }

    /// Evaluate the predicate.
    pub fn check(&self) -> bool {
        (self.predicate)()
    }
}

impl fmt::Debug for Guard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Guard(..)")
    }
}
