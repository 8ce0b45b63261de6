//! Builder for name-addressed transitions.

use crate::builder::error::BuildError;
use crate::core::Guard;

/// Builder for a transition between two states referred to by name.
///
/// Names are resolved when the owning
/// [`StateMachineBuilder`](crate::builder::StateMachineBuilder) is built.
#[derive(Debug, Default)]
pub struct TransitionBuilder {
    from: Option<String>,
    to: Option<String>,
    guard: Option<Guard>,
}

/// A transition whose required fields are all present.
#[derive(Debug)]
pub(crate) struct DeclaredTransition {
    pub from: String,
    pub to: String,
    pub guard: Guard,
}

impl DeclaredTransition {
    pub fn label(&self) -> String {
        format!("{} -> {}", self.from, self.to)
    }
}

impl TransitionBuilder {
    /// Create a new transition builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the source state (required).
    pub fn from(mut self, state: impl Into<String>) -> Self {
        self.from = Some(state.into());
        self
    }

    /// Set the target state (required).
    pub fn to(mut self, state: impl Into<String>) -> Self {
        self.to = Some(state.into());
        self
    }

    /// Add a guard (optional). Without one the transition fires on the
    /// first tick spent in the source state.
    pub fn guard(mut self, guard: Guard) -> Self {
        self.guard = Some(guard);
        self
    }

    /// Add a guard using a closure (optional).
    pub fn when<F>(mut self, predicate: F) -> Self
    where
        F: Fn() -> bool + 'static,
    {
        self.guard = Some(Guard::new(predicate));
        self
    }

    pub(crate) fn declare(self) -> Result<DeclaredTransition, BuildError> {
        let from = self.from.ok_or(BuildError::MissingFromState)?;
        let to = self.to.ok_or(BuildError::MissingToState)?;
        Ok(DeclaredTransition {
            from,
            to,
            guard: self.guard.unwrap_or_else(Guard::always),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_requires_from_state() {
        let result = TransitionBuilder::new().to("B").declare();

        assert!(matches!(result, Err(BuildError::MissingFromState)));
    }

    #[test]
    fn builder_requires_to_state() {
        let result = TransitionBuilder::new().from("A").declare();

        assert!(matches!(result, Err(BuildError::MissingToState)));
    }

    #[test]
    fn missing_guard_means_unconditional() {
        let declared = TransitionBuilder::new().from("A").to("B").declare().unwrap();

        assert!(declared.guard.check());
        assert_eq!(declared.label(), "A -> B");
    }

    #[test]
    fn when_installs_predicate() {
        let declared = TransitionBuilder::new()
            .from("A")
            .to("B")
            .when(|| false)
            .declare()
            .unwrap();

        assert!(!declared.guard.check());
    }
}
