//! Helpers for terse behaviour tree construction.
//!
//! Instead of writing `Box::new(Sequence::with_children(name, vec![...]))`,
//! use `sequence(name, vec![...])`.

use crate::behaviour::{Action, BehaviourNode, BehaviourState, Selector, Sequence};

/// Creates a boxed action leaf.
#[inline]
pub fn action<F>(name: impl Into<String>, decide: F) -> Box<dyn BehaviourNode>
where
    F: FnMut(f32, BehaviourState) -> BehaviourState + 'static,
{
    Box::new(Action::new(name, decide))
}

/// Creates a boxed sequence node.
#[inline]
pub fn sequence(
    name: impl Into<String>,
    children: Vec<Box<dyn BehaviourNode>>,
) -> Box<dyn BehaviourNode> {
    Box::new(Sequence::with_children(name, children))
}

/// Creates a boxed selector node.
#[inline]
pub fn selector(
    name: impl Into<String>,
    children: Vec<Box<dyn BehaviourNode>>,
) -> Box<dyn BehaviourNode> {
    Box::new(Selector::with_children(name, children))
}

/// Leaf that succeeds on its first execution.
pub fn always_success(name: impl Into<String>) -> Box<dyn BehaviourNode> {
    action(name, |_, _| BehaviourState::Success)
}

/// Leaf that fails on its first execution.
pub fn always_failure(name: impl Into<String>) -> Box<dyn BehaviourNode> {
    action(name, |_, _| BehaviourState::Failure)
}
